//! Media element control
//!
//! Thin wrappers over the `<video>` play/pause surface. Play is the one
//! operation whose outcome matters: a rejected promise is the browser's
//! autoplay policy speaking, and the caller decides what to show for it.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

/// Requests playback and waits for the browser's verdict.
pub async fn attempt_play(video: &HtmlVideoElement) -> Result<(), String> {
    let promise = video.play().map_err(js_error_message)?;
    JsFuture::from(promise).await.map_err(js_error_message)?;
    Ok(())
}

/// Pause is best-effort; a failure here never changes what happens next.
pub fn pause(video: &HtmlVideoElement) {
    if let Err(err) = video.pause() {
        log::warn!("pause request failed: {}", js_error_message(err));
    }
}

fn js_error_message(err: JsValue) -> String {
    match err.as_string() {
        Some(message) => message,
        None => format!("{:?}", err),
    }
}
