//! Gesture Gate Component
//! Full-screen prompt shown when the browser blocks autoplay with sound

use leptos::html::Video;
use leptos::prelude::*;

use crate::services::media;
use crate::state::playback::use_playback_context;

#[component]
pub fn GestureGate(video_ref: NodeRef<Video>) -> impl IntoView {
    let ctx = use_playback_context();

    // The whole surface is the click target. Every click is one retry.
    let on_enter = move |_| {
        leptos::task::spawn_local(async move {
            let video = match video_ref.get_untracked() {
                Some(video) => video,
                None => {
                    log::warn!("retry ignored: video element not mounted");
                    return;
                }
            };

            match media::attempt_play(&video).await {
                Ok(()) => {
                    log::info!("Video started after user interaction");
                    ctx.mark_started();
                }
                Err(err) => {
                    log::error!("Failed to play video: {}", err);
                    ctx.mark_blocked();
                }
            }
        });
    };

    view! {
        <div class="gesture-gate" on:click=on_enter>
            <div class="gesture-gate-inner">
                <p class="gesture-gate-title">"Click to start"</p>
                <p class="gesture-gate-hint">
                    "Your browser requires interaction to play audio."
                </p>
            </div>
        </div>
    }
}
