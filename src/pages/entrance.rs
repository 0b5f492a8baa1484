//! Entrance Page - full-screen video stage
//!
//! Owns the one video element and decides which overlay sits on top of it.
//! The initial play attempt runs exactly once; everything after that is
//! driven by media events and clicks.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Video;
use leptos::prelude::*;

use crate::components::{GestureGate, ScareOverlay, SkipButton};
use crate::services::media;
use crate::state::playback::{use_playback_context, Overlay, PlaybackPhase};
use crate::utils::constants::{PLAY_ATTEMPT_WATCHDOG_MS, VIDEO_SRC};

#[component]
pub fn EntrancePage() -> impl IntoView {
    let ctx = use_playback_context();
    let video_ref: NodeRef<Video> = NodeRef::new();

    // The effect re-fires when the node ref fills; the attempt must not.
    let autoplay_attempted = RwSignal::new(false);

    Effect::new(move || {
        let video = match video_ref.get() {
            Some(video) => video,
            None => return,
        };
        if autoplay_attempted.get_untracked() {
            return;
        }
        autoplay_attempted.set(true);

        // iOS keeps the video in the page only if this is set before the
        // first play request.
        if let Err(err) = video.set_attribute("playsinline", "") {
            log::warn!("could not set playsinline: {:?}", err);
        }

        leptos::task::spawn_local(async move {
            match media::attempt_play(&video).await {
                Ok(()) => {
                    log::info!("Autoplay with sound succeeded");
                    ctx.mark_started();
                }
                Err(err) => {
                    log::info!("Autoplay blocked: {}", err);
                    ctx.mark_blocked();
                }
            }
        });

        // An attempt that never settles leaves the page dark. Say so, but
        // leave the phase alone.
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(PLAY_ATTEMPT_WATCHDOG_MS).await;
            if ctx.phase.get_untracked() == PlaybackPhase::Booting {
                log::warn!(
                    "play attempt still pending after {}ms",
                    PLAY_ATTEMPT_WATCHDOG_MS
                );
            }
        });
    });

    let on_ended = move |_| {
        log::info!("Video ended");
        ctx.mark_ended();
    };

    view! {
        <div class="entrance">
            <video
                node_ref=video_ref
                class="entrance-video"
                preload="auto"
                on:ended=on_ended
            >
                <source src=VIDEO_SRC type="video/mp4"/>
                "Your browser does not support the video tag."
            </video>

            {move || match ctx.overlay() {
                Overlay::None => view! { <></> }.into_any(),
                Overlay::GesturePrompt => view! { <GestureGate video_ref=video_ref/> }.into_any(),
                Overlay::SkipControl => view! { <SkipButton video_ref=video_ref/> }.into_any(),
                Overlay::JumpScare => view! { <ScareOverlay/> }.into_any(),
            }}
        </div>
    }
}
