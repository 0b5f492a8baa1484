//! Skip Button Component

use leptos::html::Video;
use leptos::prelude::*;

use crate::services::media;
use crate::state::playback::use_playback_context;

#[component]
pub fn SkipButton(video_ref: NodeRef<Video>) -> impl IntoView {
    let ctx = use_playback_context();

    // One pause request, then straight to the scare panel.
    let on_skip = move |_| {
        if let Some(video) = video_ref.get_untracked() {
            media::pause(&video);
        }
        ctx.mark_ended();
    };

    view! {
        <button type="button" class="skip-button" on:click=on_skip>
            "Skip"
        </button>
    }
}
