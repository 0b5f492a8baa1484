//! Jump-Scare Overlay Component
//!
//! Terminal full-screen panel: grain layer, clickable mask image, headline.
//! Clicking the mask (or its placeholder) leaves the page for good.

use leptos::prelude::*;

use crate::components::Grain;
use crate::services::navigate;
use crate::state::playback::use_playback_context;
use crate::utils::constants::{DESTINATION_URL, MASK_SRC};

#[component]
pub fn ScareOverlay() -> impl IntoView {
    let ctx = use_playback_context();

    let on_mask_click = move |_| {
        navigate::redirect(DESTINATION_URL);
    };

    // The img stays mounted so its load/error events keep driving the flag;
    // only its visibility toggles.
    view! {
        <div class="scare-overlay">
            <Grain/>
            <div class="scare-content">
                <div class="mask-frame" on:click=on_mask_click>
                    <img
                        src=MASK_SRC
                        alt="Mask"
                        class="mask-image"
                        class=("mask-hidden", move || !ctx.mask_loaded.get())
                        on:load=move |_| ctx.set_mask_loaded(true)
                        on:error=move |_| ctx.set_mask_loaded(false)
                    />
                    {move || {
                        if ctx.mask_loaded.get() {
                            view! { <></> }.into_any()
                        } else {
                            view! {
                                <div class="mask-placeholder">
                                    <div class="mask-placeholder-glyph">"\u{1F464}"</div>
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>
                <h1 class="scare-title">"I see you."</h1>
            </div>
        </div>
    }
}
