//! Entrance Web App - Leptos Frontend
//!
//! One full-screen stage. There is no routing: the video gate is the page.

use leptos::prelude::*;

use crate::pages::EntrancePage;
use crate::state::playback::provide_playback_context;

#[component]
pub fn App() -> impl IntoView {
    provide_playback_context();

    view! {
        <div class="stage">
            <EntrancePage/>
        </div>
    }
}
