//! Film Grain Component
//! Scatters randomized noise specks over the scare panel

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::utils::constants::{GRAIN_MOUNT_DELAY_MS, GRAIN_SPECK_COUNT};

#[component]
pub fn Grain() -> impl IntoView {
    // Scatter specks after the panel is in the DOM
    let scatter_effect = move || {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        leptos::task::spawn_local(async move {
            // Wait a bit for the panel to land in the DOM
            TimeoutFuture::new(GRAIN_MOUNT_DELAY_MS).await;

            if let Some(grain_element) = document.get_element_by_id("grain") {
                if let Some(html_element) = grain_element.dyn_ref::<HtmlElement>() {
                    scatter_specks(html_element);
                }
            }
        });
    };

    scatter_effect();

    view! {
        <div
            class="grain"
            id="grain"
        ></div>
    }
}

fn scatter_specks(container: &HtmlElement) {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .expect("should have a document");

    for _i in 0..GRAIN_SPECK_COUNT {
        let speck = document
            .create_element("div")
            .expect("should create speck element");

        speck.set_class_name("speck");

        // Random position, flicker offset and size
        let left = js_sys::Math::random() * 100.0;
        let top = js_sys::Math::random() * 100.0;
        let delay = js_sys::Math::random() * 3.0;
        let size = js_sys::Math::random() * 2.0 + 1.0;

        speck.set_attribute("style", &format!(
            "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px;",
            left, top, delay, size, size
        )).expect("should set style");

        // A few larger, brighter flecks (10% chance)
        if js_sys::Math::random() > 0.9 {
            let large_size = js_sys::Math::random() * 2.0 + 2.0;
            speck.set_attribute("style", &format!(
                "left: {}%; top: {}%; animation-delay: {}s; width: {}px; height: {}px; \
                opacity: 0.6;",
                left, top, delay, large_size, large_size
            )).expect("should set style");
        }

        container
            .append_child(&speck)
            .expect("should append speck");
    }
}
