//! Entrance web entry point
//!
//! Boots the WASM app onto the document body and drops the static boot
//! cover once Leptos owns the page.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Panic messages should reach the console, not vanish.
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("entrance starting");

    leptos::mount::mount_to_body(|| view! { <App/> });

    // The cover in index.html keeps the first paint black until now.
    hide_boot_cover();
}

/// Hide the boot cover element from index.html.
fn hide_boot_cover() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            log::warn!("no window; boot cover left in place");
            return;
        }
    };
    let document = match window.document() {
        Some(d) => d,
        None => {
            log::warn!("no document; boot cover left in place");
            return;
        }
    };

    match document.get_element_by_id("boot-cover") {
        Some(cover) => {
            if let Some(element) = cover.dyn_ref::<HtmlElement>() {
                if let Err(err) = element.class_list().add_1("hidden") {
                    log::warn!("could not hide boot cover: {:?}", err);
                }
            }
            // Backup in case the stylesheet never arrived.
            cover.set_attribute("style", "display: none !important;").ok();
        }
        None => log::warn!("boot cover element not found"),
    }
}
