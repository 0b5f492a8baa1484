//! Full-page navigation

/// Leaves the app for `url`. Hard redirect, no return path.
pub fn redirect(url: &str) {
    let window = match web_sys::window() {
        Some(w) => w,
        None => {
            log::error!("redirect failed: no window");
            return;
        }
    };

    if let Err(err) = window.location().set_href(url) {
        log::error!("redirect to {} failed: {:?}", url, err);
    }
}
