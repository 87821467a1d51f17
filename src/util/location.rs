//! Full-page navigation.

use crate::guard::Navigator;

/// Assign `window.location.href`, leaving the SPA entirely.
pub fn hard_redirect(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if window.location().set_href(url).is_err() {
                log::error!("redirect to {url} failed");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
    }
}

/// [`Navigator`] that reloads the browser at the target URL.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserLocation;

impl Navigator for BrowserLocation {
    fn redirect(&self, url: &str) {
        hard_redirect(url);
    }
}
