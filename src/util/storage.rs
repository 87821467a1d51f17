//! Session marker persistence in `localStorage`.
//!
//! Best-effort browser-only behavior: a missing window or a storage access
//! error is ignored, and SSR paths no-op.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::guard::SessionSink;

/// Key other pages read the signed-in username from.
pub const USERNAME_KEY: &str = "username";

/// Write the username under [`USERNAME_KEY`].
pub fn store_username(username: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if storage.set_item(USERNAME_KEY, username).is_err() {
                    log::warn!("localStorage write for {USERNAME_KEY} failed");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
    }
}

/// Read the last stored username.
pub fn read_username() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(USERNAME_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// [`SessionSink`] writing to the browser's `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl SessionSink for LocalStorage {
    fn set_username(&self, username: &str) {
        store_username(username);
    }
}
