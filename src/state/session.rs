//! Session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Written by the route guard after a successful session check and read by
//! any component that shows who is signed in. Clearing it belongs to the
//! logout flow.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::guard::SessionSink;

/// Username of the authenticated session, if one has been confirmed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub username: Option<String>,
}

impl SessionState {
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: &str) {
        self.username = Some(username.to_owned());
    }

    pub fn clear(&mut self) {
        self.username = None;
    }
}

impl SessionSink for RwSignal<SessionState> {
    fn set_username(&self, username: &str) {
        self.update(|state| state.set_username(username));
    }
}
