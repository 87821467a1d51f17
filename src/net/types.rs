//! Wire DTOs for the auth backend.
//!
//! DESIGN
//! ======
//! The session check is decoded straight into a typed struct at the HTTP
//! boundary. A missing or `null` `Response` is a valid "not logged in"
//! answer, not a parse failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body returned by the is-logged-in endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsLoggedInResponse {
    /// Username of the current session; empty when logged out.
    #[serde(rename = "Response", default)]
    pub response: Option<String>,
}

impl IsLoggedInResponse {
    /// Username of an authenticated session, if any.
    pub fn username(&self) -> Option<&str> {
        self.response.as_deref().filter(|name| !name.is_empty())
    }
}
