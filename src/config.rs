//! Portal constants: where the session check lives and where denied users go.
//!
//! A WASM bundle has no process environment, so overrides are baked in at
//! build time via `PORTAL_LOGIN_URL` and `PORTAL_IS_LOGGED_IN_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_LOGIN_URL: &str = "/basicauth/login";
pub const DEFAULT_IS_LOGGED_IN_URL: &str = "/basicauth/isLoggedIn";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

/// Endpoints the route guard talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    /// External page the browser is sent to when the session check fails.
    pub login_url: String,
    /// Endpoint answering `{"Response": "<username>"}`.
    pub is_logged_in_url: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self { login_url: DEFAULT_LOGIN_URL.to_owned(), is_logged_in_url: DEFAULT_IS_LOGGED_IN_URL.to_owned() }
    }
}

impl GuardConfig {
    /// Build config from the values captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if an override was set to an empty string.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("PORTAL_LOGIN_URL"), option_env!("PORTAL_IS_LOGGED_IN_URL"))
    }

    /// Build config from optional overrides, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Empty`] if a provided value is blank.
    pub fn from_values(login_url: Option<&str>, is_logged_in_url: Option<&str>) -> Result<Self, ConfigError> {
        Ok(Self {
            login_url: parse_url("PORTAL_LOGIN_URL", login_url, DEFAULT_LOGIN_URL)?,
            is_logged_in_url: parse_url("PORTAL_IS_LOGGED_IN_URL", is_logged_in_url, DEFAULT_IS_LOGGED_IN_URL)?,
        })
    }
}

fn parse_url(key: &'static str, raw: Option<&str>, default: &str) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(default.to_owned()),
        Some("") => Err(ConfigError::Empty { key }),
        Some(value) => Ok(value.to_owned()),
    }
}
