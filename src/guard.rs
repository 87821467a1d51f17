//! Route guard for pages that require a logged-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before a protected route renders. One session check decides the
//! outcome: a username means the route may render and the username becomes
//! the session marker; anything else sends the browser to the external login
//! page.
//!
//! DESIGN
//! ======
//! Collaborators are traits so the decision can be exercised without a
//! browser. The check is issued on every activation and never retried.
//! "Logged out" and "backend unreachable" produce the same redirect; the
//! reason is only kept for logging.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::api::ApiError;
use crate::net::types::IsLoggedInResponse;

/// Source of truth for whether the current session is logged in.
pub trait AuthCheck {
    fn is_logged_in(&self) -> impl Future<Output = Result<IsLoggedInResponse, ApiError>>;
}

/// Destination for the session marker.
pub trait SessionSink {
    fn set_username(&self, username: &str);
}

/// Writes to both sinks, first then second.
impl<A: SessionSink, B: SessionSink> SessionSink for (A, B) {
    fn set_username(&self, username: &str) {
        self.0.set_username(username);
        self.1.set_username(username);
    }
}

/// Sends the browser somewhere else.
pub trait Navigator {
    fn redirect(&self, url: &str);
}

/// The navigation attempt being guarded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteSnapshot {
    pub path: String,
    pub query: String,
}

impl RouteSnapshot {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), query: String::new() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DenyReason {
    /// The backend answered with no username.
    NotAuthenticated,
    /// The check could not be completed or decoded.
    CheckFailed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    Allowed { username: String },
    Redirected { reason: DenyReason },
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed { .. })
    }
}

pub struct AuthGuard<C, S, N> {
    check: C,
    sink: S,
    navigator: N,
    login_url: String,
}

impl<C, S, N> AuthGuard<C, S, N>
where
    C: AuthCheck,
    S: SessionSink,
    N: Navigator,
{
    pub fn new(check: C, sink: S, navigator: N, login_url: impl Into<String>) -> Self {
        Self { check, sink, navigator, login_url: login_url.into() }
    }

    /// Whether navigation to `route` may proceed.
    pub async fn can_activate(&self, route: &RouteSnapshot) -> bool {
        self.evaluate(route).await.is_allowed()
    }

    /// Run the session check and apply its side effects.
    ///
    /// Allowed: the username is written to every sink.
    /// Redirected: the navigator is sent to the login URL exactly once and no
    /// sink is touched.
    pub async fn evaluate(&self, route: &RouteSnapshot) -> GuardOutcome {
        log::debug!("auth guard: checking session for {}", route.path);

        let reason = match self.check.is_logged_in().await {
            Ok(resp) => match resp.username() {
                Some(username) => {
                    self.sink.set_username(username);
                    log::debug!("auth guard: {} allowed for {username}", route.path);
                    return GuardOutcome::Allowed { username: username.to_owned() };
                }
                None => DenyReason::NotAuthenticated,
            },
            Err(e) => {
                log::debug!("auth guard: session check failed: {e}");
                DenyReason::CheckFailed
            }
        };

        log::debug!("auth guard: {} denied ({reason:?}), redirecting to {}", route.path, self.login_url);
        self.navigator.redirect(&self.login_url);
        GuardOutcome::Redirected { reason }
    }
}
