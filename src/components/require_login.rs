//! Wrapper that runs [`AuthGuard`] before showing a protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that need a signed-in user wrap their page in `<RequireLogin>`.
//! Nothing renders until the session check allows it; a denial has already
//! sent the browser to the login page.

#[cfg(test)]
#[path = "require_login_test.rs"]
mod require_login_test;

use leptos::prelude::*;

use crate::config::GuardConfig;
use crate::guard::{AuthCheck, AuthGuard, Navigator, RouteSnapshot, SessionSink};
#[cfg(feature = "hydrate")]
use crate::net::api::RestClient;
use crate::state::session::SessionState;
#[cfg(feature = "hydrate")]
use crate::util::{location::BrowserLocation, storage::LocalStorage};

/// Render `children` only after the session check passes.
#[component]
pub fn RequireLogin(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<GuardConfig>();
    let session = expect_context::<RwSignal<SessionState>>();
    let location = leptos_router::hooks::use_location();
    let allowed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let route =
            RouteSnapshot { path: location.pathname.get_untracked(), query: location.search.get_untracked() };
        let guard = AuthGuard::new(
            RestClient::new(config.is_logged_in_url),
            (LocalStorage, session),
            BrowserLocation,
            config.login_url,
        );
        leptos::task::spawn_local(run_guard(guard, route, allowed));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, session, location);
    }

    view! { <Show when=move || allowed.get()>{children()}</Show> }
}

/// Evaluate `guard` for `route` and publish the decision into `allowed`.
///
/// The guard's own side effects always run. If the route unmounted while the
/// check was in flight, `allowed` is already disposed and is left alone.
pub async fn run_guard<C, S, N>(guard: AuthGuard<C, S, N>, route: RouteSnapshot, allowed: RwSignal<bool>)
where
    C: AuthCheck,
    S: SessionSink,
    N: Navigator,
{
    let decision = guard.can_activate(&route).await;
    if allowed.try_set(decision).is_some() {
        log::debug!("auth guard: {} finished after unmount", route.path);
    }
}
