//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::require_login::RequireLogin;
use crate::config::GuardConfig;
use crate::pages::home::HomePage;
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the guard config and shared session state, then registers the
/// protected routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GuardConfig::from_build_env().unwrap_or_else(|e| {
        log::error!("invalid portal config, using defaults: {e}");
        GuardConfig::default()
    });
    provide_context(config);
    provide_context(RwSignal::new(SessionState::default()));

    view! {
        <Title text="FIDO Demo Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ProtectedHome/>
            </Routes>
        </Router>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! {
        <RequireLogin>
            <HomePage/>
        </RequireLogin>
    }
}
