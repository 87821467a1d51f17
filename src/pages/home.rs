//! Landing page for a signed-in user.

use leptos::prelude::*;

use crate::state::session::SessionState;
use crate::util::storage;

/// Greeting that reads the session marker set by the route guard.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let username = move || {
        session
            .with(|s| s.username().map(str::to_owned))
            .or_else(storage::read_username)
            .unwrap_or_default()
    };

    view! {
        <div class="home-page">
            <h1>"FIDO Demo Portal"</h1>
            <p class="home-page__user">"Signed in as " <span>{username}</span></p>
        </div>
    }
}
