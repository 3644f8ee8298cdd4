//! Top navigation bar with the signed-in user and a sign-out action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard;
use crate::state::session::SessionState;
use crate::util::storage::BrowserTokenStore;

/// Header bar shown on authenticated pages.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let username = move || {
        session
            .get()
            .user
            .map(|u| u.username)
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        let mut store = BrowserTokenStore;
        session.update(|s| s.logout(&mut store));
        navigate(guard::LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href="/">"Admin Console"</a>
            <nav class="nav-bar__links">
                <a href="/admin/users">"Users"</a>
            </nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{username}</span>
            <button class="btn btn--ghost" on:click=on_logout>
                "Sign out"
            </button>
        </header>
    }
}
