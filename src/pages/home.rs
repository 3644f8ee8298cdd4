//! Landing page for signed-in users.

use leptos::prelude::*;

use crate::components::nav_bar::NavBar;
use crate::state::session::SessionState;

/// Home page: greeting plus shortcuts into the admin sections.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(String::new, |u| format!("Welcome back, {}", u.username))
    };
    let is_admin = move || session.get().is_admin();

    view! {
        <div class="home-page">
            <NavBar/>
            <main class="home-page__body">
                <h1>{greeting}</h1>
                <div class="home-page__cards">
                    <Show when=is_admin>
                        <a class="home-page__card" href="/admin/users">
                            <h2>"User management"</h2>
                            <p>"Search, create, edit and export accounts."</p>
                        </a>
                    </Show>
                </div>
            </main>
        </div>
    }
}
