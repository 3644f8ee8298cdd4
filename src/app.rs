//! Root application component with routing, context providers, and the
//! route guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::toast_host::ToastHost;
use crate::guard;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage, users::UsersPage};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::state::users::UsersState;
use crate::util::storage::BrowserTokenStore;

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
/// Provides all shared state contexts, primes the session from durable
/// storage, kicks off token verification, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let users = RwSignal::new(UsersState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(users);
    provide_context(toasts);

    // Cold start: copy a persisted token into the session, then verify it
    // against the backend. Verification failure logs the session out.
    Effect::new(move || {
        let mut store = BrowserTokenStore;
        session.update(|s| guard::prime(s, &mut store));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(crate::state::session::check_auth(session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-console.css"/>
        <Title text="Admin Console"/>

        <Router>
            <RouteGuard/>
            <ToastHost/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("login"))
                    view=LoginPage
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("register"))
                    view=RegisterPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("users"))
                    view=UsersPage
                />
            </Routes>
        </Router>
    }
}

/// Re-evaluates the guard on every navigation and session change and
/// performs the redirect it decides on. Renders nothing.
#[component]
fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let decision = session.with(|s| guard::decide(&path, s));
        if let Some(target) = decision.redirect_target() {
            navigate(target, NavigateOptions::default());
        }
    });
}
