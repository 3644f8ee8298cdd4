//! Login page: username/password form against `POST /api/auth/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard;
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::storage::BrowserTokenStore;

/// Sign-in form. On success the session is authenticated, the token is
/// persisted, and navigation moves to the home page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name = username.get_untracked();
        let pass = password.get_untracked();
        if name.trim().is_empty() || pass.is_empty() {
            toasts.update(|t| t.error("Username and password are required"));
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(name.trim(), &pass).await {
                    Ok(resp) => {
                        let mut store = BrowserTokenStore;
                        session.update(|s| {
                            s.set_token(resp.token, &mut store);
                            s.set_user(resp.user);
                        });
                        navigate(guard::HOME_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        toasts.update(|t| t.error(format!("Sign-in failed: {err}")));
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&navigate, &session);
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__card" on:submit=submit>
                <h1>"Admin Console"</h1>
                <label class="auth-page__label">
                    "Username"
                    <input
                        class="auth-page__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                </button>
                <p class="auth-page__switch">
                    <a href=guard::REGISTER_PATH>"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
