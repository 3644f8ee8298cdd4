//! Registration page against `POST /api/auth/register`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::guard;
use crate::state::toast::ToastState;

/// Sign-up form. A successful registration routes back to the login page;
/// it does not create a session.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let name = username.get_untracked();
        let mail = email.get_untracked();
        let pass = password.get_untracked();
        if name.trim().is_empty() || mail.trim().is_empty() || pass.is_empty() {
            toasts.update(|t| t.error("All fields are required"));
            return;
        }
        if pass != confirm.get_untracked() {
            toasts.update(|t| t.error("Passwords do not match"));
            return;
        }
        pending.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(name.trim(), mail.trim(), &pass).await {
                    Ok(_) => {
                        toasts.update(|t| t.success("Account created, please sign in"));
                        navigate(guard::LOGIN_PATH, NavigateOptions::default());
                    }
                    Err(err) => {
                        toasts.update(|t| t.error(format!("Registration failed: {err}")));
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
            pending.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-page__card" on:submit=submit>
                <h1>"Create account"</h1>
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
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
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
                <label class="auth-page__label">
                    "Confirm password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Creating..." } else { "Create account" }}
                </button>
                <p class="auth-page__switch">
                    <a href=guard::LOGIN_PATH>"Back to sign in"</a>
                </p>
            </form>
        </div>
    }
}
