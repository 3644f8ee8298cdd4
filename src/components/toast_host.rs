//! Renders the toast queue in a fixed overlay with dismiss buttons.

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// Overlay listing all visible toasts, oldest first.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            {move || {
                toasts
                    .get()
                    .toasts
                    .into_iter()
                    .map(|toast| {
                        let class = match toast.level {
                            ToastLevel::Success => "toast toast--success",
                            ToastLevel::Error => "toast toast--error",
                        };
                        let id = toast.id;
                        view! {
                            <div class=class>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
