//! Modal dialog for creating or editing an account.

use leptos::prelude::*;

use crate::net::types::{Role, Status, User, UserDraft};

/// Create/edit form. `initial` is `Some` when editing; the password field
/// only appears for new accounts. Submit bubbles the finished draft up.
#[component]
pub fn UserDialog(
    initial: Option<User>,
    on_cancel: Callback<()>,
    on_submit: Callback<UserDraft>,
) -> impl IntoView {
    let editing = initial.is_some();
    let heading = if editing { "Edit User" } else { "Create User" };

    let username = RwSignal::new(initial.as_ref().map(|u| u.username.clone()).unwrap_or_default());
    let email = RwSignal::new(initial.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let phone = RwSignal::new(
        initial
            .as_ref()
            .map(|u| u.phone_number.clone())
            .unwrap_or_default(),
    );
    let role = RwSignal::new(initial.as_ref().map_or(Role::User, |u| u.role));
    let status = RwSignal::new(initial.as_ref().map_or(Status::Active, |u| u.status));
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<&'static str>::None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = username.get();
        if name.trim().is_empty() {
            error.set(Some("Username is required"));
            return;
        }
        if email.get().trim().is_empty() {
            error.set(Some("Email is required"));
            return;
        }
        if !editing && password.get().is_empty() {
            error.set(Some("Password is required"));
            return;
        }

        on_submit.run(UserDraft {
            username: name.trim().to_owned(),
            email: email.get().trim().to_owned(),
            phone_number: phone.get().trim().to_owned(),
            role: role.get(),
            status: status.get(),
            password: if editing { None } else { Some(password.get()) },
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <form on:submit=submit>
                    <label class="dialog__label">
                        "Username"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Role"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                role.set(
                                    if event_target_value(&ev) == "ADMIN" {
                                        Role::Admin
                                    } else {
                                        Role::User
                                    },
                                );
                            }
                        >
                            <option value="USER" selected=move || role.get() == Role::User>
                                "User"
                            </option>
                            <option value="ADMIN" selected=move || role.get() == Role::Admin>
                                "Admin"
                            </option>
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Status"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                status.set(
                                    if event_target_value(&ev) == "INACTIVE" {
                                        Status::Inactive
                                    } else {
                                        Status::Active
                                    },
                                );
                            }
                        >
                            <option value="ACTIVE" selected=move || status.get() == Status::Active>
                                "Active"
                            </option>
                            <option
                                value="INACTIVE"
                                selected=move || status.get() == Status::Inactive
                            >
                                "Inactive"
                            </option>
                        </select>
                    </label>
                    <Show when=move || !editing>
                        <label class="dialog__label">
                            "Password"
                            <input
                                class="dialog__input"
                                type="password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                    </Show>
                    <Show when=move || error.get().is_some()>
                        <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            {if editing { "Save" } else { "Create" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
