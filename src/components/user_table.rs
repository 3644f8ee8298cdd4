//! The account listing table with per-row actions.

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Status, User};
use crate::state::users::UsersState;
use crate::util::format::format_date;

/// Table over the current page of accounts.
///
/// Row actions bubble up as callbacks: edit opens the dialog, toggle
/// flips the status, delete removes the account.
#[component]
pub fn UserTable(
    on_edit: Callback<User>,
    on_toggle: Callback<(i64, Status)>,
    on_delete: Callback<i64>,
) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    view! {
        <table class="user-table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Role"</th>
                    <th>"Status"</th>
                    <th>"Created"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    let state = users.get();
                    if state.loading && state.items.is_empty() {
                        return view! {
                            <tr>
                                <td class="user-table__notice" colspan="7">"Loading users..."</td>
                            </tr>
                        }
                            .into_any();
                    }
                    if state.items.is_empty() {
                        return view! {
                            <tr>
                                <td class="user-table__notice" colspan="7">"No users found."</td>
                            </tr>
                        }
                            .into_any();
                    }
                    state
                        .items
                        .into_iter()
                        .map(|user| {
                            let id = user.id;
                            let status = user.status;
                            let toggle_label = match status {
                                Status::Active => "Deactivate",
                                Status::Inactive => "Activate",
                            };
                            let created = user.created_at.map(format_date).unwrap_or_default();
                            let edit_user = user.clone();
                            view! {
                                <tr>
                                    <td>{user.username.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td>{user.phone_number.clone()}</td>
                                    <td>{user.role.label()}</td>
                                    <td>
                                        <StatusBadge status=status/>
                                    </td>
                                    <td>{created}</td>
                                    <td class="user-table__actions">
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| on_edit.run(edit_user.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--small"
                                            on:click=move |_| on_toggle.run((id, status.toggled()))
                                        >
                                            {toggle_label}
                                        </button>
                                        <button
                                            class="btn btn--small btn--danger"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </tbody>
        </table>
    }
}
