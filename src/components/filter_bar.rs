//! Search and filter controls above the user table.

use leptos::prelude::*;

use crate::net::types::{Role, Status};
use crate::state::users::UsersState;

/// Free-text search plus role/status selects. Every change resets the
/// list to the first page; `on_refresh` triggers the refetch.
#[component]
pub fn FilterBar(on_refresh: Callback<()>) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let on_search_input = move |ev| {
        users.update(|u| u.set_search(event_target_value(&ev)));
    };

    let on_search_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_refresh.run(());
    };

    let on_role_change = move |ev| {
        let role = match event_target_value(&ev).as_str() {
            "ADMIN" => Some(Role::Admin),
            "USER" => Some(Role::User),
            _ => None,
        };
        users.update(|u| u.set_role_filter(role));
        on_refresh.run(());
    };

    let on_status_change = move |ev| {
        let status = match event_target_value(&ev).as_str() {
            "ACTIVE" => Some(Status::Active),
            "INACTIVE" => Some(Status::Inactive),
            _ => None,
        };
        users.update(|u| u.set_status_filter(status));
        on_refresh.run(());
    };

    let on_clear = move |_| {
        users.update(UsersState::clear_filters);
        on_refresh.run(());
    };

    view! {
        <form class="filter-bar" on:submit=on_search_submit>
            <input
                class="filter-bar__search"
                type="search"
                placeholder="Search username, email, phone"
                prop:value=move || users.get().search
                on:input=on_search_input
            />
            <select class="filter-bar__select" on:change=on_role_change>
                <option value="">"All roles"</option>
                <option value="ADMIN">"Admin"</option>
                <option value="USER">"User"</option>
            </select>
            <select class="filter-bar__select" on:change=on_status_change>
                <option value="">"All statuses"</option>
                <option value="ACTIVE">"Active"</option>
                <option value="INACTIVE">"Inactive"</option>
            </select>
            <button class="btn btn--primary" type="submit">
                "Search"
            </button>
            <button class="btn" type="button" on:click=on_clear>
                "Clear"
            </button>
        </form>
    }
}
