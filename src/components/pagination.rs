//! Pager under the user table: prev/next plus a page-size select.

use leptos::prelude::*;

use crate::state::users::UsersState;

/// Page navigation. `on_page` receives the requested page number;
/// clamping happens in the state.
#[component]
pub fn Pagination(on_page: Callback<u32>) -> impl IntoView {
    let users = expect_context::<RwSignal<UsersState>>();

    let summary = move || {
        let state = users.get();
        format!(
            "Page {} of {} ({} users)",
            state.page,
            state.page_count(),
            state.total
        )
    };

    let at_first = move || users.get().page <= 1;
    let at_last = move || {
        let state = users.get();
        state.page >= state.page_count()
    };

    let on_prev = move |_| {
        let page = users.with(|u| u.page.saturating_sub(1));
        on_page.run(page);
    };
    let on_next = move |_| {
        let page = users.with(|u| u.page + 1);
        on_page.run(page);
    };

    let on_page_size = move |ev| {
        if let Ok(size) = event_target_value(&ev).parse::<u32>() {
            users.update(|u| {
                u.page_size = size;
                u.page = 1;
            });
            on_page.run(1);
        }
    };

    view! {
        <div class="pagination">
            <button class="btn" on:click=on_prev disabled=at_first>
                "Previous"
            </button>
            <span class="pagination__summary">{summary}</span>
            <button class="btn" on:click=on_next disabled=at_last>
                "Next"
            </button>
            <select class="pagination__size" on:change=on_page_size>
                <option value="10">"10 / page"</option>
                <option value="25">"25 / page"</option>
                <option value="50">"50 / page"</option>
            </select>
        </div>
    }
}
