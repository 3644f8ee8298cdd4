//! Colored badge for an account status.

use leptos::prelude::*;

use crate::net::types::Status;

/// Small pill showing `Active` / `Inactive`.
#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    let class = match status {
        Status::Active => "status-badge status-badge--active",
        Status::Inactive => "status-badge status-badge--inactive",
    };
    view! { <span class=class>{status.label()}</span> }
}
