//! User-listing state: current page, filters, and the loaded accounts.
//!
//! The async flows (`refresh`, `change_status`, ...) pair a network call
//! with the state mutation and a toast; the mutations themselves are
//! plain methods so the pagination and filter logic is host-testable.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::net::types::{Paginated, Role, Status, User, UserDraft};
use crate::net::users::{self as users_api, ListQuery};
use crate::state::toast::ToastState;

/// State behind the admin users page.
#[derive(Clone, Debug, PartialEq)]
pub struct UsersState {
    pub items: Vec<User>,
    pub loading: bool,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub role_filter: Option<Role>,
    pub status_filter: Option<Status>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            total: 0,
            page: 1,
            page_size: 10,
            search: String::new(),
            role_filter: None,
            status_filter: None,
        }
    }
}

impl UsersState {
    /// The listing query for the current page and filters.
    #[must_use]
    pub fn query(&self) -> ListQuery {
        ListQuery {
            page: self.page,
            page_size: self.page_size,
            search: if self.search.trim().is_empty() {
                None
            } else {
                Some(self.search.clone())
            },
            role: self.role_filter,
            status: self.status_filter,
        }
    }

    /// Number of pages implied by `total`, at least 1.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.total == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(u64::from(self.page_size.max(1)));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Move to a page, clamped to the valid range.
    pub fn set_page(&mut self, page: u32) {
        self.page = page.clamp(1, self.page_count());
    }

    /// Changing any filter resets pagination to the first page.
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    pub fn set_role_filter(&mut self, role: Option<Role>) {
        self.role_filter = role;
        self.page = 1;
    }

    pub fn set_status_filter(&mut self, status: Option<Status>) {
        self.status_filter = status;
        self.page = 1;
    }

    pub fn clear_filters(&mut self) {
        self.search.clear();
        self.role_filter = None;
        self.status_filter = None;
        self.page = 1;
    }

    /// Fold a fetched page into the state.
    pub fn apply_page(&mut self, page: Paginated<User>) {
        self.items = page.items;
        self.total = page.total;
        self.loading = false;
    }

    /// A failed fetch leaves the previous items visible.
    pub fn apply_failure(&mut self) {
        self.loading = false;
    }
}

/// Fetch the current page and fold the result in. Failures surface a
/// toast and keep whatever was already on screen.
pub async fn refresh(users: RwSignal<UsersState>, toasts: RwSignal<ToastState>) {
    let query = users.with_untracked(|u| u.query());
    users.update(|u| u.loading = true);
    match users_api::list_users(&query).await {
        Ok(page) => users.update(|u| u.apply_page(page)),
        Err(err) => {
            users.update(UsersState::apply_failure);
            toasts.update(|t| t.error(format!("Failed to load users: {err}")));
        }
    }
}

/// PATCH a status change, then refetch the page.
pub async fn change_status(
    users: RwSignal<UsersState>,
    toasts: RwSignal<ToastState>,
    id: i64,
    status: Status,
) {
    match users_api::update_status(id, status).await {
        Ok(_) => {
            toasts.update(|t| t.success("Status updated"));
            refresh(users, toasts).await;
        }
        Err(err) => {
            toasts.update(|t| t.error(format!("Failed to update status: {err}")));
        }
    }
}

/// Create an account, then refetch the page.
pub async fn create(users: RwSignal<UsersState>, toasts: RwSignal<ToastState>, draft: UserDraft) {
    match users_api::create_user(&draft).await {
        Ok(_) => {
            toasts.update(|t| t.success("User created"));
            refresh(users, toasts).await;
        }
        Err(err) => {
            toasts.update(|t| t.error(format!("Failed to create user: {err}")));
        }
    }
}

/// Update an account, then refetch the page.
pub async fn update(
    users: RwSignal<UsersState>,
    toasts: RwSignal<ToastState>,
    id: i64,
    draft: UserDraft,
) {
    match users_api::update_user(id, &draft).await {
        Ok(_) => {
            toasts.update(|t| t.success("User updated"));
            refresh(users, toasts).await;
        }
        Err(err) => {
            toasts.update(|t| t.error(format!("Failed to update user: {err}")));
        }
    }
}

/// Delete an account, then refetch the page.
pub async fn remove(users: RwSignal<UsersState>, toasts: RwSignal<ToastState>, id: i64) {
    match users_api::delete_user(id).await {
        Ok(()) => {
            toasts.update(|t| t.success("User deleted"));
            refresh(users, toasts).await;
        }
        Err(err) => {
            toasts.update(|t| t.error(format!("Failed to delete user: {err}")));
        }
    }
}
