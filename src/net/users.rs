//! Admin user-management API wrappers over `/api/admin/users`.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use serde::Serialize;

use super::ApiError;
use super::api;
use super::types::{Paginated, Role, Status, User, UserDraft};

/// Query parameters for the user listing endpoint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub page_size: u32,
    /// Free-text search over username / email / phone.
    pub search: Option<String>,
    pub role: Option<Role>,
    pub status: Option<Status>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            search: None,
            role: None,
            status: None,
        }
    }
}

impl ListQuery {
    /// Render the query string, omitting empty filters.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut out = format!("page={}&pageSize={}", self.page, self.page_size);
        if let Some(search) = self.search.as_deref() {
            let trimmed = search.trim();
            if !trimmed.is_empty() {
                out.push_str("&search=");
                out.push_str(&urlencoding::encode(trimmed));
            }
        }
        if let Some(role) = self.role {
            out.push_str(match role {
                Role::Admin => "&role=ADMIN",
                Role::User => "&role=USER",
            });
        }
        if let Some(status) = self.status {
            out.push_str(match status {
                Status::Active => "&status=ACTIVE",
                Status::Inactive => "&status=INACTIVE",
            });
        }
        out
    }
}

/// `GET /api/admin/users` — one page of accounts.
pub async fn list_users(query: &ListQuery) -> Result<Paginated<User>, ApiError> {
    let path = format!("/api/admin/users?{}", query.to_query_string());
    api::get_json(&path).await
}

/// `POST /api/admin/users` — create an account.
pub async fn create_user(draft: &UserDraft) -> Result<User, ApiError> {
    api::post_json("/api/admin/users", draft).await
}

/// `PUT /api/admin/users/{id}` — replace an account's editable fields.
pub async fn update_user(id: i64, draft: &UserDraft) -> Result<User, ApiError> {
    api::put_json(&format!("/api/admin/users/{id}"), draft).await
}

/// `DELETE /api/admin/users/{id}`.
pub async fn delete_user(id: i64) -> Result<(), ApiError> {
    api::delete(&format!("/api/admin/users/{id}")).await
}

/// `PATCH /api/admin/users/{id}/status` — change only the account status.
pub async fn update_status(id: i64, status: Status) -> Result<User, ApiError> {
    #[derive(Serialize)]
    struct StatusPatch {
        status: Status,
    }
    api::patch_json(&format!("/api/admin/users/{id}/status"), &StatusPatch { status }).await
}
