//! Session state: the single source of truth for "who is logged in".
//!
//! STATE MACHINE
//! =============
//! Two states only, `Anonymous` and `Authenticated`. A successful
//! verification or an explicit `set_user` + `set_token` pair moves the
//! session forward; `logout` or any verification failure moves it back.
//! No pending state is modeled while verification is in flight.
//!
//! ERROR HANDLING
//! ==============
//! `check_auth` treats every failure identically: network error, non-2xx
//! and decode errors all end the session. The UI never needs to know
//! which one happened.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::ApiError;
use crate::net::types::{Role, User, VerifyResponse};
use crate::util::storage::{BrowserTokenStore, TokenStore};

/// Current session: user, bearer token, and the authenticated flag.
///
/// Invariant: `authenticated` is true iff both `user` and `token` are set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub authenticated: bool,
}

impl SessionState {
    /// True when the signed-in account has the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == Role::Admin)
    }

    /// Replace the current user and mark the session authenticated.
    /// Trusts the caller; no validation is performed.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.authenticated = true;
    }

    /// Replace the token and persist it immediately.
    pub fn set_token(&mut self, token: String, store: &mut impl TokenStore) {
        store.save(&token);
        self.token = Some(token);
    }

    /// Clear user, token, flag, and the persisted token. Idempotent.
    pub fn logout(&mut self, store: &mut impl TokenStore) {
        self.user = None;
        self.token = None;
        self.authenticated = false;
        store.clear();
    }

    /// Fold a verification outcome into the session.
    ///
    /// Success replaces the user and keeps the verified token; any failure
    /// logs the session out and clears the persisted token.
    pub fn apply_verify(
        &mut self,
        token: &str,
        outcome: Result<VerifyResponse, ApiError>,
        store: &mut impl TokenStore,
    ) {
        match outcome {
            Ok(verify) => {
                self.set_user(verify.user);
                self.token = Some(token.to_owned());
            }
            Err(err) => {
                log_verify_failure(&err);
                self.logout(store);
            }
        }
    }
}

/// Validate the persisted token against `GET /api/auth/verify` and fold
/// the outcome into the session. Without a persisted token this is a
/// no-op and the session stays anonymous.
pub async fn check_auth(session: RwSignal<SessionState>) {
    let mut store = BrowserTokenStore;
    let Some(token) = store.load() else {
        return;
    };
    let outcome = crate::net::api::verify(&token).await;
    session.update(|s| s.apply_verify(&token, outcome, &mut store));
}

fn log_verify_failure(err: &ApiError) {
    #[cfg(feature = "hydrate")]
    log::warn!("token verification failed, logging out: {err}");
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = err;
    }
}
