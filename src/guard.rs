//! Route guard: pure navigation decisions from session state.
//!
//! The guard itself holds no state. On cold start it primes the session
//! from durable storage (token present on disk but not yet in memory),
//! then decides whether the requested path is allowed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::state::session::SessionState;
use crate::util::storage::TokenStore;

/// Paths reachable without a session.
pub const LOGIN_PATH: &str = "/auth/login";
pub const REGISTER_PATH: &str = "/auth/register";
/// Landing page for signed-in users.
pub const HOME_PATH: &str = "/";

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested path.
    Allow,
    /// Not signed in and the path needs a session.
    RedirectLogin,
    /// Signed in but heading to a login/register page.
    RedirectHome,
}

impl GuardDecision {
    /// The path to navigate to, or `None` when navigation proceeds.
    #[must_use]
    pub fn redirect_target(self) -> Option<&'static str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectHome => Some(HOME_PATH),
        }
    }
}

/// Copy a persisted token into a freshly created session, so a page
/// refresh does not drop the bearer token before `check_auth` runs.
pub fn prime(session: &mut SessionState, store: &mut impl TokenStore) {
    if session.token.is_none() {
        if let Some(token) = store.load() {
            session.set_token(token, store);
        }
    }
}

/// Decide whether navigation to `path` is allowed for this session.
#[must_use]
pub fn decide(path: &str, session: &SessionState) -> GuardDecision {
    let auth_page = path == LOGIN_PATH || path == REGISTER_PATH;
    if !session.authenticated && !auth_page {
        return GuardDecision::RedirectLogin;
    }
    if session.authenticated && auth_page {
        return GuardDecision::RedirectHome;
    }
    GuardDecision::Allow
}
