//! Durable storage for the session token.
//!
//! The in-memory session state is the source of truth once primed; storage
//! is only a bootstrap source at cold start and the place the HTTP layer
//! reads the bearer token from. The `TokenStore` seam exists so session
//! transitions can be exercised on the host without a browser.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Durable home of the session token.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist a token, replacing any previous value.
    fn save(&mut self, token: &str);
    /// Remove the persisted token. Idempotent.
    fn clear(&mut self);
}

/// `localStorage`-backed store. Outside the browser every operation is a
/// no-op so SSR and host builds stay inert.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window()?;
            let storage = window.local_storage().ok().flatten()?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&mut self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.set_item(TOKEN_KEY, token);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(Some(storage)) = window.local_storage() {
                    let _ = storage.remove_item(TOKEN_KEY);
                }
            }
        }
    }
}

/// In-memory store used by unit tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Option<String>,
}

impl MemoryTokenStore {
    /// Store that already holds a token, for cold-start scenarios.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.to_owned()),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.clone()
    }

    fn save(&mut self, token: &str) {
        self.token = Some(token.to_owned());
    }

    fn clear(&mut self) {
        self.token = None;
    }
}
