//! Network layer: bearer-token HTTP plumbing and admin API wrappers.

pub mod api;
pub mod types;
pub mod users;

use thiserror::Error;

/// Failure surfaced by any API call.
///
/// The session machine deliberately does not branch on the variant: a
/// transport failure and an expired token both end the session. Pages use
/// the `Display` text for toasts.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("server returned status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),

    /// The call was made outside a browser environment.
    #[error("network unavailable outside the browser")]
    NoBrowser,
}
