//! Bearer-token HTTP wrapper and auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Every request
//! reads the token fresh from durable storage and attaches
//! `Authorization: Bearer <token>`. No retry, no backoff, no caching.
//!
//! Server-side / host: stubs returning [`ApiError::NoBrowser`] so state
//! machines stay exercisable in unit tests.

#![allow(clippy::unused_async)]

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ApiError;
use super::types::{LoginResponse, User, VerifyResponse};

#[cfg(feature = "hydrate")]
use crate::util::storage::{BrowserTokenStore, TokenStore};

/// `GET` a JSON endpoint.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorize(gloo_net::http::Request::get(path));
        decode(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::NoBrowser)
    }
}

/// `POST` a JSON body, expecting a JSON response.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Method::Post, path, body).await
}

/// `PUT` a JSON body, expecting a JSON response.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Method::Put, path, body).await
}

/// `PATCH` a JSON body, expecting a JSON response.
pub async fn patch_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    send_with_body(Method::Patch, path, body).await
}

/// `DELETE` an endpoint, ignoring any response body.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = authorize(gloo_net::http::Request::delete(path));
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::NoBrowser)
    }
}

enum Method {
    Post,
    Put,
    Patch,
}

async fn send_with_body<T: DeserializeOwned, B: Serialize>(
    method: Method,
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = match method {
            Method::Post => gloo_net::http::Request::post(path),
            Method::Put => gloo_net::http::Request::put(path),
            Method::Patch => gloo_net::http::Request::patch(path),
        };
        let request = authorize(builder)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(request.send().await).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (method, path, body);
        Err(ApiError::NoBrowser)
    }
}

#[cfg(feature = "hydrate")]
fn authorize(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    // Token is read fresh from storage on every call; the session signal
    // is never consulted here.
    match BrowserTokenStore.load() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn decode<T: DeserializeOwned>(
    sent: Result<gloo_net::http::Response, gloo_net::Error>,
) -> Result<T, ApiError> {
    let resp = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Validate a bearer token against `GET /api/auth/verify`.
///
/// Takes the token explicitly so the caller controls which credential is
/// being verified, independent of whatever storage currently holds.
pub async fn verify(token: &str) -> Result<VerifyResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/verify")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<VerifyResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(ApiError::NoBrowser)
    }
}

/// Sign in with username and password via `POST /api/auth/login`.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[derive(Serialize)]
    struct Credentials<'a> {
        username: &'a str,
        password: &'a str,
    }
    post_json("/api/auth/login", &Credentials { username, password }).await
}

/// Create an account via `POST /api/auth/register`.
pub async fn register(username: &str, email: &str, password: &str) -> Result<User, ApiError> {
    #[derive(Serialize)]
    struct Registration<'a> {
        username: &'a str,
        email: &'a str,
        password: &'a str,
    }
    post_json(
        "/api/auth/register",
        &Registration {
            username,
            email,
            password,
        },
    )
    .await
}
