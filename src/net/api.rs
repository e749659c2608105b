//! REST exchanges with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, credentials
//! included on every call. Server-side (SSR): stubs returning
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as [`ApiError`] values for the page handler to render;
//! a request aborted by view teardown surfaces as `Cancelled` and is dropped.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::scope::RequestScope;
use super::types::{ConfirmationGrant, LogoutAck, RegistrationGrant, SessionGrant};

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(username: &str, password: &str, prior_auth_key: Option<&str>) -> serde_json::Value {
    let mut payload = serde_json::json!({
        "username": username,
        "password": password,
    });
    if let (Some(key), Some(map)) = (prior_auth_key, payload.as_object_mut()) {
        map.insert("authKey".to_owned(), serde_json::Value::String(key.to_owned()));
    }
    payload
}

#[cfg(any(test, feature = "hydrate"))]
fn register_payload(username: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "password": password })
}

#[cfg(any(test, feature = "hydrate"))]
fn confirm_email_payload(access_key: &str) -> serde_json::Value {
    serde_json::json!({ "accessKey": access_key })
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_password_payload(username: &str) -> serde_json::Value {
    serde_json::json!({ "username": username })
}

#[cfg(any(test, feature = "hydrate"))]
fn set_new_password_payload(username: &str, access_key: &str, password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "accessKey": access_key,
        "password": password,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn update_password_payload(username: &str, password: &str, new_password: &str) -> serde_json::Value {
    serde_json::json!({
        "username": username,
        "password": password,
        "newPassword": new_password,
    })
}

#[cfg(any(test, feature = "hydrate"))]
fn logout_payload(username: &str, auth_key: &str) -> serde_json::Value {
    serde_json::json!({ "username": username, "authKey": auth_key })
}

/// POST `payload` to `path` and decode the JSON response body.
#[cfg(feature = "hydrate")]
async fn post_json<T: serde::de::DeserializeOwned>(
    path: &str,
    payload: &serde_json::Value,
    scope: &RequestScope,
) -> Result<T, ApiError> {
    let response = send_post(path, payload, scope).await?;
    let status = response.status();
    let body = response.json::<T>().await.map_err(|_| ApiError::Failed(status))?;
    if scope.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    Ok(body)
}

/// POST `payload` to `path`, succeeding on any 2xx status. A response that
/// lands after the scope was cancelled is discarded as `Cancelled`.
#[cfg(feature = "hydrate")]
async fn send_post(
    path: &str,
    payload: &serde_json::Value,
    scope: &RequestScope,
) -> Result<gloo_net::http::Response, ApiError> {
    let request = gloo_net::http::Request::post(path)
        .credentials(web_sys::RequestCredentials::Include)
        .json(payload)
        .map_err(|_| ApiError::NoResponse)?;
    let response = match request.send().await {
        Ok(response) => response,
        Err(_) if scope.is_cancelled() => return Err(ApiError::Cancelled),
        Err(_) => return Err(ApiError::NoResponse),
    };
    if scope.is_cancelled() {
        return Err(ApiError::Cancelled);
    }
    if !response.ok() {
        return Err(super::error::classify_status(response.status()));
    }
    Ok(response)
}

/// Sign in via `POST /login`.
///
/// # Errors
///
/// `Unauthorized` on rejected credentials, `Conflict` on missing fields,
/// `NoResponse` on transport failure, `Cancelled` on view teardown.
pub async fn login(
    username: &str,
    password: &str,
    prior_auth_key: Option<&str>,
    scope: &RequestScope,
) -> Result<SessionGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/login", &login_payload(username, password, prior_auth_key), scope).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password, prior_auth_key, scope);
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /register`. The session key is withheld until
/// the confirmation email is acted on.
///
/// # Errors
///
/// `Conflict` when the username is already taken.
pub async fn register(
    username: &str,
    password: &str,
    scope: &RequestScope,
) -> Result<RegistrationGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/register", &register_payload(username, password), scope).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password, scope);
        Err(ApiError::Unavailable)
    }
}

/// Redeem an emailed access key via `POST /confirm_email`.
///
/// # Errors
///
/// `Unauthorized` when the access key is invalid or expired.
pub async fn confirm_email(
    access_key: &str,
    scope: &RequestScope,
) -> Result<ConfirmationGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/confirm_email", &confirm_email_payload(access_key), scope).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (access_key, scope);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to send a reset email via `POST /reset_password`.
/// The response body carries nothing the client consumes.
///
/// # Errors
///
/// Transport and status failures per the [`ApiError`] taxonomy.
pub async fn request_password_reset(username: &str, scope: &RequestScope) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send_post("/reset_password", &reset_password_payload(username), scope).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, scope);
        Err(ApiError::Unavailable)
    }
}

/// Set a password from a reset email via `POST /set_new_password`.
///
/// # Errors
///
/// `Unauthorized` when the emailed access key is invalid or expired.
pub async fn set_new_password(
    username: &str,
    access_key: &str,
    password: &str,
    scope: &RequestScope,
) -> Result<SessionGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/set_new_password",
            &set_new_password_payload(username, access_key, password),
            scope,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, access_key, password, scope);
        Err(ApiError::Unavailable)
    }
}

/// Change the password of a signed-in user via `POST /update_password`.
///
/// # Errors
///
/// `Unauthorized` when the current password is wrong.
pub async fn update_password(
    username: &str,
    password: &str,
    new_password: &str,
    scope: &RequestScope,
) -> Result<SessionGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json(
            "/update_password",
            &update_password_payload(username, password, new_password),
            scope,
        )
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password, new_password, scope);
        Err(ApiError::Unavailable)
    }
}

/// End the session via `POST /logout`.
///
/// # Errors
///
/// Transport and status failures; callers clear local state regardless.
pub async fn logout(
    username: &str,
    auth_key: &str,
    scope: &RequestScope,
) -> Result<LogoutAck, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/logout", &logout_payload(username, auth_key), scope).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, auth_key, scope);
        Err(ApiError::Unavailable)
    }
}
