//! Auth Endpoints
//!
//! Registration, login/logout, email verification, and profile updates.
//! The session itself lives in an HTTP-only cookie set by the backend;
//! the optional `access_token` mirror in local storage is advisory only.

use super::client::{self, ApiMessage, FetchError};

/// Current user snapshot from `/auth/my-details`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct User {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub group_ids: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct LoginResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Register a new account.
pub async fn register(
    username: &str,
    full_name: &str,
    email: &str,
    password: &str,
) -> Result<(), String> {
    let response = client::post_form(
        "/auth/register",
        &[
            ("username", username.to_string()),
            ("full_name", full_name.to_string()),
            ("email", email.to_string()),
            ("password", password.to_string()),
        ],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Signup failed").await);
    }
    Ok(())
}

/// Log in. The backend sets the session cookie; any `access_token` in the
/// body is mirrored to local storage for inspection, never sent back.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    let response = client::post_form(
        "/auth/login",
        &[
            ("username", username.to_string()),
            ("password", password.to_string()),
        ],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Login failed").await);
    }

    if let Ok(body) = response.json::<LoginResponse>().await {
        if let Some(token) = body.access_token {
            remember_token(&token);
        }
    }
    Ok(())
}

/// Redeem an email verification token. Returns the backend's message.
pub async fn verify_email(token: &str) -> Result<String, String> {
    let response = client::post_form(
        "/auth/verify-email",
        &[("email_verification_token", token.to_string())],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Verification failed").await);
    }

    let message = response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Email verified successfully!");
    Ok(message)
}

/// Fetch the current user. `Unauthorized` means the session has expired.
pub async fn fetch_current_user() -> Result<User, FetchError> {
    let response = client::get("/auth/my-details")
        .send()
        .await
        .map_err(|e| FetchError::Other(format!("Network error: {}", e)))?;

    match response.status() {
        401 => Err(FetchError::Unauthorized),
        _ if !response.ok() => Err(FetchError::Other(
            client::error_message(response, "Failed to fetch user details").await,
        )),
        _ => response
            .json::<User>()
            .await
            .map_err(|e| FetchError::Other(format!("Parse error: {}", e))),
    }
}

/// Best-effort logout notification. The caller clears local session state
/// regardless of the outcome.
pub async fn logout() -> Result<(), String> {
    let response = client::post("/auth/logout")
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout returned status {}", response.status()));
    }
    Ok(())
}

pub async fn change_username(new_username: &str) -> Result<String, String> {
    let response = client::post_form(
        "/auth/change-username",
        &[("new_username", new_username.to_string())],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to change username").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Username successfully updated."))
}

pub async fn change_password(old_password: &str, new_password: &str) -> Result<String, String> {
    let response = client::post_form(
        "/auth/change-password",
        &[
            ("old_password", old_password.to_string()),
            ("new_password", new_password.to_string()),
        ],
    )
    .await?;

    if !response.ok() {
        return Err(client::error_message(response, "Failed to change password").await);
    }
    Ok(response
        .json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .text_or("Password successfully changed."))
}

/// Mirror a token to local storage. Failures (private mode, quota) are
/// logged and ignored; the cookie still carries the session.
fn remember_token(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if storage.set_item("dormspace_auth_token", token).is_err() {
                tracing::warn!("could not store auth token in local storage");
            }
        }
    }
}
