//! HTTP API Client
//!
//! Thin wrapper over `gloo_net` for talking to the DormSpace backend:
//! base-URL handling, credentialed request builders, form encoding, and
//! decoding of the backend's `{detail}` error bodies. No retry, no
//! timeout, no response caching; callers handle status codes themselves.

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCredentials;

/// Default API base URL (local development backend)
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("dormspace_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Absolute URL for an endpoint, normalized to a single joining slash.
pub fn api_url(endpoint: &str) -> String {
    if endpoint.starts_with('/') {
        format!("{}{}", api_base(), endpoint)
    } else {
        format!("{}/{}", api_base(), endpoint)
    }
}

// ============ Request Builders ============
//
// The session credential is an HTTP-only cookie, so every request opts in
// to cross-origin credentials. Client script never reads the cookie.

pub fn get(endpoint: &str) -> RequestBuilder {
    Request::get(&api_url(endpoint)).credentials(RequestCredentials::Include)
}

pub fn post(endpoint: &str) -> RequestBuilder {
    Request::post(&api_url(endpoint)).credentials(RequestCredentials::Include)
}

pub fn put(endpoint: &str) -> RequestBuilder {
    Request::put(&api_url(endpoint)).credentials(RequestCredentials::Include)
}

pub fn delete(endpoint: &str) -> RequestBuilder {
    Request::delete(&api_url(endpoint)).credentials(RequestCredentials::Include)
}

/// Encode form fields, repeating keys for multi-value fields.
pub fn form_body(fields: &[(&str, String)]) -> Result<String, String> {
    serde_urlencoded::to_string(fields).map_err(|e| format!("Request build error: {}", e))
}

/// POST a form-encoded body to an endpoint.
pub async fn post_form(endpoint: &str, fields: &[(&str, String)]) -> Result<Response, String> {
    submit_form(post(endpoint), fields).await
}

/// PUT a form-encoded body to an endpoint.
pub async fn put_form(endpoint: &str, fields: &[(&str, String)]) -> Result<Response, String> {
    submit_form(put(endpoint), fields).await
}

async fn submit_form(builder: RequestBuilder, fields: &[(&str, String)]) -> Result<Response, String> {
    let body = form_body(fields)?;
    builder
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))
}

// ============ Response Types ============

/// Failure modes callers branch on for read fetches. `Unauthorized` forces
/// a return to the login page; `NotFound` is a valid state for the group
/// lookup, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchError {
    Unauthorized,
    NotFound,
    Other(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Unauthorized => write!(f, "session expired"),
            FetchError::NotFound => write!(f, "not found"),
            FetchError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

/// Success envelope used by most mutating endpoints: `{msg}` or `{message}`.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub group_name: Option<String>,
}

impl ApiMessage {
    pub fn text_or(self, fallback: &str) -> String {
        self.message
            .or(self.msg)
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Error envelope: `detail` is a plain string, a FastAPI validation list,
/// or arbitrary JSON.
#[derive(Debug, serde::Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
    Other(serde_json::Value),
}

#[derive(Debug, serde::Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub loc: Vec<serde_json::Value>,
    #[serde(default)]
    pub msg: String,
}

/// One human-readable message for a failed response. Undecodable or empty
/// bodies fall back to the caller's per-action message.
pub async fn error_message(response: Response, fallback: &str) -> String {
    match response.json::<ErrorBody>().await {
        Ok(body) => body
            .detail
            .and_then(|detail| render_detail(&detail))
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) => fallback.to_string(),
    }
}

/// Flatten an error detail into display text.
pub fn render_detail(detail: &ErrorDetail) -> Option<String> {
    match detail {
        ErrorDetail::Message(msg) => Some(msg.clone()),
        ErrorDetail::Fields(errors) => {
            if errors.is_empty() {
                None
            } else {
                let parts: Vec<String> = errors.iter().map(friendly_field_error).collect();
                Some(parts.join("; "))
            }
        }
        ErrorDetail::Other(value) => Some(value.to_string()),
    }
}

/// "Field: reason" with common backend validation phrasing rewritten.
fn friendly_field_error(err: &FieldError) -> String {
    let field = field_label(&err.loc);
    if err.msg.is_empty() {
        return field;
    }
    if err.msg.contains("at least 5 characters") {
        format!("{} must be at least 5 characters", field)
    } else if err.msg.contains("at least 15 characters") {
        format!("{} must be at least 15 characters", field)
    } else if err.msg.contains("match pattern") {
        format!("{} must be a valid email address", field)
    } else {
        format!("{}: {}", field, err.msg)
    }
}

/// Last element of a validation `loc` path, prettified for display
/// ("full_name" becomes "Full Name").
fn field_label(loc: &[serde_json::Value]) -> String {
    let raw = loc
        .iter()
        .rev()
        .find_map(|v| v.as_str())
        .unwrap_or("Field");

    raw.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_plain_string() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Username already taken"}"#).unwrap();
        let detail = body.detail.unwrap();
        assert_eq!(render_detail(&detail).unwrap(), "Username already taken");
    }

    #[test]
    fn test_detail_pattern_mismatch_becomes_friendly() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["body", "email"], "msg": "string does not match pattern"}]}"#,
        )
        .unwrap();
        let rendered = render_detail(&body.detail.unwrap()).unwrap();
        assert_eq!(rendered, "Email must be a valid email address");
    }

    #[test]
    fn test_detail_multiple_field_errors_joined() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [
                {"loc": ["body", "username"], "msg": "ensure this value has at least 5 characters"},
                {"loc": ["body", "password"], "msg": "ensure this value has at least 15 characters"},
                {"loc": ["body", "full_name"], "msg": "field required"}
            ]}"#,
        )
        .unwrap();
        let rendered = render_detail(&body.detail.unwrap()).unwrap();
        assert_eq!(
            rendered,
            "Username must be at least 5 characters; \
             Password must be at least 15 characters; \
             Full Name: field required"
        );
    }

    #[test]
    fn test_detail_missing_loc_uses_generic_label() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": [{"msg": "something odd"}]}"#).unwrap();
        assert_eq!(
            render_detail(&body.detail.unwrap()).unwrap(),
            "Field: something odd"
        );
    }

    #[test]
    fn test_detail_absent() {
        let body: ErrorBody = serde_json::from_str(r#"{"status": "bad"}"#).unwrap();
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_form_body_repeats_multi_value_keys() {
        let fields = [
            ("chore_name", "Dishes".to_string()),
            ("assigned_usernames", "alice".to_string()),
            ("assigned_usernames", "bob".to_string()),
        ];
        let encoded = form_body(&fields).unwrap();
        assert_eq!(
            encoded,
            "chore_name=Dishes&assigned_usernames=alice&assigned_usernames=bob"
        );
    }

    #[test]
    fn test_form_body_escapes_values() {
        let encoded = form_body(&[("group_name", "Flat 4 & co".to_string())]).unwrap();
        assert_eq!(encoded, "group_name=Flat+4+%26+co");
    }

    #[test]
    fn test_message_prefers_message_over_msg() {
        let m: ApiMessage =
            serde_json::from_str(r#"{"message": "Verified", "msg": "other"}"#).unwrap();
        assert_eq!(m.text_or("fallback"), "Verified");

        let m: ApiMessage = serde_json::from_str(r#"{"msg": "Joined"}"#).unwrap();
        assert_eq!(m.text_or("fallback"), "Joined");

        let m: ApiMessage = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(m.text_or("fallback"), "fallback");
    }
}
