//! REST helpers for the gallery backend.
//!
//! Browser (csr): real HTTP calls via `gloo-net`, every endpoint
//! prefixed with the configured base URL.
//! Native builds: stubs returning `ApiError::Unavailable` since admin
//! calls are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so a failed login or
//! a rejected token degrades the page without breaking the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::config::ApiConfig;
#[cfg(any(test, feature = "csr"))]
use super::types::AdminLoginResponse;
use super::types::{ApiError, PendingSummary};

/// Shape of a request body, which decides the default headers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Empty,
    Json,
    FormData,
}

/// Default headers for a request.
///
/// JSON content type unless the body is multipart form data, whose boundary
/// the browser must set itself. A non-empty `token` adds a bearer header.
pub fn request_headers(body: BodyKind, token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut headers = Vec::with_capacity(2);
    if body != BodyKind::FormData {
        headers.push(("Content-Type", "application/json".to_owned()));
    }
    if let Some(token) = token.filter(|t| !t.is_empty()) {
        headers.push(("Authorization", format!("Bearer {token}")));
    }
    headers
}

/// Absolute URL of a backend-served image path.
pub fn image_url(path: &str) -> String {
    ApiConfig::from_build_env().url(path)
}

#[cfg(any(test, feature = "csr"))]
fn login_token(resp: AdminLoginResponse) -> Result<String, ApiError> {
    match resp.token {
        Some(token) if resp.success && !token.is_empty() => Ok(token),
        _ => Err(ApiError::Rejected(resp.message)),
    }
}

#[cfg(feature = "csr")]
pub enum RequestBody {
    Empty,
    Json(String),
    Form(web_sys::FormData),
}

#[cfg(feature = "csr")]
impl RequestBody {
    fn kind(&self) -> BodyKind {
        match self {
            Self::Empty => BodyKind::Empty,
            Self::Json(_) => BodyKind::Json,
            Self::Form(_) => BodyKind::FormData,
        }
    }
}

/// Send `body` to `endpoint` on the configured backend.
///
/// # Errors
///
/// Returns `ApiError::Transport` if the request cannot be built or sent.
/// Non-2xx statuses are returned as a response for the caller to inspect.
#[cfg(feature = "csr")]
pub async fn api_request(
    method: gloo_net::http::Method,
    endpoint: &str,
    body: RequestBody,
    token: Option<&str>,
) -> Result<gloo_net::http::Response, ApiError> {
    let url = ApiConfig::from_build_env().url(endpoint);
    let mut builder = gloo_net::http::RequestBuilder::new(&url).method(method);
    for (name, value) in request_headers(body.kind(), token) {
        builder = builder.header(name, &value);
    }
    let request = match body {
        RequestBody::Empty => builder.build(),
        RequestBody::Json(raw) => builder.body(raw),
        RequestBody::Form(form) => builder.body(form),
    }
    .map_err(|e| ApiError::Transport(e.to_string()))?;
    let resp = request.send().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    log::debug!("{endpoint} -> {}", resp.status());
    Ok(resp)
}

/// Exchange the admin password for a token via `POST /admin/verify`.
///
/// # Errors
///
/// Returns `ApiError::Rejected` with the backend's message when the password
/// is wrong, or a transport/status/parse error.
pub async fn admin_login(password: &str) -> Result<String, ApiError> {
    #[cfg(feature = "csr")]
    {
        use super::types::AdminLoginRequest;

        let payload =
            serde_json::to_string(&AdminLoginRequest { password }).map_err(|e| ApiError::Parse(e.to_string()))?;
        let resp =
            api_request(gloo_net::http::Method::POST, "/admin/verify", RequestBody::Json(payload), None).await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        let body: AdminLoginResponse = resp.json().await.map_err(|e| ApiError::Parse(e.to_string()))?;
        login_token(body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = password;
        Err(ApiError::Unavailable)
    }
}

/// Fetch review-queue counts from `GET /admin/pending-images`.
///
/// # Errors
///
/// Returns `ApiError::Status` with 401/403 when the backend rejects `token`.
pub async fn fetch_pending_summary(token: &str) -> Result<PendingSummary, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp =
            api_request(gloo_net::http::Method::GET, "/admin/pending-images", RequestBody::Empty, Some(token)).await?;
        if !resp.ok() {
            return Err(ApiError::Status { status: resp.status() });
        }
        resp.json::<PendingSummary>().await.map_err(|e| ApiError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = token;
        Err(ApiError::Unavailable)
    }
}
