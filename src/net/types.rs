//! Wire types for the gallery backend's admin endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct AdminLoginRequest<'a> {
    pub password: &'a str,
}

/// Response of `POST /admin/verify`. `token` is present only on success.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminLoginResponse {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub token: Option<String>,
}

/// Counts from `GET /admin/pending-images`; the image list is not decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PendingSummary {
    pub total: u64,
    pub returned: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed: status {status}")]
    Status { status: u16 },
    #[error("response parse failed: {0}")]
    Parse(String),
    #[error("{0}")]
    Rejected(String),
    #[error("not available on server")]
    Unavailable,
    #[error("no admin token stored")]
    MissingToken,
}

impl ApiError {
    /// The backend refused the admin token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403 })
    }
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
