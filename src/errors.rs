use std::time::Duration;

use thiserror::Error;

/// Everything the proxy can fail with. All variants carry a human-readable
/// message that is returned to the caller as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Validation errors ────────────────────────────────────────────────────
    #[error("Field '{field_name}' cannot be empty")]
    EmptyField { field_name: String },

    #[error("Field '{field_name}' exceeds max length of {max_length} (actual: {actual_length})")]
    FieldTooLong { field_name: String, max_length: usize, actual_length: usize },

    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    // ── Upstream errors ──────────────────────────────────────────────────────
    #[error("Upstream service unavailable at {host}")]
    UpstreamUnavailable {
        host: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Upstream service at {host} did not answer within {timeout_secs}s")]
    UpstreamTimeout { host: String, timeout_secs: u64 },

    // ── System errors ────────────────────────────────────────────────────────
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn empty(field_name: impl Into<String>) -> Self {
        AppError::EmptyField { field_name: field_name.into() }
    }

    /// Classifies a failed upstream call by its reqwest error.
    pub fn upstream(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        let host = reqwest::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_else(|| url.to_string());
        if source.is_timeout() {
            AppError::UpstreamTimeout { host, timeout_secs: timeout.as_secs() }
        } else if source.is_builder() {
            AppError::Unexpected(format!("Invalid upstream request for {host}: {source}"))
        } else {
            AppError::UpstreamUnavailable { host, source }
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::EmptyField { .. } | AppError::FieldTooLong { .. } | AppError::InvalidPayload(_)
        )
    }

    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, AppError::UpstreamUnavailable { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AppError::UpstreamTimeout { .. })
    }
}
