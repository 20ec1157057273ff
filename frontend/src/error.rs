use thiserror::Error;

/// Coarse classification of a failed outbound call, used for logging and
/// for deciding how a widget degrades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    MalformedResponse,
    UpstreamReportedError,
    NotFound,
}

/// Every way a request issued by a widget can fail.
/// The display text doubles as the user-facing failure detail.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum FetchError {
    // ── Transport ────────────────────────────────────────────────────────────
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("Server error: {0}")]
    Status(u16),

    // ── Payload ──────────────────────────────────────────────────────────────
    #[error("Parse error: {0}")]
    Malformed(String),

    #[error("{0}")]
    UpstreamReported(String),

    #[error("User not found")]
    NotFound,
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Network(_) | FetchError::Timeout(_) | FetchError::Status(_) => {
                ErrorKind::NetworkFailure
            }
            FetchError::Malformed(_) => ErrorKind::MalformedResponse,
            FetchError::UpstreamReported(_) => ErrorKind::UpstreamReportedError,
            FetchError::NotFound => ErrorKind::NotFound,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Malformed(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_counts_as_network_failure() {
        assert_eq!(FetchError::Timeout(500).kind(), ErrorKind::NetworkFailure);
        assert_eq!(FetchError::Status(503).kind(), ErrorKind::NetworkFailure);
    }

    #[test]
    fn upstream_message_is_displayed_verbatim() {
        let err = FetchError::UpstreamReported("That user does not exist.".into());
        assert_eq!(err.to_string(), "That user does not exist.");
        assert_eq!(err.kind(), ErrorKind::UpstreamReportedError);
    }

    #[test]
    fn json_errors_become_malformed() {
        let err: FetchError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
    }
}
