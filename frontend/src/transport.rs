use std::future::Future;
use std::pin::pin;

use futures_util::future::{Either, select};
use serde_json::Value;

use crate::error::FetchError;

/// Status and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body of a 2xx response, or `FetchError::Status` otherwise.
    pub fn into_success_body(self) -> Result<String, FetchError> {
        if self.is_success() {
            Ok(self.body)
        } else {
            Err(FetchError::Status(self.status))
        }
    }
}

/// The outbound request function injected into the chat session and the stats
/// aggregator. The browser build uses [`crate::api::GlooTransport`]; tests
/// script their own.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// POSTs `body` as `application/json` to `url`.
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, FetchError>;
}

/// Races `request` against `sleep`; if the sleep wins the request is dropped
/// and `FetchError::Timeout` is returned.
pub async fn with_timeout<T, F, S>(request: F, sleep: S, timeout_ms: u32) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
    S: Future<Output = ()>,
{
    let request = pin!(request);
    let sleep = pin!(sleep);
    match select(request, sleep).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(FetchError::Timeout(timeout_ms)),
    }
}
