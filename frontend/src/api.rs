use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

use crate::error::FetchError;
use crate::transport::{HttpResponse, Transport, with_timeout};

/// Browser transport backed by `fetch`, with a per-request deadline.
#[derive(Clone, Copy, Debug)]
pub struct GlooTransport {
    timeout_ms: u32,
}

impl GlooTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

impl Transport for GlooTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, FetchError> {
        let request = async {
            let resp = Request::post(url)
                .json(body)
                .map_err(|e| FetchError::Malformed(format!("Serialize error: {e}")))?
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            Ok(HttpResponse { status, body })
        };

        with_timeout(request, TimeoutFuture::new(self.timeout_ms), self.timeout_ms).await
    }
}
