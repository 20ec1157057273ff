use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use tracing::{debug, error};

use crate::errors::AppError;
use crate::models::UpstreamReply;

/// Shared HTTP client for forwarding JSON POSTs to the chat and stats
/// upstreams. Cloning shares the connection pool.
#[derive(Clone)]
pub struct UpstreamClient {
    client: reqwest::Client,
    timeout: Duration,
}

impl UpstreamClient {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, timeout })
    }

    /// POSTs `body` as JSON to `url` and returns the upstream status, content
    /// type and raw body. Non-2xx statuses are not errors here; only transport
    /// failures are.
    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<UpstreamReply, AppError> {
        debug!(url = %url, "Forwarding request upstream");

        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                error!("Upstream request to {url} failed: {e}");
                AppError::upstream(url, self.timeout, e)
            })?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await.map_err(|e| {
            error!("Failed to read upstream body from {url}: {e}");
            AppError::upstream(url, self.timeout, e)
        })?;

        debug!(url = %url, status, bytes = body.len(), "Upstream answered");
        Ok(UpstreamReply { status, content_type, body: body.to_vec() })
    }
}

#[cfg(test)]
mod tests {
    use mockito::{Matcher, Server};
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn relays_status_and_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({ "query": "{ ping }" })))
            .with_status(429)
            .with_header("content-type", "application/json")
            .with_body(r#"{"errors":[{"message":"slow down"}]}"#)
            .create_async()
            .await;

        let client = UpstreamClient::new(Duration::from_secs(5)).unwrap();
        let reply = client
            .post_json(&format!("{}/graphql", server.url()), &json!({ "query": "{ ping }" }))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(reply.status, 429);
        assert_eq!(reply.content_type.as_deref(), Some("application/json"));
        assert_eq!(reply.body, br#"{"errors":[{"message":"slow down"}]}"#.to_vec());
    }

    #[tokio::test]
    async fn unreachable_upstream_is_unavailable() {
        let client = UpstreamClient::new(Duration::from_secs(5)).unwrap();
        let err = client
            .post_json("http://127.0.0.1:9/message", &json!({ "message": ["hi"] }))
            .await
            .unwrap_err();
        assert!(err.is_upstream_unavailable(), "{err:?}");
        assert_eq!(err.to_string(), "Upstream service unavailable at 127.0.0.1");
    }
}
