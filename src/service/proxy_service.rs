use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{ChatForwardRequest, GraphQlForwardRequest, UpstreamReply};
use crate::upstream::UpstreamClient;

const MAX_MESSAGE_LENGTH: usize = 8000;
const MAX_MESSAGES: usize = 20;
const MAX_QUERY_LENGTH: usize = 16_000;

/// Same-origin stand-in for the public relay: validates what the page sends
/// and forwards it to the configured upstream.
#[derive(Clone)]
pub struct ProxyService {
    upstream: UpstreamClient,
    chat_url: String,
    stats_url: String,
}

impl ProxyService {
    pub fn new(upstream: UpstreamClient, chat_url: String, stats_url: String) -> Self {
        Self { upstream, chat_url, stats_url }
    }

    pub async fn forward_chat(&self, request: ChatForwardRequest) -> Result<UpstreamReply, AppError> {
        validate_chat(&request)?;
        info!(parts = request.message.len(), "Forwarding chat message");
        let reply = self.upstream.post_json(&self.chat_url, &request).await?;
        log_status("chat", &reply);
        Ok(reply)
    }

    pub async fn forward_stats_query(
        &self,
        request: GraphQlForwardRequest,
    ) -> Result<UpstreamReply, AppError> {
        validate_query(&request)?;
        info!(variables = ?request.variables.keys().collect::<Vec<_>>(), "Forwarding stats query");
        let reply = self.upstream.post_json(&self.stats_url, &request).await?;
        log_status("stats", &reply);
        Ok(reply)
    }
}

fn log_status(upstream: &str, reply: &UpstreamReply) {
    if !(200..300).contains(&reply.status) {
        warn!(upstream, status = reply.status, "Upstream returned a non-success status");
    }
}

fn validate_chat(request: &ChatForwardRequest) -> Result<(), AppError> {
    if request.message.is_empty() {
        return Err(AppError::empty("message"));
    }
    if request.message.len() > MAX_MESSAGES {
        return Err(AppError::FieldTooLong {
            field_name: "message".to_string(),
            max_length: MAX_MESSAGES,
            actual_length: request.message.len(),
        });
    }
    for part in &request.message {
        if part.trim().is_empty() {
            return Err(AppError::empty("message"));
        }
        if part.len() > MAX_MESSAGE_LENGTH {
            return Err(AppError::FieldTooLong {
                field_name: "message".to_string(),
                max_length: MAX_MESSAGE_LENGTH,
                actual_length: part.len(),
            });
        }
    }
    Ok(())
}

fn validate_query(request: &GraphQlForwardRequest) -> Result<(), AppError> {
    if request.query.trim().is_empty() {
        return Err(AppError::empty("query"));
    }
    if request.query.len() > MAX_QUERY_LENGTH {
        return Err(AppError::FieldTooLong {
            field_name: "query".to_string(),
            max_length: MAX_QUERY_LENGTH,
            actual_length: request.query.len(),
        });
    }
    Ok(())
}
