use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Chat widget payload: `{ "message": ["..."] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatForwardRequest {
    pub message: Vec<String>,
}

/// GraphQL POST body forwarded to the stats upstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlForwardRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Map<String, Value>,
    #[serde(
        default,
        rename = "operationName",
        skip_serializing_if = "Option::is_none"
    )]
    pub operation_name: Option<String>,
}

/// What came back from an upstream, relayed to the browser as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
