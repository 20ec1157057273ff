use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::errors::AppError;
use crate::models::{
    ChatForwardRequest, ErrorResponse, GraphQlForwardRequest, HealthResponse, UpstreamReply,
};
use crate::service::proxy_service::ProxyService;

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST `/api/chat` — forwards `{ "message": [..] }` to the chat upstream
pub async fn chat_proxy_handler(
    State(svc): State<ProxyService>,
    payload: Result<Json<ChatForwardRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error_response(&AppError::InvalidPayload(rejection.body_text())),
    };

    match svc.forward_chat(request).await {
        Ok(reply) => upstream_response(reply),
        Err(err) => error_response(&err),
    }
}

/// POST `/api/leetcode` — forwards a GraphQL document to the stats upstream
pub async fn leetcode_proxy_handler(
    State(svc): State<ProxyService>,
    payload: Result<Json<GraphQlForwardRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => return error_response(&AppError::InvalidPayload(rejection.body_text())),
    };

    match svc.forward_stats_query(request).await {
        Ok(reply) => upstream_response(reply),
        Err(err) => error_response(&err),
    }
}

/// GET `/health`
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse { status: "ok" })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn upstream_response(reply: UpstreamReply) -> Response {
    let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let content_type = reply
        .content_type
        .and_then(|ct| HeaderValue::from_str(&ct).ok())
        .unwrap_or_else(|| HeaderValue::from_static("application/json"));

    let mut resp = (status, reply.body).into_response();
    resp.headers_mut().insert(header::CONTENT_TYPE, content_type);
    resp
}

fn error_response(err: &AppError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else if err.is_timeout() {
        StatusCode::GATEWAY_TIMEOUT
    } else if err.is_upstream_unavailable() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(ErrorResponse { error: err.to_string() })).into_response()
}
