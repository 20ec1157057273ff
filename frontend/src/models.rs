use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FetchError;

// ── Chat ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }
}

/// One transcript entry. Immutable once pushed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

/// Body posted to the chat endpoint: `{ "message": ["..."] }`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: Vec<String>,
}

impl ChatRequest {
    pub fn single(text: impl Into<String>) -> Self {
        Self { message: vec![text.into()] }
    }
}

/// Reply fields the chat endpoint may answer with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatReply {
    pub response: Option<String>,
    pub message: Option<String>,
}

impl ChatReply {
    /// Parses a reply body. Invalid JSON and a bare `null` are errors; any
    /// other document without usable fields yields an empty reply.
    pub fn from_body(body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body)?;
        if value.is_null() {
            return Err(FetchError::Malformed("reply body is null".to_string()));
        }
        let field = |name: &str| value.get(name).and_then(reply_text);
        Ok(Self {
            response: field("response"),
            message: field("message"),
        })
    }

    /// `response`, then `message`, then `fallback`.
    pub fn text_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.response
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or(fallback)
    }
}

/// Text shown for a reply field. Empty strings, zero, `false` and `null`
/// count as absent; numbers and `true` are shown as written.
fn reply_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

// ── Notifications ─────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
}

/// A transient, dismissible notice shown above the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Error,
        }
    }
}

// ── LeetCode GraphQL ──────────────────────────────────────────────────────────

/// Body of a GraphQL POST.
#[derive(Clone, Debug, Serialize)]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub variables: V,
}

#[derive(Clone, Debug, Serialize)]
pub struct UsernameVariables<'a> {
    pub username: &'a str,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    #[serde(default)]
    pub matched_user: Option<MatchedUser>,
    #[serde(default)]
    pub all_questions_count: Vec<DifficultyCount>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    pub profile: Profile,
    pub submit_stats: SubmitStats,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub ranking: u64,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<DifficultyCount>,
}

/// Shared shape of `acSubmissionNum` and `allQuestionsCount` entries.
#[derive(Clone, Debug, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    #[serde(default)]
    pub count: Option<u64>,
}

/// Flat display model derived from one profile query.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub username: String,
    pub ranking: u64,
    pub total_solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub total_questions: u64,
    pub easy_questions: u64,
    pub medium_questions: u64,
    pub hard_questions: u64,
    pub acceptance_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_request_serializes_as_single_element_list() {
        let body = serde_json::to_value(ChatRequest::single("hello")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": ["hello"] }));
    }

    #[test]
    fn reply_prefers_response_over_message() {
        let reply = ChatReply::from_body(r#"{"response":"X","message":"Y"}"#).unwrap();
        assert_eq!(reply.text_or("fallback"), "X");
    }

    #[test]
    fn reply_skips_empty_and_falsy_fields() {
        let reply = ChatReply::from_body(r#"{"response":"","message":0}"#).unwrap();
        assert_eq!(reply, ChatReply::default());
        assert_eq!(reply.text_or("fallback"), "fallback");

        let reply = ChatReply::from_body(r#"{"response":null,"message":[]}"#).unwrap();
        assert_eq!(reply.text_or("fallback"), "fallback");
    }

    #[test]
    fn numeric_reply_is_shown_as_written() {
        let reply = ChatReply::from_body(r#"{"response":42}"#).unwrap();
        assert_eq!(reply.text_or("fallback"), "42");

        let reply = ChatReply::from_body(r#"{"response":"","message":1.5}"#).unwrap();
        assert_eq!(reply.text_or("fallback"), "1.5");
    }

    #[test]
    fn null_reply_body_is_an_error() {
        let err = ChatReply::from_body("null").unwrap_err();
        assert!(matches!(err, FetchError::Malformed(_)));
    }

    #[test]
    fn non_object_reply_falls_back() {
        let reply = ChatReply::from_body("\"plain text\"").unwrap();
        assert_eq!(reply.text_or("fallback"), "fallback");
    }

    #[test]
    fn profile_response_without_data_or_errors_parses() {
        let response: GraphQlResponse<ProfileData> = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_none());
        assert!(response.errors.is_none());
    }

    #[test]
    fn null_difficulty_count_is_absent() {
        let entry: DifficultyCount =
            serde_json::from_str(r#"{"difficulty":"Easy","count":null}"#).unwrap();
        assert_eq!(entry.count, None);
    }

    #[test]
    fn reply_rejects_invalid_json() {
        assert!(ChatReply::from_body("<html>").is_err());
    }

    #[test]
    fn sender_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), "\"bot\"");
        assert_eq!(Sender::User.as_str(), "user");
    }
}
