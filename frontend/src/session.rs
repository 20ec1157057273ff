use chrono::Utc;

#[cfg(test)]
use crate::config::ChatConfig;
use crate::error::FetchError;
use crate::models::{ChatReply, ChatRequest, Message, Notice, Sender};
use crate::transport::Transport;

pub const GREETING: &str = "Hi! I'm here to help you. What would you like to know?";
pub const FALLBACK_REPLY: &str = "I received your message!";
pub const APOLOGY: &str = "Sorry, I'm having trouble connecting right now. Please try again later.";
pub const SEND_FAILED_TITLE: &str = "Error";
pub const SEND_FAILED_DESCRIPTION: &str = "Failed to send message. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RequestState {
    #[default]
    Idle,
    Sending,
}

/// Transcript, draft and request lifecycle of one chat widget.
///
/// Sending is split in two halves so the view can apply the user's message
/// immediately and resolve the reply later:
/// [`begin_submit`](Self::begin_submit) then
/// [`complete_submit`](Self::complete_submit). Only one request is ever in
/// flight; `begin_submit` refuses while `Sending`.
#[derive(Clone, Debug)]
pub struct ChatSession {
    transcript: Vec<Message>,
    draft: String,
    state: RequestState,
    next_id: u64,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    pub fn new() -> Self {
        let mut session = Self {
            transcript: Vec::new(),
            draft: String::new(),
            state: RequestState::Idle,
            next_id: 1,
        };
        session.push(Sender::Bot, GREETING.to_string());
        session
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[cfg(test)]
    pub fn request_state(&self) -> RequestState {
        self.state
    }

    pub fn is_sending(&self) -> bool {
        self.state == RequestState::Sending
    }

    pub fn can_submit(&self) -> bool {
        !self.is_sending() && !self.draft.trim().is_empty()
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Appends the draft as a user message and returns the body to post.
    /// `None` when the draft is blank or a request is already in flight.
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.push(Sender::User, text.clone());
        self.state = RequestState::Sending;
        Some(ChatRequest::single(text))
    }

    /// Turns the outcome of the in-flight request into a bot message and
    /// returns to `Idle`. Failures yield the notice to surface; they never
    /// escape as errors.
    pub fn complete_submit(&mut self, outcome: Result<ChatReply, FetchError>) -> Option<Notice> {
        if !self.is_sending() {
            log::warn!("Ignoring chat reply with no request in flight");
            return None;
        }
        self.state = RequestState::Idle;
        match outcome {
            Ok(reply) => {
                let text = reply.text_or(FALLBACK_REPLY).to_string();
                self.push(Sender::Bot, text);
                None
            }
            Err(e) => {
                log::error!("Error sending message: {e}");
                self.push(Sender::Bot, APOLOGY.to_string());
                Some(Notice::error(SEND_FAILED_TITLE, SEND_FAILED_DESCRIPTION))
            }
        }
    }

    /// Runs both halves around a single call to `transport`.
    #[cfg(test)]
    pub async fn submit<T: Transport>(
        &mut self,
        transport: &T,
        config: &ChatConfig,
    ) -> Option<Notice> {
        let request = self.begin_submit()?;
        let outcome = send_chat(transport, &config.endpoint, &request).await;
        self.complete_submit(outcome)
    }

    fn push(&mut self, sender: Sender, content: String) {
        let id = format!("msg-{}", self.next_id);
        self.next_id += 1;
        self.transcript.push(Message {
            id,
            content,
            sender,
            timestamp: Utc::now(),
        });
    }
}

/// Posts one chat request and parses the reply.
pub async fn send_chat<T: Transport>(
    transport: &T,
    endpoint: &str,
    request: &ChatRequest,
) -> Result<ChatReply, FetchError> {
    let body = serde_json::to_value(request)?;
    let body = transport
        .post_json(endpoint, &body)
        .await?
        .into_success_body()?;
    ChatReply::from_body(&body)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use serde_json::json;

    use super::*;
    use crate::models::Severity;
    use crate::transport::testing::ScriptedTransport;

    fn config() -> ChatConfig {
        ChatConfig {
            endpoint: "https://chat.test/message".to_string(),
            timeout_ms: 1_000,
        }
    }

    fn last(session: &ChatSession) -> &Message {
        session.transcript().last().unwrap()
    }

    #[test]
    fn starts_with_bot_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(last(&session).sender, Sender::Bot);
        assert_eq!(last(&session).content, GREETING);
        assert_eq!(session.request_state(), RequestState::Idle);
    }

    #[test]
    fn begin_appends_user_message_before_any_reply() {
        let mut session = ChatSession::new();
        session.set_draft("  What do you build?  ");

        let request = session.begin_submit().unwrap();

        assert_eq!(request, ChatRequest::single("  What do you build?  "));
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(last(&session).sender, Sender::User);
        assert_eq!(last(&session).content, "  What do you build?  ");
        assert_eq!(session.draft(), "");
        assert!(session.is_sending());
    }

    #[test]
    fn blank_draft_is_a_no_op() {
        let mut session = ChatSession::new();
        session.set_draft(" \t\n");
        assert!(session.begin_submit().is_none());
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.draft(), " \t\n");
        assert_eq!(session.request_state(), RequestState::Idle);
    }

    #[test]
    fn begin_is_rejected_while_sending() {
        let mut session = ChatSession::new();
        session.set_draft("first");
        session.begin_submit().unwrap();

        session.set_draft("second");
        assert!(session.begin_submit().is_none());
        assert!(session.begin_submit().is_none());
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.draft(), "second");
    }

    #[test]
    fn stray_completion_is_ignored() {
        let mut session = ChatSession::new();
        let notice = session.complete_submit(Err(FetchError::Status(500)));
        assert!(notice.is_none());
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn message_ids_are_unique_within_a_session() {
        let mut session = ChatSession::new();
        for i in 0..5 {
            session.set_draft(format!("question {i}"));
            session.begin_submit().unwrap();
            session.complete_submit(Err(FetchError::Network("down".into())));
        }
        let ids: HashSet<_> = session.transcript().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), session.transcript().len());
    }

    #[tokio::test]
    async fn submit_posts_draft_as_single_element_list() {
        let transport = ScriptedTransport::new().reply(200, r#"{"response":"Hello there"}"#);
        let mut session = ChatSession::new();
        session.set_draft("hi");

        let notice = session.submit(&transport, &config()).await;

        assert!(notice.is_none());
        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].0, "https://chat.test/message");
        assert_eq!(requests[0].1, json!({ "message": ["hi"] }));
    }

    #[tokio::test]
    async fn reply_text_comes_from_response_then_message_then_fallback() {
        let cases = [
            (r#"{"response":"X"}"#, "X"),
            (r#"{"message":"Y"}"#, "Y"),
            (r#"{"response":42}"#, "42"),
            (r#"{}"#, FALLBACK_REPLY),
        ];
        for (body, expected) in cases {
            let transport = ScriptedTransport::new().reply(200, body);
            let mut session = ChatSession::new();
            session.set_draft("ping");
            session.submit(&transport, &config()).await;

            assert_eq!(session.transcript().len(), 3);
            assert_eq!(last(&session).sender, Sender::Bot);
            assert_eq!(last(&session).content, expected);
            assert_eq!(session.request_state(), RequestState::Idle);
        }
    }

    #[tokio::test]
    async fn failures_append_one_apology_and_return_to_idle() {
        let failures = [
            ScriptedTransport::new().fail(FetchError::Network("connection refused".into())),
            ScriptedTransport::new().fail(FetchError::Timeout(1_000)),
            ScriptedTransport::new().reply(502, "bad gateway"),
            ScriptedTransport::new().reply(200, "not json at all"),
            ScriptedTransport::new().reply(200, "null"),
        ];
        for transport in failures {
            let mut session = ChatSession::new();
            session.set_draft("hello?");

            let notice = session.submit(&transport, &config()).await.unwrap();

            assert_eq!(notice.severity, Severity::Error);
            assert_eq!(notice.title, SEND_FAILED_TITLE);
            assert_eq!(notice.description, SEND_FAILED_DESCRIPTION);
            let bots: Vec<_> = session.transcript()[2..].iter().collect();
            assert_eq!(bots.len(), 1);
            assert_eq!(bots[0].content, APOLOGY);
            assert_eq!(session.request_state(), RequestState::Idle);
        }
    }

    #[tokio::test]
    async fn no_request_is_issued_while_sending() {
        let transport = ScriptedTransport::new().reply(200, r#"{"response":"ok"}"#);
        let mut session = ChatSession::new();
        session.set_draft("one");
        let pending = session.begin_submit().unwrap();

        session.set_draft("two");
        assert!(session.submit(&transport, &config()).await.is_none());
        assert_eq!(transport.request_count(), 0);
        assert_eq!(session.transcript().len(), 2);

        let outcome = send_chat(&transport, &config().endpoint, &pending).await;
        session.complete_submit(outcome);
        assert_eq!(transport.request_count(), 1);
        assert_eq!(last(&session).content, "ok");
        assert!(session.can_submit());
    }

    #[tokio::test]
    async fn transcript_keeps_submission_order() {
        let transport = ScriptedTransport::new()
            .reply(200, r#"{"response":"a1"}"#)
            .reply(200, r#"{"message":"a2"}"#);
        let mut session = ChatSession::new();
        for q in ["q1", "q2"] {
            session.set_draft(q);
            session.submit(&transport, &config()).await;
        }
        let contents: Vec<_> = session
            .transcript()
            .iter()
            .map(|m| (m.sender, m.content.as_str()))
            .collect();
        assert_eq!(
            contents,
            vec![
                (Sender::Bot, GREETING),
                (Sender::User, "q1"),
                (Sender::Bot, "a1"),
                (Sender::User, "q2"),
                (Sender::Bot, "a2"),
            ]
        );
    }
}
