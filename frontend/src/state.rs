use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::GlooTransport;
use crate::config::{ChatConfig, StatsConfig};
use crate::models::Notice;
use crate::session::{ChatSession, send_chat};
use crate::stats::{self, StatsPhase};

/// How long a notice stays up unless dismissed earlier.
const NOTICE_TTL_MS: u32 = 5_000;

/// Page-wide notification channel, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct Notices {
    pub items: ReadSignal<Vec<(u64, Notice)>>,
    set_items: WriteSignal<Vec<(u64, Notice)>>,
    next_id: StoredValue<u64>,
}

impl Notices {
    /// Create the channel and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (items, set_items) = signal(Vec::<(u64, Notice)>::new());
        let notices = Self {
            items,
            set_items,
            next_id: StoredValue::new(0),
        };
        provide_context(notices);
        notices
    }

    /// Show `notice` and schedule its removal.
    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.set_items.update(|items| items.push((id, notice)));

        let notices = *self;
        spawn_local(async move {
            TimeoutFuture::new(NOTICE_TTL_MS).await;
            notices.dismiss(id);
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.set_items
            .try_update(|items| items.retain(|(item_id, _)| *item_id != id));
    }
}

/// Reactive wrapper around a [`ChatSession`]. Owned by the chat window, so
/// the transcript lives exactly as long as the window is mounted.
#[derive(Clone, Copy)]
pub struct ChatState {
    pub session: ReadSignal<ChatSession>,
    set_session: WriteSignal<ChatSession>,
}

impl ChatState {
    pub fn new() -> Self {
        let (session, set_session) = signal(ChatSession::new());
        Self { session, set_session }
    }

    pub fn set_draft(&self, text: String) {
        self.set_session.update(|s| s.set_draft(text));
    }

    pub fn is_sending(&self) -> bool {
        self.session.with(ChatSession::is_sending)
    }

    pub fn can_submit(&self) -> bool {
        self.session.with(ChatSession::can_submit)
    }

    /// Apply the draft now, then resolve the reply in the background.
    pub fn send(&self, config: ChatConfig, notices: Notices) {
        let Some(request) = self.set_session.try_update(|s| s.begin_submit()).flatten() else {
            return;
        };

        let set_session = self.set_session;
        spawn_local(async move {
            let transport = GlooTransport::new(config.timeout_ms);
            let outcome = send_chat(&transport, &config.endpoint, &request).await;
            let notice = set_session
                .try_update(|s| s.complete_submit(outcome))
                .flatten();
            if let Some(notice) = notice {
                notices.push(notice);
            }
        });
    }
}

/// Reactive wrapper around the stats widget's phase.
#[derive(Clone, Copy)]
pub struct StatsState {
    pub phase: ReadSignal<StatsPhase>,
    set_phase: WriteSignal<StatsPhase>,
}

impl StatsState {
    pub fn new() -> Self {
        let (phase, set_phase) = signal(StatsPhase::Loading);
        Self { phase, set_phase }
    }

    /// One query per mount; the phase is terminal once resolved.
    pub fn load(&self, config: StatsConfig) {
        let set_phase = self.set_phase;
        spawn_local(async move {
            let transport = GlooTransport::new(config.timeout_ms);
            let phase = stats::load(&transport, &config).await;
            set_phase.try_set(phase);
        });
    }
}
