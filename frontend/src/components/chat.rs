use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::models::{Message, Sender};
use crate::state::{ChatState, Notices};

/// Floating button that opens and closes the chat window.
#[component]
pub fn ChatButton() -> impl IntoView {
    let (open, set_open) = signal(false);
    let close = Callback::new(move |_: ()| set_open.set(false));

    view! {
        <div class="chat-launcher">
            <button
                class="chat-toggle"
                aria-label=move || if open.get() { "Close chat" } else { "Open chat" }
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                {move || if open.get() { "✕" } else { "💬" }}
            </button>
        </div>
        <Show when=move || open.get()>
            <div class="chat-popup">
                <ChatWindow on_close=close />
            </div>
        </Show>
    }
}

/// Live chat window: transcript, typing indicator and input.
#[component]
pub fn ChatWindow(on_close: Callback<()>) -> impl IntoView {
    let chat = ChatState::new();
    let list_ref = NodeRef::<html::Div>::new();

    // Keep the newest entry in view after every change.
    Effect::new(move |_| {
        chat.session.with(|s| (s.transcript().len(), s.is_sending()));
        if let Some(el) = list_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    view! {
        <div class="chat-window">
            <div class="chat-header">
                <div class="chat-title">
                    <span class="avatar bot">"🤖"</span>
                    <div>
                        <h3>"Live Chat"</h3>
                        <p class="subtle">"Online now"</p>
                    </div>
                </div>
                <button class="ghost" aria-label="Minimize chat" on:click=move |_| on_close.run(())>
                    "—"
                </button>
            </div>

            <div class="messages-container" node_ref=list_ref>
                <For
                    each=move || chat.session.with(|s| s.transcript().to_vec())
                    key=|m| m.id.clone()
                    let:msg
                >
                    <MessageBubble message=msg />
                </For>
                <Show when=move || chat.is_sending()>
                    <div class="message bot">
                        <span class="avatar bot">"🤖"</span>
                        <div class="bubble typing">
                            <span class="dot" />
                            <span class="dot" />
                            <span class="dot" />
                        </div>
                    </div>
                </Show>
            </div>

            <ChatInput chat=chat />
        </div>
    }
}

#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let css_class = format!("message {}", message.sender.as_str());
    let time = message.timestamp.format("%H:%M").to_string();
    let is_user = message.sender == Sender::User;

    view! {
        <div class=css_class>
            {(!is_user).then(|| view! { <span class="avatar bot">"🤖"</span> })}
            <div class="bubble" title=time>{message.content}</div>
            {is_user.then(|| view! { <span class="avatar user">"👤"</span> })}
        </div>
    }
}

/// Text input bound to the session draft; Enter sends, Shift+Enter does not.
#[component]
fn ChatInput(chat: ChatState) -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let notices = expect_context::<Notices>();

    let send = move || chat.send(config.chat.clone(), notices);
    let send_on_enter = send.clone();

    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_on_enter();
        }
    };

    view! {
        <div class="input-area">
            <div class="input-row">
                <input
                    type="text"
                    placeholder="Type your message..."
                    prop:value=move || chat.session.with(|s| s.draft().to_string())
                    on:input=move |ev| chat.set_draft(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || chat.is_sending()
                />
                <button
                    class="send-btn"
                    aria-label="Send message"
                    on:click=move |_| send()
                    disabled=move || !chat.can_submit()
                >
                    "Send"
                </button>
            </div>
        </div>
    }
}
