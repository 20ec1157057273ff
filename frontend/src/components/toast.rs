use leptos::prelude::*;

use crate::models::Severity;
use crate::state::Notices;

/// Stack of active notices, newest last.
#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<Notices>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notices.items.get()
                key=|(id, _)| *id
                let:item
            >
                {
                    let (id, notice) = item;
                    let class = match notice.severity {
                        Severity::Error => "toast destructive",
                    };
                    view! {
                        <div class=class>
                            <div>
                                <div class="toast-title">{notice.title}</div>
                                <div class="toast-description">{notice.description}</div>
                            </div>
                            <button
                                class="ghost"
                                aria-label="Dismiss"
                                on:click=move |_| notices.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
