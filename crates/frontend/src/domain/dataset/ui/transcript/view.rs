use crate::layout::global_context::SessionContext;
use crate::shared::markdown::render_markdown;
use contracts::domain::dataset::transcript::{
    ChatMessage, MessageBody, Sender, StepCard, StepStatus, TranscriptEntry,
};
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TranscriptView() -> impl IntoView {
    let session =
        use_context::<SessionContext>().expect("SessionContext context not found");
    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest entry in view.
    Effect::new(move |_| {
        session.transcript.track();
        if let Some(container) = container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <div class="transcript" node_ref=container_ref>
            <For
                each=move || session.transcript.get()
                key=|entry| entry.render_key()
                let:entry
            >
                {match entry {
                    TranscriptEntry::Message(message) => {
                        view! { <MessageBubble message=message /> }.into_any()
                    }
                    TranscriptEntry::Step(card) => {
                        view! { <StepBubble card=card /> }.into_any()
                    }
                }}
            </For>
        </div>
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> impl IntoView {
    let is_user = message.sender == Sender::User;
    view! {
        <div class="transcript__row" class=("transcript__row--user", is_user)>
            <div class="bubble" class=("bubble--user", is_user)>
                {match message.body {
                    MessageBody::Text(text) => {
                        view! { <div class="bubble__text">{text}</div> }.into_any()
                    }
                    MessageBody::Markdown(source) => {
                        view! {
                            <div
                                class="bubble__markdown"
                                inner_html=render_markdown(&source)
                            ></div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn StepBubble(card: StepCard) -> impl IntoView {
    let status = card.status;
    let label = match status {
        StepStatus::Loading => format!("{}...", card.label),
        _ => card.label,
    };
    view! {
        <div class="transcript__row">
            <div
                class="bubble bubble--step"
                class=("bubble--success", status == StepStatus::Success)
                class=("bubble--failure", status == StepStatus::Failure)
            >
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    {match status {
                        StepStatus::Loading => view! { <Spinner /> }.into_any(),
                        StepStatus::Success => {
                            view! { <span class="bubble__status">"✓"</span> }.into_any()
                        }
                        StepStatus::Failure => {
                            view! { <span class="bubble__status">"✗"</span> }.into_any()
                        }
                    }}
                    <span>{label}</span>
                </Flex>
            </div>
        </div>
    }
}
