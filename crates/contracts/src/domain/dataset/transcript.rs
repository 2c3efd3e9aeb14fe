//! Chat transcript model: append-only messages plus per-step status cards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MessageBody {
    Text(String),
    Markdown(String),
}

/// One rendered chat message. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub sender: Sender,
    pub body: MessageBody,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    fn new(sender: Sender, body: MessageBody) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body,
            created_at: Utc::now(),
        }
    }

    pub fn user_text(content: impl Into<String>) -> Self {
        Self::new(Sender::User, MessageBody::Text(content.into()))
    }

    pub fn assistant_text(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, MessageBody::Text(content.into()))
    }

    pub fn assistant_markdown(content: impl Into<String>) -> Self {
        Self::new(Sender::Assistant, MessageBody::Markdown(content.into()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepStatus {
    Loading,
    Success,
    Failure,
}

/// Status card for one pipeline step. The status leaves `Loading` exactly
/// once and is terminal afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepCard {
    pub id: Uuid,
    pub label: String,
    pub status: StepStatus,
}

impl StepCard {
    pub fn loading(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            status: StepStatus::Loading,
        }
    }

    pub fn complete(&mut self, label: impl Into<String>) {
        if self.status == StepStatus::Loading {
            self.label = label.into();
            self.status = StepStatus::Success;
        }
    }

    pub fn fail(&mut self, label: impl Into<String>) {
        if self.status == StepStatus::Loading {
            self.label = label.into();
            self.status = StepStatus::Failure;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TranscriptEntry {
    Message(ChatMessage),
    Step(StepCard),
}

impl TranscriptEntry {
    pub fn id(&self) -> Uuid {
        match self {
            TranscriptEntry::Message(message) => message.id,
            TranscriptEntry::Step(card) => card.id,
        }
    }

    /// Render key: stable for messages, changes when a step card leaves
    /// its loading state.
    pub fn render_key(&self) -> String {
        match self {
            TranscriptEntry::Message(message) => message.id.to_string(),
            TranscriptEntry::Step(card) => format!("{}:{:?}", card.id, card.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_completes_once() {
        let mut card = StepCard::loading("Working");
        card.complete("Done");
        assert_eq!(card.status, StepStatus::Success);
        assert_eq!(card.label, "Done");
    }

    #[test]
    fn terminal_status_is_never_revisited() {
        let mut card = StepCard::loading("Working");
        card.fail("Broken");
        card.complete("Done");
        assert_eq!(card.status, StepStatus::Failure);
        assert_eq!(card.label, "Broken");
    }

    #[test]
    fn render_key_tracks_status_changes() {
        let mut card = StepCard::loading("Working");
        let entry = TranscriptEntry::Step(card.clone());
        let before = entry.render_key();
        card.complete("Done");
        let after = TranscriptEntry::Step(card).render_key();
        assert_ne!(before, after);
    }

    #[test]
    fn message_constructors_set_sender_and_body() {
        let user = ChatMessage::user_text("hi");
        assert_eq!(user.sender, Sender::User);
        assert!(matches!(user.body, MessageBody::Text(ref t) if t == "hi"));

        let assistant = ChatMessage::assistant_markdown("# hi");
        assert_eq!(assistant.sender, Sender::Assistant);
        assert!(matches!(assistant.body, MessageBody::Markdown(_)));
    }
}
