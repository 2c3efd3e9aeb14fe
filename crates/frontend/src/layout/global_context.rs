use contracts::domain::dataset::staging::{AddOutcome, StagedFileSet, REQUIRED_FILENAMES};
use contracts::domain::dataset::transcript::{ChatMessage, StepCard, TranscriptEntry};
use leptos::prelude::*;
use uuid::Uuid;

/// Cosmetic upload state. `Uploading` carries the progress percent;
/// `Processing` covers the rendering pipeline until the next clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    Uploading { percent: u32 },
    Processing,
}

/// Session store shared through context: the staged file set, the chat
/// transcript, and the upload phase. All mutation goes through here.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub staged: RwSignal<StagedFileSet>,
    pub transcript: RwSignal<Vec<TranscriptEntry>>,
    pub phase: RwSignal<UploadPhase>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            staged: RwSignal::new(StagedFileSet::new()),
            transcript: RwSignal::new(Vec::new()),
            phase: RwSignal::new(UploadPhase::Idle),
        }
    }

    pub fn push_welcome(&self) {
        self.push_assistant_text(format!(
            "Welcome to the research analysis demo! Drag the four dataset files ({}) into the upload area to begin.",
            REQUIRED_FILENAMES.join(", ")
        ));
    }

    /// Stages one (folder, filename) pair. Emits the readiness message on
    /// the completeness transition only.
    pub fn stage_file(&self, folder: Option<String>, filename: &str) {
        let was_complete = self.staged.with_untracked(|set| set.is_complete());
        let mut outcome = AddOutcome::Rejected;
        self.staged
            .update(|set| outcome = set.add(folder, filename));
        match outcome {
            AddOutcome::Added | AddOutcome::Replaced => {
                log::info!("staged file {filename} ({outcome:?})");
            }
            AddOutcome::Duplicate | AddOutcome::Rejected => return,
        }
        let now_complete = self.staged.with_untracked(|set| set.is_complete());
        if !was_complete && now_complete {
            log::info!("dataset complete, upload enabled");
            self.push_assistant_text(
                "✅ All required files detected! Click \"Upload files\" to begin processing.",
            );
        }
    }

    pub fn push_user_text(&self, content: impl Into<String>) {
        self.push_entry(TranscriptEntry::Message(ChatMessage::user_text(content)));
    }

    pub fn push_assistant_text(&self, content: impl Into<String>) {
        self.push_entry(TranscriptEntry::Message(ChatMessage::assistant_text(
            content,
        )));
    }

    pub fn push_assistant_markdown(&self, content: impl Into<String>) {
        self.push_entry(TranscriptEntry::Message(ChatMessage::assistant_markdown(
            content,
        )));
    }

    /// Appends a loading step card and returns its id for the later
    /// success/failure update.
    pub fn push_step(&self, label: impl Into<String>) -> Uuid {
        let card = StepCard::loading(label);
        let id = card.id;
        self.push_entry(TranscriptEntry::Step(card));
        id
    }

    pub fn complete_step(&self, id: Uuid, label: impl Into<String>) {
        let label = label.into();
        self.transcript.update(|entries| {
            if let Some(TranscriptEntry::Step(card)) =
                entries.iter_mut().find(|entry| entry.id() == id)
            {
                card.complete(label);
            }
        });
    }

    pub fn fail_step(&self, id: Uuid, label: impl Into<String>) {
        let label = label.into();
        self.transcript.update(|entries| {
            if let Some(TranscriptEntry::Step(card)) =
                entries.iter_mut().find(|entry| entry.id() == id)
            {
                card.fail(label);
            }
        });
    }

    fn push_entry(&self, entry: TranscriptEntry) {
        self.transcript.update(|entries| entries.push(entry));
    }

    /// Drops staged files, transcript, and progress. No welcome message
    /// here.
    pub fn clear(&self) {
        self.staged.update(|set| set.clear());
        self.transcript.set(Vec::new());
        self.phase.set(UploadPhase::Idle);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
