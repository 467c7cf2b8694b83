use crate::model::{Record, SequenceNumber};

pub mod init;
pub mod list;
pub mod next;
pub mod record;
pub mod reindex;

pub use record::{Cleanup, RecordKind, RecordOutcome, RecordRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub outcome: Option<RecordOutcome>,
    pub records: Vec<Record>,
    pub next_number: Option<SequenceNumber>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_outcome(mut self, outcome: RecordOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_records(mut self, records: Vec<Record>) -> Self {
        self.records = records;
        self
    }

    pub fn with_next_number(mut self, number: SequenceNumber) -> Self {
        self.next_number = Some(number);
        self
    }

    /// True when any message is an error, even though the command returned `Ok`
    /// (a record written but the index left stale, for instance).
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }
}
