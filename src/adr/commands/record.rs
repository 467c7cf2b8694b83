//! # Record Lifecycle
//!
//! One invocation walks a fixed path:
//!
//! ```text
//! Classify ──► CreateNew ──────┐
//!    │                         ├──► Persist ──► ReindexAll ──► Done
//!    └──────► UpdateExisting ──┘
//! ```
//!
//! Any failure before or during Persist aborts with the step's error and
//! nothing further happens. After the record is on disk, two follow-up steps
//! can fail without undoing it:
//!
//! - removing the old file after a rename (reported as a warning), and
//! - rebuilding the index (reported as an error message on an `Ok` result; the
//!   next command rebuilds it again from scratch).

use crate::commands::{CmdMessage, CmdResult};
use crate::document::{RecordText, StatusChange};
use crate::error::{AdrError, Result};
use crate::index;
use crate::model::SequenceNumber;
use crate::scan;
use crate::slug::slugify;
use crate::store::RecordStore;
use crate::template::{render, TemplateValues, DEFAULT_TEMPLATE};
use chrono::NaiveDate;
use std::path::PathBuf;
use tracing::{debug, info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Default)]
pub struct RecordRequest {
    /// `None` allocates the next free number and always creates.
    pub number: Option<SequenceNumber>,
    pub status: String,
    /// Required to create; optional on update, where a different title renames.
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Created,
    Updated,
}

/// What happened to the previous file of a renamed record.
#[derive(Debug)]
pub enum Cleanup {
    NotNeeded,
    Removed { old: String },
    Failed { old: String, error: AdrError },
}

#[derive(Debug)]
pub struct RecordOutcome {
    pub kind: RecordKind,
    pub number: SequenceNumber,
    pub filename: String,
    pub path: PathBuf,
    /// Set on updates only.
    pub status_change: Option<StatusChange>,
    pub renamed_from: Option<String>,
    pub cleanup: Cleanup,
    /// Number of records indexed, or why the index could not be rebuilt.
    pub index: Result<usize>,
}

impl RecordOutcome {
    pub fn renamed(&self) -> bool {
        self.renamed_from.is_some()
    }
}

/// Content and target filename decided by the create or update branch.
struct Plan {
    kind: RecordKind,
    filename: String,
    content: String,
    status_change: Option<StatusChange>,
    renamed_from: Option<String>,
}

pub fn run<S: RecordStore>(
    store: &mut S,
    request: RecordRequest,
    number_width: usize,
    today: NaiveDate,
) -> Result<CmdResult> {
    let status = request.status.trim();
    if status.is_empty() {
        return Err(AdrError::Api("A status is required".to_string()));
    }
    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let (number, existing) = classify(store, request.number, number_width)?;
    let plan = match existing {
        None => plan_create(store, number, status, title, today)?,
        Some(filename) => plan_update(store, filename, number, status, title)?,
    };

    // Persist
    store.write_record(&plan.filename, &plan.content)?;
    info!(file = %plan.filename, kind = ?plan.kind, "record written");

    let cleanup = match &plan.renamed_from {
        None => Cleanup::NotNeeded,
        Some(old) => match store.remove_record(old) {
            Ok(()) => Cleanup::Removed { old: old.clone() },
            Err(error) => {
                warn!(%error, "old record left behind after rename");
                Cleanup::Failed {
                    old: old.clone(),
                    error,
                }
            }
        },
    };

    // ReindexAll
    let index = index::rebuild(store);
    if let Err(error) = &index {
        warn!(%error, "index not rebuilt");
    }

    let outcome = RecordOutcome {
        kind: plan.kind,
        number,
        path: store.path_of(&plan.filename),
        filename: plan.filename,
        status_change: plan.status_change,
        renamed_from: plan.renamed_from,
        cleanup,
        index,
    };

    let mut result = CmdResult::default();
    for message in outcome_messages(&outcome, status) {
        result.add_message(message);
    }
    Ok(result.with_outcome(outcome))
}

fn classify<S: RecordStore>(
    store: &S,
    number: Option<SequenceNumber>,
    number_width: usize,
) -> Result<(SequenceNumber, Option<String>)> {
    let Some(number) = number else {
        let number = scan::next_sequence_number(store, number_width)?;
        debug!(%number, "allocated next number");
        return Ok((number, None));
    };

    if !scan::exists(store, number) {
        debug!(%number, "no record with this number, creating");
        return Ok((number, None));
    }

    match scan::find_by_number(store, number)? {
        Some((filename, on_disk)) => {
            debug!(%number, file = %filename, "record exists, updating");
            Ok((on_disk, Some(filename)))
        }
        None => Ok((number, None)),
    }
}

fn plan_create<S: RecordStore>(
    store: &mut S,
    number: SequenceNumber,
    status: &str,
    title: Option<&str>,
    today: NaiveDate,
) -> Result<Plan> {
    let title = title.ok_or(AdrError::MissingTitle)?;
    store.ensure_ready()?;

    let template = store
        .read_template()
        .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string());
    let number_text = number.to_string();
    let date = today.format(DATE_FORMAT).to_string();
    let content = render(
        &template,
        &TemplateValues {
            number: &number_text,
            status,
            title,
            date: &date,
        },
    );

    Ok(Plan {
        kind: RecordKind::Created,
        filename: number.filename(&slugify(title)),
        content,
        status_change: None,
        renamed_from: None,
    })
}

fn plan_update<S: RecordStore>(
    store: &mut S,
    filename: String,
    number: SequenceNumber,
    status: &str,
    title: Option<&str>,
) -> Result<Plan> {
    let body = store.read_record(&filename)?;
    let mut text = RecordText::parse(&body);
    let status_change = text.merge_status(status);

    let mut target = filename.clone();
    if let Some(new_title) = title {
        if text.title().as_deref() != Some(new_title) {
            text.set_title(new_title);
            target = number.filename(&slugify(new_title));
            debug!(from = %filename, to = %target, "title changed");
        }
    }

    let renamed_from = (target != filename).then_some(filename);
    Ok(Plan {
        kind: RecordKind::Updated,
        filename: target,
        content: text.to_string(),
        status_change: Some(status_change),
        renamed_from,
    })
}

fn outcome_messages(outcome: &RecordOutcome, status: &str) -> Vec<CmdMessage> {
    let mut messages = Vec::new();
    let path = outcome.path.display();

    match (&outcome.kind, &outcome.renamed_from) {
        (RecordKind::Created, _) => {
            messages.push(CmdMessage::success(format!("New ADR created: {}", path)));
        }
        (RecordKind::Updated, Some(old)) => {
            messages.push(CmdMessage::success(format!(
                "ADR updated and renamed: {} -> {}",
                old, path
            )));
        }
        (RecordKind::Updated, None) => {
            messages.push(CmdMessage::success(format!("ADR updated: {}", path)));
        }
    }

    match &outcome.status_change {
        Some(StatusChange::Unchanged) => {
            messages.push(CmdMessage::info(format!("Status already {}", status)));
        }
        Some(StatusChange::Changed {
            previous: Some(previous),
        }) => {
            messages.push(CmdMessage::info(format!(
                "Status changed: {} -> {}",
                previous, status
            )));
        }
        _ => {}
    }

    if let Cleanup::Failed { old, error } = &outcome.cleanup {
        messages.push(CmdMessage::warning(format!(
            "Warning: old file {} could not be removed: {}",
            old, error
        )));
    }

    if let Err(error) = &outcome.index {
        messages.push(CmdMessage::error(format!("Error updating index: {}", error)));
    }

    messages
}
