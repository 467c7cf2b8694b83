//! # Record Text
//!
//! A record is free-form markdown with a handful of lines the tool owns:
//!
//! ```text
//! # ADR 001: Use Postgres          <- heading (first line starting with "# ")
//!
//! **Status**: Superseded           <- current status
//! **Previous Status**: Accepted    <- only after the status changed once
//! **Date**: 2024-03-20
//! ```
//!
//! [`RecordText`] finds those lines by prefix and rewrites them, leaving every
//! other line byte-for-byte where it was. Parsing never fails: a body without a
//! heading or a status line is still a valid record, the missing fields are
//! simply absent.

use chrono::NaiveDate;
use std::fmt;

pub const HEADING_MARKER: &str = "# ";
pub const STATUS_MARKER: &str = "**Status**:";
pub const PREVIOUS_STATUS_MARKER: &str = "**Previous Status**:";
pub const DATE_MARKER: &str = "**Date**:";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Outcome of [`RecordText::merge_status`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusChange {
    /// The requested status was already current; nothing was touched.
    Unchanged,
    Changed { previous: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordText {
    lines: Vec<String>,
}

impl RecordText {
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    fn field(&self, marker: &str) -> Option<String> {
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(marker))
            .map(|value| value.trim().to_string())
    }

    fn heading_index(&self) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| line.starts_with(HEADING_MARKER))
    }

    pub fn status(&self) -> Option<String> {
        self.field(STATUS_MARKER)
    }

    pub fn previous_status(&self) -> Option<String> {
        self.field(PREVIOUS_STATUS_MARKER)
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.field(DATE_MARKER)
            .and_then(|value| NaiveDate::parse_from_str(&value, DATE_FORMAT).ok())
    }

    /// Title as written in the heading: the text after the first `": "`, or the
    /// whole heading text when there is no such separator.
    pub fn title(&self) -> Option<String> {
        let heading = &self.lines[self.heading_index()?];
        let text = heading[HEADING_MARKER.len()..].trim();
        let title = match text.split_once(": ") {
            Some((_, title)) => title.trim(),
            None => text,
        };
        Some(title.to_string())
    }

    /// Rewrite the title part of the heading, keeping any `ADR 001: ` lead-in
    /// and the line's trailing whitespace.
    /// Returns false when the body has no heading line.
    pub fn set_title(&mut self, title: &str) -> bool {
        let Some(idx) = self.heading_index() else {
            return false;
        };
        let line = &self.lines[idx];
        let line_end = &line[line.trim_end().len()..];
        let text = &line[HEADING_MARKER.len()..];
        let lead = match text.split_once(": ") {
            Some((lead, _)) => format!("{}: ", lead),
            None => String::new(),
        };
        let heading = format!("{}{}{}{}", HEADING_MARKER, lead, title, line_end);
        self.lines[idx] = heading;
        true
    }

    /// Make `new_status` the current status, moving the old value into the
    /// previous-status line.
    ///
    /// All existing status and previous-status lines are dropped and exactly one
    /// of each is written back where the first status line was (after the
    /// heading, or at the top, when there was none). Requesting the current
    /// status again changes nothing at all.
    pub fn merge_status(&mut self, new_status: &str) -> StatusChange {
        let current = self.status().unwrap_or_default();
        if current == new_status {
            return StatusChange::Unchanged;
        }

        let mut kept = Vec::with_capacity(self.lines.len() + 1);
        let mut insert_at = None;
        let mut line_end = String::new();

        for line in self.lines.drain(..) {
            if line.starts_with(STATUS_MARKER) {
                if insert_at.is_none() {
                    insert_at = Some(kept.len());
                    line_end = line[line.trim_end().len()..].to_string();
                }
                continue;
            }
            if line.starts_with(PREVIOUS_STATUS_MARKER) {
                continue;
            }
            kept.push(line);
        }

        let insert_at = insert_at.unwrap_or_else(|| {
            kept.iter()
                .position(|line| line.starts_with(HEADING_MARKER))
                .map_or(0, |heading| heading + 1)
        });

        let mut inserted = vec![format!("{} {}{}", STATUS_MARKER, new_status, line_end)];
        let previous = (!current.is_empty()).then_some(current);
        if let Some(previous) = &previous {
            inserted.push(format!(
                "{} {}{}",
                PREVIOUS_STATUS_MARKER, previous, line_end
            ));
        }
        let tail = kept.split_off(insert_at);
        kept.extend(inserted);
        kept.extend(tail);
        self.lines = kept;

        StatusChange::Changed { previous }
    }
}

impl fmt::Display for RecordText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Convenience over [`RecordText::merge_status`] for whole bodies.
pub fn merge_status(body: &str, new_status: &str) -> String {
    let mut text = RecordText::parse(body);
    text.merge_status(new_status);
    text.to_string()
}
