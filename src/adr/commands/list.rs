use crate::commands::{CmdMessage, CmdResult};
use crate::document::RecordText;
use crate::error::Result;
use crate::model::{Record, SequenceNumber};
use crate::scan::{self, extract_display_title, list_record_files, parse_number};
use crate::store::RecordStore;

fn describe(filename: &str, body: &str) -> Record {
    let text = RecordText::parse(body);
    Record {
        number: parse_number(filename).map(|(value, digits)| SequenceNumber::new(value, digits)),
        filename: filename.to_string(),
        title: text
            .title()
            .unwrap_or_else(|| extract_display_title(filename)),
        status: text.status().filter(|s| !s.is_empty()),
        previous_status: text.previous_status().filter(|s| !s.is_empty()),
        date: text.date(),
    }
}

/// Every record in index order, with the fields parsed from its body.
/// Files that cannot be read are skipped with a warning.
pub fn run<S: RecordStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut records = Vec::new();

    for filename in list_record_files(store)? {
        match store.read_record(&filename) {
            Ok(body) => records.push(describe(&filename, &body)),
            Err(e) => result.add_message(CmdMessage::warning(format!("Skipped: {}", e))),
        }
    }

    if records.is_empty() {
        result.add_message(CmdMessage::info("No records found."));
    }
    Ok(result.with_records(records))
}

/// The record stored under `number`, if any.
pub fn find<S: RecordStore>(store: &S, number: SequenceNumber) -> Result<Option<Record>> {
    let Some((filename, _)) = scan::find_by_number(store, number)? else {
        return Ok(None);
    };
    let body = store.read_record(&filename)?;
    Ok(Some(describe(&filename, &body)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    fn store() -> InMemoryStore {
        InMemoryStore::new()
            .with_file(
                "adr-002-drop-redis.md",
                "# ADR 002: Drop Redis\n\n**Status**: Superseded\n**Previous Status**: Accepted\n**Date**: 2024-05-01\n",
            )
            .with_file(
                "adr-001-use-rust.md",
                "# ADR 001: Use Rust\n\n**Status**: Accepted  \n**Date**: 2024-03-20\n",
            )
            .with_file("notes.md", "no structure here")
            .with_file("README.md", "# index")
    }

    #[test]
    fn lists_in_filename_order_with_fields() {
        let result = run(&store()).unwrap();
        let names: Vec<_> = result.records.iter().map(|r| r.filename.as_str()).collect();
        assert_eq!(
            names,
            vec!["adr-001-use-rust.md", "adr-002-drop-redis.md", "notes.md"]
        );

        let first = &result.records[0];
        assert_eq!(first.number, Some(SequenceNumber::new(1, 3)));
        assert_eq!(first.title, "Use Rust");
        assert_eq!(first.status.as_deref(), Some("Accepted"));
        assert_eq!(first.previous_status, None);
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 20));

        let second = &result.records[1];
        assert_eq!(second.status.as_deref(), Some("Superseded"));
        assert_eq!(second.previous_status.as_deref(), Some("Accepted"));
    }

    #[test]
    fn unstructured_file_falls_back_to_filename_title() {
        let result = run(&store()).unwrap();
        let notes = &result.records[2];
        assert_eq!(notes.number, None);
        assert_eq!(notes.title, "notes.md");
        assert_eq!(notes.status, None);
    }

    #[test]
    fn unreadable_files_are_skipped_with_warning() {
        let mut store = store();
        store.faults.unreadable.insert("notes.md".to_string());
        let result = run(&store).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
    }

    #[test]
    fn empty_store_says_so() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.messages[0].content, "No records found.");
    }

    #[test]
    fn finds_by_number() {
        let store = store();
        let found = find(&store, SequenceNumber::new(2, 3)).unwrap().unwrap();
        assert_eq!(found.title, "Drop Redis");
        assert!(find(&store, SequenceNumber::new(9, 3)).unwrap().is_none());
    }
}
