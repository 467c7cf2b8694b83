//! # Record Store Scanner
//!
//! Everything the engine knows about which records exist comes from filenames:
//! a record is any `*.md` file in the store other than the index and the
//! template, and its number is the digit run right after `adr-`. Nothing is
//! cached; every call lists the directory again.

use crate::error::{AdrError, Result};
use crate::model::{SequenceNumber, RECORD_EXT, RECORD_PREFIX};
use crate::store::{RecordStore, INDEX_FILE, TEMPLATE_FILE};
use tracing::{debug, warn};

pub fn is_record_file(name: &str) -> bool {
    name.ends_with(RECORD_EXT) && name != INDEX_FILE && name != TEMPLATE_FILE
}

/// Record filenames, sorted.
pub fn list_record_files<S: RecordStore>(store: &S) -> Result<Vec<String>> {
    let mut records: Vec<String> = store
        .list_files()?
        .into_iter()
        .filter(|name| is_record_file(name))
        .collect();
    records.sort();
    Ok(records)
}

/// Whether a record file holds this number, whatever width it was written at.
/// A store that cannot be listed (including one that does not exist yet) has
/// no records.
pub fn exists<S: RecordStore>(store: &S, number: SequenceNumber) -> bool {
    match list_record_files(store) {
        Ok(names) => names.iter().any(|name| has_number(name, number)),
        Err(e) => {
            debug!(error = %e, "store not listable, treating {} as new", number);
            false
        }
    }
}

/// The record file holding this number, matched on value so `adr-0001-x.md`
/// answers for `1`. The number comes back at the width used on disk.
pub fn find_by_number<S: RecordStore>(
    store: &S,
    number: SequenceNumber,
) -> Result<Option<(String, SequenceNumber)>> {
    let matches: Vec<String> = list_record_files(store)?
        .into_iter()
        .filter(|name| has_number(name, number))
        .collect();

    if matches.len() > 1 {
        warn!(files = ?matches, "several files share number {}", number);
    }
    Ok(matches.into_iter().next().and_then(|name| {
        let (value, digits) = parse_number(&name)?;
        Some((name, SequenceNumber::new(value, digits)))
    }))
}

fn has_number(filename: &str, number: SequenceNumber) -> bool {
    parse_number(filename).is_some_and(|(value, _)| value == number.value)
}

/// The number encoded in a record filename, with the count of digits it was
/// written with. `adr-012-x.md` gives `(12, 3)`.
pub fn parse_number(filename: &str) -> Option<(u32, usize)> {
    let rest = filename
        .strip_suffix(RECORD_EXT)?
        .strip_prefix(RECORD_PREFIX)?;
    let digits = rest.split('-').next()?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let value = digits.parse().ok()?;
    Some((value, digits.len()))
}

/// One past the highest number in use. Gaps are never filled. The result is
/// padded to the wider of `width` and the widest number already on disk.
/// Fails once the highest number can no longer be incremented.
pub fn next_sequence_number<S: RecordStore>(store: &S, width: usize) -> Result<SequenceNumber> {
    let mut highest = 0u32;
    let mut width = width;

    for name in list_record_files(store)? {
        match parse_number(&name) {
            Some((value, digits)) => {
                highest = highest.max(value);
                width = width.max(digits);
            }
            None => debug!(file = %name, "skipping unnumbered record file"),
        }
    }

    let next = highest.checked_add(1).ok_or_else(|| {
        AdrError::InvalidNumber(format!("no number after {}", highest))
    })?;
    Ok(SequenceNumber::new(next, width))
}

/// Human title for the index, derived from the filename alone:
/// `adr-001-database-choice.md` becomes `001 Database Choice`.
pub fn extract_display_title(filename: &str) -> String {
    let name = filename.strip_suffix(RECORD_EXT).unwrap_or(filename);
    let Some((_, rest)) = name.split_once('-') else {
        return filename.to_string();
    };
    title_case(&rest.replace('-', " ")).replace("Adr ", "ADR ")
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        at_word_start = c.is_whitespace();
    }
    out
}
