//! # Index Builder
//!
//! `README.md` is a pure function of the record filenames in the store. It is
//! always regenerated whole, so a stale index (left behind by a failed write)
//! heals on the next command that touches the store.

use crate::error::Result;
use crate::scan::{extract_display_title, list_record_files};
use crate::store::RecordStore;
use tracing::info;

pub const INDEX_HEADING: &str = "# Architecture Decision Records";

/// Index content for the given record filenames, listed in sorted order.
pub fn render_index<I, F>(filenames: I) -> String
where
    I: IntoIterator<Item = F>,
    F: AsRef<str>,
{
    let mut names: Vec<F> = filenames.into_iter().collect();
    names.sort_by(|a, b| a.as_ref().cmp(b.as_ref()));

    let mut content = format!("{}\n\n", INDEX_HEADING);
    for name in &names {
        let name = name.as_ref();
        content.push_str(&format!("- [{}]({})\n", extract_display_title(name), name));
    }
    content
}

/// Rebuild the index from the records currently in the store.
///
/// Fails with `StoreUnavailable` when the store cannot be listed and with
/// `IndexWriteFailed` when the index cannot be written. Returns the number of
/// records listed.
pub fn rebuild<S: RecordStore>(store: &mut S) -> Result<usize> {
    let records = list_record_files(store)?;
    store.write_index(&render_index(&records))?;
    info!(records = records.len(), "index rebuilt");
    Ok(records.len())
}
