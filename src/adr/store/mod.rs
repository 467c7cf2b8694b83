//! # Storage Layer
//!
//! The record store is a single flat directory. The [`RecordStore`] trait exposes
//! just the primitive file operations the engine needs, each failing with the
//! error kind of the step it belongs to, so callers never have to guess what an
//! `io::Error` meant.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production directory-backed storage
//! - [`memory::InMemoryStore`]: In-memory storage for testing, with switches to
//!   make individual operations fail
//!
//! ## Storage Format
//!
//! ```text
//! docs/adr/
//! ├── README.md               # Generated index (reserved)
//! ├── template.md             # Optional template override (reserved)
//! ├── adr-001-use-rust.md     # One file per record
//! └── adr-002-drop-redis.md
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

pub const INDEX_FILE: &str = "README.md";
pub const TEMPLATE_FILE: &str = "template.md";

/// Abstract interface for record storage.
pub trait RecordStore {
    /// Names of the plain files in the store, in no particular order.
    /// A store that does not exist yet has no files.
    ///
    /// Fails with `StoreUnavailable`.
    fn list_files(&self) -> Result<Vec<String>>;

    /// Make sure the store exists and can take writes. Fails with `StoreUnavailable`.
    fn ensure_ready(&mut self) -> Result<()>;

    /// Fails with `RecordUnreadable`.
    fn read_record(&self, filename: &str) -> Result<String>;

    /// Fails with `RecordWriteFailed`.
    fn write_record(&mut self, filename: &str, content: &str) -> Result<()>;

    /// Fails with `CleanupFailed`.
    fn remove_record(&mut self, filename: &str) -> Result<()>;

    /// The user template, if the store has one that can be read.
    fn read_template(&self) -> Option<String>;

    /// Fails with `RecordWriteFailed`.
    fn write_template(&mut self, content: &str) -> Result<()>;

    /// Overwrite the index. Fails with `IndexWriteFailed`.
    fn write_index(&mut self, content: &str) -> Result<()>;

    /// Where a file of the store lives, for messages.
    fn path_of(&self, filename: &str) -> PathBuf;
}
