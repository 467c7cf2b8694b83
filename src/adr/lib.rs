//! # ADR Architecture
//!
//! `adr` maintains a directory of Architecture Decision Records: numbered markdown
//! files rendered from a template, whose status line is rewritten in place as the
//! decision evolves, plus a generated `README.md` index. There is no database and
//! no lock file. Every invocation re-derives everything by scanning the directory.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, prints messages, exit codes   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (number strings → SequenceNumber)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Create-or-update lifecycle, listing, reindexing          │
//! │  - Built from slug, template, document, scan, index         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Outcomes come back as [`commands::CmdResult`] values carrying
//! messages and structured data; diagnostics go through `tracing`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: The record lifecycle and the auxiliary commands
//! - [`document`]: Parsing and rewriting of the structured lines inside a record
//! - [`index`]: Generation of the `README.md` listing
//! - [`scan`]: Record membership, numbering and display titles from filenames
//! - [`slug`]: Title to filename fragment
//! - [`template`]: Placeholder substitution and the built-in template
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`SequenceNumber`, `Record`)
//! - [`config`]: Configuration loading
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod scan;
pub mod slug;
pub mod store;
pub mod template;
