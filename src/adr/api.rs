//! # API Facade
//!
//! A thin layer over the commands: it owns the store and the configured number
//! width, turns user-typed numbers into [`SequenceNumber`]s, supplies today's
//! date, and dispatches. No business logic lives here and nothing is printed.
//!
//! `AdrApi<S: RecordStore>` is generic over the store, so the same calls run
//! against `FileStore` in the binary and `InMemoryStore` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{Record, SequenceNumber};
use crate::scan;
use crate::store::RecordStore;
use chrono::{Local, NaiveDate};

pub struct AdrApi<S: RecordStore> {
    store: S,
    number_width: usize,
}

impl<S: RecordStore> AdrApi<S> {
    pub fn new(store: S, number_width: usize) -> Self {
        Self {
            store,
            number_width,
        }
    }

    pub fn parse_number(&self, input: &str) -> Result<SequenceNumber> {
        SequenceNumber::parse(input, self.number_width)
    }

    /// Create or update a record dated today.
    pub fn record(
        &mut self,
        number: Option<&str>,
        status: &str,
        title: Option<&str>,
    ) -> Result<commands::CmdResult> {
        self.record_on(number, status, title, Local::now().date_naive())
    }

    pub fn record_on(
        &mut self,
        number: Option<&str>,
        status: &str,
        title: Option<&str>,
        today: NaiveDate,
    ) -> Result<commands::CmdResult> {
        let number = number.map(|n| self.parse_number(n)).transpose()?;
        let request = commands::RecordRequest {
            number,
            status: status.to_string(),
            title: title.map(str::to_string),
        };
        commands::record::run(&mut self.store, request, self.number_width, today)
    }

    pub fn list(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find(&self, number: &str) -> Result<Option<Record>> {
        let number = self.parse_number(number)?;
        commands::list::find(&self.store, number)
    }

    pub fn exists(&self, number: &str) -> Result<bool> {
        let number = self.parse_number(number)?;
        Ok(scan::exists(&self.store, number))
    }

    pub fn next_number(&self) -> Result<commands::CmdResult> {
        commands::next::run(&self.store, self.number_width)
    }

    pub fn reindex(&mut self) -> Result<commands::CmdResult> {
        commands::reindex::run(&mut self.store)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::{
    CmdMessage, CmdResult, Cleanup, MessageLevel, RecordKind, RecordOutcome, RecordRequest,
};
