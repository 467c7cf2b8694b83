use crate::error::{AdrError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const RECORD_PREFIX: &str = "adr-";
pub const RECORD_EXT: &str = ".md";
pub const DEFAULT_NUMBER_WIDTH: usize = 3;

/// Identity of a record. Rendered zero-padded to `width` digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SequenceNumber {
    pub value: u32,
    pub width: usize,
}

impl SequenceNumber {
    pub fn new(value: u32, width: usize) -> Self {
        Self { value, width }
    }

    pub fn first(width: usize) -> Self {
        Self::new(1, width)
    }

    /// Parse user input such as `7`, `07` or `007`.
    pub fn parse(input: &str, width: usize) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(AdrError::InvalidNumber(input.to_string()));
        }
        match trimmed.parse::<u32>() {
            Ok(0) | Err(_) => Err(AdrError::InvalidNumber(input.to_string())),
            Ok(value) => Ok(Self::new(value, width)),
        }
    }

    /// The filename prefix every file of this record starts with: `adr-007-`.
    pub fn file_prefix(&self) -> String {
        format!("{}{}-", RECORD_PREFIX, self)
    }

    pub fn filename(&self, slug: &str) -> String {
        format!("{}{}{}", self.file_prefix(), slug, RECORD_EXT)
    }
}

impl fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$}", self.value, width = self.width)
    }
}

/// A record as read back from the store. Files that do not follow the
/// `adr-NNN-slug.md` naming still show up, without a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub number: Option<SequenceNumber>,
    pub filename: String,
    pub title: String,
    pub status: Option<String>,
    pub previous_status: Option<String>,
    pub date: Option<NaiveDate>,
}
