//! Journal entry domain model

use chrono::NaiveDate;

use crate::error::{DaybookError, Result};

/// Format accepted for entry dates on the command line
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A journal entry, identified by its calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    date: NaiveDate,
}

impl Entry {
    /// Create an entry for the given date
    pub fn new(date: NaiveDate) -> Self {
        Entry { date }
    }

    /// Parse an entry date from a YYYY-MM-DD string
    pub fn parse(input: &str) -> Result<Self> {
        NaiveDate::parse_from_str(input, DATE_FORMAT)
            .map(Entry::new)
            .map_err(|_| DaybookError::InvalidDate(input.to_string()))
    }

    /// Resolve an optional date argument, falling back to today
    pub fn resolve(arg: Option<&str>, today: NaiveDate) -> Result<Self> {
        match arg {
            Some(input) => Entry::parse(input),
            None => Ok(Entry::new(today)),
        }
    }

    /// The calendar date of this entry
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// File name for this entry, e.g. "2025-01-17.txt"
    pub fn filename(&self) -> String {
        format!("{}.txt", self.date.format(DATE_FORMAT))
    }

    /// Days elapsed from the start date to this entry's date
    ///
    /// Negative when the entry predates the start date.
    pub fn day_number(&self, start_date: NaiveDate) -> i64 {
        (self.date - start_date).num_days()
    }

    /// Heading block written at the top of a fresh entry
    pub fn title(&self, start_date: NaiveDate) -> String {
        format!(
            "Day {} - {}\n\n",
            self.day_number(start_date),
            self.date.format("%A, %B %d, %Y")
        )
    }

    /// Subject line used when emailing this entry
    pub fn email_subject(&self, start_date: NaiveDate) -> String {
        format!("Day {}", self.day_number(start_date))
    }
}
