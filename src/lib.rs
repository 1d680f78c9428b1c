//! daybook - Daily work journal for the command line
//!
//! Tracks elapsed days since a configured start date, keeps dated
//! plain-text entries, and emails them to a recipient list over SMTP.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DaybookError;
