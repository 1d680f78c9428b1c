//! Error types for daybook

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the daybook application
#[derive(Debug, Error)]
pub enum DaybookError {
    #[error("Configuration file not found: {0}")]
    ConfigMissing(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No journal entry found for {0}")]
    EntryNotFound(NaiveDate),

    #[error("Journal entry for {0} is empty")]
    EmptyEntry(NaiveDate),

    #[error("SMTP credential not available: {0} is not set")]
    MissingCredential(String),

    #[error("Failed to send email: {0}")]
    EmailSend(String),

    #[error("Invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DaybookError {
    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaybookError::ConfigMissing(path) => {
                format!(
                    "Configuration file not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'daybook init' to create a starter configuration\n\
                    • Run daybook from the directory holding your daybook.toml\n\
                    • Set DAYBOOK_CONFIG environment variable to your configuration path",
                    path.display()
                )
            }
            DaybookError::MissingCredential(var) => {
                format!(
                    "SMTP credential not available: {} is not set\n\n\
                    Suggestions:\n\
                    • Export the variable: export {}=<password>\n\
                    • For Gmail, create an app password at https://myaccount.google.com/apppasswords",
                    var, var
                )
            }
            DaybookError::InvalidDate(input) => {
                format!(
                    "Invalid date '{}': expected YYYY-MM-DD\n\n\
                    Examples:\n\
                    daybook read --date 2025-01-17\n\
                    daybook send-journal --date 2025-01-15",
                    input
                )
            }
            DaybookError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Pass the editor explicitly: daybook edit --editor nano",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaybookError
pub type Result<T> = std::result::Result<T, DaybookError>;
