//! Configuration management

use crate::error::{DaybookError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration file name looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "daybook.toml";

/// Environment variable overriding the configuration file location
pub const CONFIG_PATH_VAR: &str = "DAYBOOK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub company: CompanyConfig,
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub email: EmailConfig,
}

/// Settings tied to the tracked engagement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Date that day numbering counts from (quoted YYYY-MM-DD)
    pub start_date: NaiveDate,
    /// Comma-separated recipient addresses for send-journal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_list: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Directory holding the dated entry files
    pub entries_dir: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        JournalConfig {
            entries_dir: PathBuf::from("journal_entries"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    pub smtp_server: String,
    pub smtp_port: u16,
}

impl Default for EmailConfig {
    fn default() -> Self {
        EmailConfig {
            from_address: None,
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
        }
    }
}

impl Config {
    /// Path the configuration is read from, honoring DAYBOOK_CONFIG
    pub fn default_path() -> PathBuf {
        std::env::var_os(CONFIG_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::ConfigMissing(path.to_path_buf())
            } else {
                DaybookError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            DaybookError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self).map_err(|e| {
            DaybookError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Starter configuration written by `daybook init`
    pub fn starter(start_date: NaiveDate) -> Self {
        Config {
            company: CompanyConfig {
                start_date,
                email_list: None,
            },
            journal: JournalConfig::default(),
            email: EmailConfig::default(),
        }
    }

    /// Date that day numbering counts from
    pub fn start_date(&self) -> NaiveDate {
        self.company.start_date
    }

    /// Recipient addresses parsed from company.email_list
    ///
    /// Splits on commas and drops surrounding whitespace. An unset or
    /// blank list is a configuration error.
    pub fn recipients(&self) -> Result<Vec<String>> {
        let raw = self.company.email_list.as_deref().unwrap_or("");

        let recipients: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(String::from)
            .collect();

        if recipients.is_empty() {
            return Err(DaybookError::Config(
                "company.email_list is not set; add recipient addresses to send email".to_string(),
            ));
        }

        Ok(recipients)
    }
}
