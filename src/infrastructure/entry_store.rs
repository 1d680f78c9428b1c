//! File system storage for journal entries

use crate::domain::Entry;
use crate::error::{DaybookError, Result};
use crate::infrastructure::Config;
use chrono::{Local, NaiveTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File system store mapping entries to {entries_dir}/{YYYY-MM-DD}.txt
#[derive(Debug, Clone)]
pub struct EntryStore {
    dir: PathBuf,
}

impl EntryStore {
    /// Create a store rooted at the given entries directory
    pub fn new(dir: PathBuf) -> Self {
        EntryStore { dir }
    }

    /// Create a store rooted at the configured entries directory
    pub fn from_config(config: &Config) -> Self {
        EntryStore::new(config.journal.entries_dir.clone())
    }

    /// The entries directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the entry file, creating the entries directory if needed
    pub fn path_for(&self, entry: &Entry) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        Ok(self.dir.join(entry.filename()))
    }

    /// Check whether the entry file exists
    pub fn exists(&self, entry: &Entry) -> bool {
        self.dir.join(entry.filename()).exists()
    }

    /// Read entry content with trailing whitespace trimmed
    pub fn read(&self, entry: &Entry) -> Result<String> {
        let path = self.dir.join(entry.filename());

        let content = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaybookError::EntryNotFound(entry.date())
            } else {
                DaybookError::Io(e)
            }
        })?;

        Ok(content.trim_end().to_string())
    }

    /// Write entry content, overwriting any previous content
    pub fn write(&self, entry: &Entry, content: &str) -> Result<PathBuf> {
        let path = self.path_for(entry)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Append a timestamped line, creating the entry file if needed
    pub fn append(&self, entry: &Entry, text: &str) -> Result<PathBuf> {
        let path = self.path_for(entry)?;
        let line = timestamped_line(Local::now().time(), text);

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(line.as_bytes())?;

        Ok(path)
    }
}

fn timestamped_line(time: NaiveTime, text: &str) -> String {
    format!("[{}] {}\n", time.format("%H:%M:%S"), text)
}
