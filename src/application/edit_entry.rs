//! Interactive edit use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::{EntryStore, ProgramLauncher};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Result of an interactive editing session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Content was committed to the entry file
    Saved(PathBuf),
    /// The session produced no content; the entry file was not touched
    Discarded,
}

/// Service running the scratch-file editing transaction
pub struct EditEntryService<'a> {
    store: &'a EntryStore,
    launcher: &'a dyn ProgramLauncher,
}

impl<'a> EditEntryService<'a> {
    /// Create a new edit service
    pub fn new(store: &'a EntryStore, launcher: &'a dyn ProgramLauncher) -> Self {
        EditEntryService { store, launcher }
    }

    /// Run the editor on a scratch copy of the entry, committing the
    /// result back only when the session ends with non-empty content.
    ///
    /// The scratch file is removed on every exit path, including
    /// editor launch failure.
    pub fn execute(&self, entry: &Entry, editor: &str, seed_title: &str) -> Result<EditOutcome> {
        // 1. Resolve the target path (creates the entries directory)
        let target = self.store.path_for(entry)?;

        // 2. Seed a scratch file with existing content, or the title block
        let seed = if self.store.exists(entry) {
            self.store.read(entry)?
        } else {
            seed_title.to_string()
        };

        let mut scratch = tempfile::Builder::new()
            .prefix("daybook-")
            .suffix(".txt")
            .tempfile()?;
        scratch.write_all(seed.as_bytes())?;
        scratch.flush()?;

        // 3. Run the editor on the scratch file and wait for it
        self.launcher.launch(editor, scratch.path())?;

        // 4. Read the scratch back by path; editors that replace files
        //    by rename leave the original handle pointing at stale data
        let edited = fs::read_to_string(scratch.path())?;
        let content = edited.trim();

        // 5. Empty content discards the session without touching the entry
        if content.is_empty() {
            return Ok(EditOutcome::Discarded);
        }

        // 6. Commit the trimmed content
        self.store.write(entry, content)?;
        Ok(EditOutcome::Saved(target))
    }
}
