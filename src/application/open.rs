//! Pass-through open use cases

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::{EntryStore, ProgramLauncher};
use std::path::PathBuf;

/// Open the entry file with the given command.
///
/// Resolving the path creates the entries directory, but the entry
/// file itself is not required to exist; the launched program decides
/// what to do with a missing file.
pub fn open_entry(
    store: &EntryStore,
    launcher: &dyn ProgramLauncher,
    entry: &Entry,
    command: &str,
) -> Result<PathBuf> {
    let path = store.path_for(entry)?;
    launcher.launch(command, &path)?;
    Ok(path)
}

/// Open the entries directory with the given command.
///
/// The directory path is handed over as-is, without creating it.
pub fn open_dir(
    store: &EntryStore,
    launcher: &dyn ProgramLauncher,
    command: &str,
) -> Result<PathBuf> {
    let dir = store.dir().to_path_buf();
    launcher.launch(command, &dir)?;
    Ok(dir)
}
