//! Application layer - Use cases and orchestration

pub mod edit_entry;
pub mod init;
pub mod open;
pub mod send_entry;

pub use edit_entry::{EditEntryService, EditOutcome};
pub use open::{open_dir, open_entry};
pub use send_entry::SendEntryService;
