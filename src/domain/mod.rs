//! Domain layer - Business logic and domain models

pub mod entry;

pub use entry::Entry;
