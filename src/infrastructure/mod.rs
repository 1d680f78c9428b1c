//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod editor;
pub mod entry_store;
pub mod mailer;

pub use config::Config;
pub use editor::{default_opener, resolve_editor, ProgramLauncher, SystemLauncher};
pub use entry_store::EntryStore;
pub use mailer::{MailTransport, OutgoingMessage, SmtpMailer, SMTP_PASSWORD_VAR};
