//! Send entry by email use case

use crate::domain::Entry;
use crate::error::{DaybookError, Result};
use crate::infrastructure::{Config, EntryStore, MailTransport, OutgoingMessage};

/// Service emailing an entry to the configured recipients
pub struct SendEntryService<'a> {
    store: &'a EntryStore,
    transport: &'a dyn MailTransport,
}

impl<'a> SendEntryService<'a> {
    /// Create a new send service
    pub fn new(store: &'a EntryStore, transport: &'a dyn MailTransport) -> Self {
        SendEntryService { store, transport }
    }

    /// Email the entry content, returning the recipient list on success.
    ///
    /// The entry and recipient list are checked before the transport is
    /// touched; a missing or blank entry never reaches it.
    pub fn execute(&self, config: &Config, entry: &Entry) -> Result<Vec<String>> {
        // 1. Read the entry content
        let body = self.store.read(entry)?;

        // 2. Refuse blank entries
        if body.trim().is_empty() {
            return Err(DaybookError::EmptyEntry(entry.date()));
        }

        // 3. Resolve recipients and subject
        let to = config.recipients()?;
        let subject = entry.email_subject(config.start_date());

        // 4. Hand the message to the transport
        println!("Sending email to {}...", to.join(", "));
        self.transport.send(&OutgoingMessage {
            to: to.clone(),
            subject,
            body,
        })?;

        Ok(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::cell::RefCell;
    use tempfile::TempDir;

    struct FakeTransport {
        sent: RefCell<Vec<OutgoingMessage>>,
        fail: bool,
    }

    impl FakeTransport {
        fn new() -> Self {
            FakeTransport {
                sent: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            FakeTransport {
                sent: RefCell::new(Vec::new()),
                fail: true,
            }
        }
    }

    impl MailTransport for FakeTransport {
        fn send(&self, message: &OutgoingMessage) -> Result<()> {
            if self.fail {
                return Err(DaybookError::EmailSend("connection refused".to_string()));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    fn config_with_recipients(email_list: Option<&str>) -> Config {
        let mut config = Config::starter(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        config.company.email_list = email_list.map(String::from);
        config
    }

    fn entry() -> Entry {
        Entry::parse("2024-01-10").unwrap()
    }

    fn store_in(temp: &TempDir) -> EntryStore {
        EntryStore::new(temp.path().join("journal_entries"))
    }

    #[test]
    fn test_sends_entry_to_configured_recipients() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write(&entry(), "wrapped up the quarterly report").unwrap();

        let transport = FakeTransport::new();
        let config = config_with_recipients(Some("boss@example.com"));

        let service = SendEntryService::new(&store, &transport);
        let to = service.execute(&config, &entry()).unwrap();

        assert_eq!(to, vec!["boss@example.com"]);

        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "Day 9");
        assert_eq!(sent[0].body, "wrapped up the quarterly report");
        assert_eq!(sent[0].to, vec!["boss@example.com"]);
    }

    #[test]
    fn test_sends_to_every_address_in_comma_list() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write(&entry(), "notes").unwrap();

        let transport = FakeTransport::new();
        let config = config_with_recipients(Some("boss@example.com, hr@example.com"));

        let service = SendEntryService::new(&store, &transport);
        let to = service.execute(&config, &entry()).unwrap();

        assert_eq!(to, vec!["boss@example.com", "hr@example.com"]);
        assert_eq!(transport.sent.borrow()[0].to, to);
    }

    #[test]
    fn test_missing_entry_sends_nothing() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let transport = FakeTransport::new();
        let config = config_with_recipients(Some("boss@example.com"));

        let service = SendEntryService::new(&store, &transport);
        let result = service.execute(&config, &entry());

        assert!(matches!(result, Err(DaybookError::EntryNotFound(_))));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_blank_entry_sends_nothing() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write(&entry(), "  \n\n\t\n").unwrap();

        let transport = FakeTransport::new();
        let config = config_with_recipients(Some("boss@example.com"));

        let service = SendEntryService::new(&store, &transport);
        let result = service.execute(&config, &entry());

        match result.unwrap_err() {
            DaybookError::EmptyEntry(date) => assert_eq!(date, entry().date()),
            other => panic!("Expected EmptyEntry error, got {:?}", other),
        }
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_missing_recipient_list_sends_nothing() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write(&entry(), "notes").unwrap();

        let transport = FakeTransport::new();
        let config = config_with_recipients(None);

        let service = SendEntryService::new(&store, &transport);
        let result = service.execute(&config, &entry());

        assert!(matches!(result, Err(DaybookError::Config(_))));
        assert!(transport.sent.borrow().is_empty());
    }

    #[test]
    fn test_transport_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.write(&entry(), "notes").unwrap();

        let transport = FakeTransport::failing();
        let config = config_with_recipients(Some("boss@example.com"));

        let service = SendEntryService::new(&store, &transport);
        let result = service.execute(&config, &entry());

        assert!(matches!(result, Err(DaybookError::EmailSend(_))));
    }
}
