//! SMTP delivery for journal entries

use crate::error::{DaybookError, Result};
use crate::infrastructure::Config;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

/// Environment variable holding the SMTP password
pub const SMTP_PASSWORD_VAR: &str = "DAYBOOK_SMTP_PASSWORD";

/// An outgoing email, fully assembled by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

/// Abstract mail delivery
pub trait MailTransport {
    fn send(&self, message: &OutgoingMessage) -> Result<()>;
}

/// SMTP mailer using STARTTLS, authenticating as the sender address
/// with a password taken from the environment
pub struct SmtpMailer {
    from_address: Option<String>,
    server: String,
    port: u16,
}

impl SmtpMailer {
    /// Create a mailer from the [email] configuration section
    ///
    /// The sender address and credential are validated at send time,
    /// after the entry itself has been checked.
    pub fn from_config(config: &Config) -> Self {
        SmtpMailer {
            from_address: config.email.from_address.clone(),
            server: config.email.smtp_server.clone(),
            port: config.email.smtp_port,
        }
    }

    fn sender(&self) -> Result<&str> {
        self.from_address.as_deref().ok_or_else(|| {
            DaybookError::Config(
                "email.from_address is not set; add it to the [email] section".to_string(),
            )
        })
    }

    fn credential(&self) -> Result<String> {
        std::env::var(SMTP_PASSWORD_VAR)
            .map_err(|_| DaybookError::MissingCredential(SMTP_PASSWORD_VAR.to_string()))
    }
}

impl MailTransport for SmtpMailer {
    fn send(&self, message: &OutgoingMessage) -> Result<()> {
        let sender = self.sender()?;
        let password = self.credential()?;

        let from: Mailbox = sender.parse().map_err(|e| {
            DaybookError::Config(format!("Invalid email.from_address '{}': {}", sender, e))
        })?;

        let mut builder = Message::builder()
            .from(from)
            .subject(message.subject.clone());

        for recipient in &message.to {
            let mailbox: Mailbox = recipient.parse().map_err(|e| {
                DaybookError::EmailSend(format!(
                    "Invalid recipient address '{}': {}",
                    recipient, e
                ))
            })?;
            builder = builder.to(mailbox);
        }

        let email = builder
            .body(message.body.clone())
            .map_err(|e| DaybookError::EmailSend(e.to_string()))?;

        let transport = SmtpTransport::starttls_relay(&self.server)
            .map_err(|e| DaybookError::EmailSend(e.to_string()))?
            .port(self.port)
            .credentials(Credentials::new(sender.to_string(), password))
            .build();

        transport
            .send(&email)
            .map_err(|e| DaybookError::EmailSend(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn message() -> OutgoingMessage {
        OutgoingMessage {
            to: vec!["boss@example.com".to_string()],
            subject: "Day 9".to_string(),
            body: "wrapped up the quarterly report".to_string(),
        }
    }

    fn mailer_with_from(from: Option<&str>) -> SmtpMailer {
        let mut config = Config::starter(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        config.email.from_address = from.map(String::from);
        SmtpMailer::from_config(&config)
    }

    #[test]
    fn test_send_without_from_address_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(SMTP_PASSWORD_VAR);
        std::env::set_var(SMTP_PASSWORD_VAR, "secret");

        let mailer = mailer_with_from(None);

        match mailer.send(&message()).unwrap_err() {
            DaybookError::Config(msg) => assert!(msg.contains("email.from_address")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_send_without_credential_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(SMTP_PASSWORD_VAR);
        std::env::remove_var(SMTP_PASSWORD_VAR);

        let mailer = mailer_with_from(Some("me@example.com"));

        match mailer.send(&message()).unwrap_err() {
            DaybookError::MissingCredential(var) => assert_eq!(var, SMTP_PASSWORD_VAR),
            other => panic!("Expected MissingCredential error, got {:?}", other),
        }
    }

    #[test]
    fn test_send_with_invalid_from_address_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(SMTP_PASSWORD_VAR);
        std::env::set_var(SMTP_PASSWORD_VAR, "secret");

        let mailer = mailer_with_from(Some("not-an-address"));

        match mailer.send(&message()).unwrap_err() {
            DaybookError::Config(msg) => assert!(msg.contains("Invalid email.from_address")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_send_with_invalid_recipient_fails() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(SMTP_PASSWORD_VAR);
        std::env::set_var(SMTP_PASSWORD_VAR, "secret");

        let mailer = mailer_with_from(Some("me@example.com"));
        let mut msg = message();
        msg.to = vec!["not-an-address".to_string()];

        match mailer.send(&msg).unwrap_err() {
            DaybookError::EmailSend(text) => assert!(text.contains("Invalid recipient")),
            other => panic!("Expected EmailSend error, got {:?}", other),
        }
    }
}
