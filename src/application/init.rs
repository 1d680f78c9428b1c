//! Initialize configuration use case

use crate::error::{DaybookError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use std::path::Path;

/// Write a starter configuration file at the specified path.
pub fn init(path: &Path, start_date: NaiveDate) -> Result<()> {
    if path.exists() {
        return Err(DaybookError::Config(format!(
            "Configuration already exists: {}",
            path.display()
        )));
    }

    let config = Config::starter(start_date);
    config.save_to(path)?;

    println!("Initialized daybook configuration at {}", path.display());
    println!("Day numbering starts from {}", start_date);
    println!("Set company.email_list and [email] before using send-journal");

    Ok(())
}
