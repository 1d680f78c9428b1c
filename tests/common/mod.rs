use assert_cmd::Command;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

pub fn daybook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("daybook").unwrap();
    cmd.env_remove("DAYBOOK_CONFIG");
    cmd.env_remove("DAYBOOK_SMTP_PASSWORD");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Write a minimal configuration with the given start date.
#[allow(dead_code)]
pub fn write_config(dir: &Path, start_date: NaiveDate) {
    let contents = format!("[company]\nstart_date = \"{}\"\n", start_date);
    fs::write(dir.join("daybook.toml"), contents).unwrap();
}
