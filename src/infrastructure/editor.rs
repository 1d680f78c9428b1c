//! External program integration for editors and file openers

use crate::error::{DaybookError, Result};
use std::path::Path;
use std::process::Command;

/// Editor used when neither --editor nor EDITOR/VISUAL is set
pub const DEFAULT_EDITOR: &str = "vim";

/// Launches an external program on a target path
pub trait ProgramLauncher {
    /// Run the command with the target appended as the final argument,
    /// waiting for the program to finish. The exit status is not
    /// inspected; launch failure is the only error.
    fn launch(&self, command: &str, target: &Path) -> Result<()>;
}

/// Launcher backed by std::process::Command
pub struct SystemLauncher;

impl ProgramLauncher for SystemLauncher {
    fn launch(&self, command: &str, target: &Path) -> Result<()> {
        let (program, args) = split_command(command);

        let mut all_args = args;
        all_args.push(target.to_string_lossy().to_string());

        // On Windows, use cmd /C to ensure .bat and .cmd files are found
        #[cfg(windows)]
        let status = Command::new("cmd")
            .arg("/C")
            .arg(&program)
            .args(&all_args)
            .status();

        #[cfg(not(windows))]
        let status = Command::new(&program).args(&all_args).status();

        status.map_err(|e| {
            DaybookError::Editor(format!("Failed to launch '{}': {}", program, e))
        })?;

        Ok(())
    }
}

/// Resolve the editor command: explicit flag, then EDITOR, then VISUAL
pub fn resolve_editor(flag: Option<&str>) -> String {
    if let Some(editor) = flag {
        return editor.to_string();
    }

    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| DEFAULT_EDITOR.to_string())
}

/// Platform command that opens a path with its default application
pub fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else if cfg!(windows) {
        "explorer"
    } else {
        "xdg-open"
    }
}

/// Parse a command string into program and arguments
fn split_command(command: &str) -> (String, Vec<String>) {
    let parts: Vec<&str> = command.split_whitespace().collect();

    if parts.is_empty() {
        return (DEFAULT_EDITOR.to_string(), vec![]);
    }

    let program = parts[0].to_string();
    let args = parts[1..].iter().map(|s| s.to_string()).collect();

    (program, args)
}
