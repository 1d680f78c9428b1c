//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daybook")]
#[command(about = "Daily work journal with day tracking and email reports", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show today's day number
    Day,

    /// Print a journal entry
    Read {
        /// Date in YYYY-MM-DD format (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Edit a journal entry in your editor
    Edit {
        /// Date in YYYY-MM-DD format (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Editor command (default: $EDITOR, then $VISUAL, then vim)
        #[arg(long)]
        editor: Option<String>,
    },

    /// Open a journal entry with the system default application
    OpenEntry {
        /// Date in YYYY-MM-DD format (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Open the entries directory in the file browser
    OpenDir,

    /// Append a timestamped note to today's entry, or edit it when no text is given
    Journal {
        /// Text to append; omit to open the editor instead
        #[arg(value_name = "TEXT")]
        text: Option<String>,
    },

    /// Email a journal entry to the configured recipients
    SendJournal {
        /// Date in YYYY-MM-DD format (default: today)
        #[arg(long)]
        date: Option<String>,
    },

    /// Create a starter configuration file
    Init {
        /// Start date in YYYY-MM-DD format (default: today)
        #[arg(long)]
        start_date: Option<String>,
    },
}
