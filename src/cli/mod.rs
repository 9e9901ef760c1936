pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "broadsheet")]
#[command(about = "A terminal Guardian news reader", long_about = None)]
pub struct Cli {
    /// Launches the reader UI when no subcommand is given
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch stories once and print them
    Fetch,
    /// Launch the TUI
    Tui,
    /// Inspect or change search preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the current preferences
    Show,
    /// Set the search keyword
    Keyword {
        /// Keyword passed to the search API
        value: String,
    },
    /// Set the earliest publication date
    FromDate {
        /// Date as yyyy-MM-dd; an empty string means today's date
        value: String,
    },
    /// Choose whether story thumbnails are requested
    Images {
        state: Toggle,
    },
    /// Choose whether author names are requested
    Authors {
        state: Toggle,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    pub fn is_on(self) -> bool {
        matches!(self, Toggle::On)
    }
}
