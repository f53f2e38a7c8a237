use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for prodtracker
/// Interactive CLI to record shift production against targets
#[derive(Parser)]
#[command(
    name = "prodtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple manufacturing CLI: record shift output and check daily targets",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or a custom location)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Without a command the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive menu (default)
    Menu,

    /// Create the configuration file and an empty data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List all production records
    List,

    /// Daily production report for one date
    Report {
        /// Date to report, compared as written (YYYY-MM-DD)
        date: String,
    },

    /// Export all production records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
