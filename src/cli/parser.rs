use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rBreakScheduler
/// CLI application to record lunch and tea breaks into a CSV schedule
#[derive(Parser)]
#[command(
    name = "rbreakscheduler",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple break scheduler CLI: record lunch and tea breaks by hand or from PDF rosters into a CSV file",
    long_about = None
)]
pub struct Cli {
    /// Override the schedule CSV path
    #[arg(global = true, long = "file", value_name = "CSV")]
    pub file: Option<String>,

    /// Override the notes log path
    #[arg(global = true, long = "notes", value_name = "CSV")]
    pub notes: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the schedule file
    Init,

    /// Manage the configuration file (view or edit, prints it by default)
    Config {
        /// Print the current configuration to stdout
        #[arg(long = "print", help = "Print the current configuration file (default)")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Save a manual break entry (all five fields are required)
    Add {
        #[arg(long = "name", help = "Name of the person")]
        name: Option<String>,

        #[arg(long = "lunch-start", help = "Lunch start (e.g. 12:00)")]
        lunch_start: Option<String>,

        #[arg(long = "lunch-end", help = "Lunch end (e.g. 12:30)")]
        lunch_end: Option<String>,

        #[arg(long = "tea-start", help = "Tea start (e.g. 15:00)")]
        tea_start: Option<String>,

        #[arg(long = "tea-end", help = "Tea end (e.g. 15:15)")]
        tea_end: Option<String>,

        /// Date of the entry, defaults to today (YYYY-MM-DD)
        #[arg(long = "date", help = "Date of the entry (default: today)")]
        date: Option<String>,
    },

    /// Import break lines from a PDF roster
    Import {
        /// PDF file to read
        #[arg(value_name = "PDF")]
        pdf: String,

        #[arg(
            long = "strict",
            help = "Reject lines whose times are not HH:MM or whose date is not YYYY-MM-DD"
        )]
        strict: bool,
    },

    /// List the recorded breaks
    List {
        #[arg(
            long,
            short = 'r',
            value_name = "RANGE",
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges like YYYY-MM:YYYY-MM)"
        )]
        range: Option<String>,

        #[arg(long, short = 'n', help = "Show only rows for this name")]
        name: Option<String>,
    },

    /// Print the notes log
    Notes {
        #[arg(long = "print", help = "Print all rows of the notes log (default)")]
        print: bool,
    },

    /// Export the schedule as one row per break
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long = "out", value_name = "FILE")]
        out: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
