use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for spotbook
/// CLI application to manage office parking spot assignments stored in
/// an Excel workbook
#[derive(Parser)]
#[command(
    name = "spotbook",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple parking spot manager CLI: confirm, release and reserve office spots stored in an Excel workbook",
    long_about = None
)]
pub struct Cli {
    /// Override workbook path (useful for tests or a shared drive)
    #[arg(global = true, long = "book")]
    pub book: Option<String>,

    /// Override session file path
    #[arg(global = true, long = "session", hide = true)]
    pub session: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and an empty workbook
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for problems")]
        check: bool,
    },

    /// Log in with your office email
    Login {
        #[arg(long = "user", help = "Your email address")]
        user: String,

        #[arg(long = "password", help = "Your password")]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show your assignments, available spots and reservations
    List {
        #[arg(
            long = "all",
            conflicts_with = "collapse",
            help = "Also show assignments beyond the next two weeks (sticky until --collapse)"
        )]
        all: bool,

        #[arg(long = "collapse", help = "Go back to the two-week view")]
        collapse: bool,
    },

    /// Confirm one of your pending spot-days
    Confirm {
        /// Date of the assignment (YYYY-MM-DD)
        date: String,

        /// Spot label, e.g. 12A
        spot: String,
    },

    /// Release one of your spot-days so others can reserve it
    Release {
        /// Date of the assignment (YYYY-MM-DD)
        date: String,

        /// Spot label, e.g. 12A
        spot: String,
    },

    /// Reserve a spot-day somebody else released
    Reserve {
        /// Date of the released spot (YYYY-MM-DD)
        date: String,

        /// Spot label, e.g. 12A
        spot: String,
    },

    /// Replace the whole assignments table from a workbook (admin)
    Replace {
        #[arg(long, value_name = "FILE", help = "Workbook with the replacement table")]
        file: String,

        #[arg(long = "yes", help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Move every assignment of one user to another identity (admin)
    Reassign {
        #[arg(long = "from", help = "Email of the user to replace")]
        from: String,

        #[arg(long = "to", help = "Destination email")]
        to: String,

        #[arg(long = "name", help = "Destination display name")]
        name: String,
    },

    /// Export the assignments table (admin)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the destination without asking")]
        force: bool,
    },

    /// Create a backup copy of the workbook (admin)
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
