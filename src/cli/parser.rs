use crate::core::provision::DEFAULT_TITLE;
use clap::{Parser, Subcommand};

/// Command-line interface definition for petlog
#[derive(Parser)]
#[command(
    name = "petlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Record a pet's daily stool observations (Bristol scale) into a Google Sheets spreadsheet",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or several pets)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file
    Init {
        #[arg(long = "sheet-id", help = "Spreadsheet ID returned by `provision`")]
        sheet_id: Option<String>,

        #[arg(long = "credentials", help = "Service-account key file (JSON)")]
        credentials: Option<String>,

        #[arg(long = "force", help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration for missing or invalid fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Create the records spreadsheet inside a Drive folder (one-shot)
    Provision {
        /// Folder ID or folder URL
        #[arg(long = "folder-id", value_name = "ID_OR_URL")]
        folder_id: String,

        #[arg(long = "title", default_value = DEFAULT_TITLE)]
        title: String,

        #[arg(long = "credentials", default_value = "service-account.json")]
        credentials: String,
    },

    /// Run the web form
    Serve {
        #[arg(long = "bind", help = "Listen address (default from config)")]
        bind: Option<String>,
    },

    /// Record one observation from the terminal
    Add {
        /// Stool type: code 1-7 or full label
        tipo: String,

        /// Day of the observation (YYYY-MM-DD or DD/MM/YYYY, default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Time of the observation (HH:MM, default now)
        #[arg(long = "time")]
        time: Option<String>,
    },

    /// List the Bristol scale categories and their codes
    Types,
}
