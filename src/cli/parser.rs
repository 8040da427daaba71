use clap::{Parser, Subcommand};

/// Command-line interface definition for wordvault
/// CLI application to manage vocabulary dictionaries with SQLite
#[derive(Parser)]
#[command(
    name = "wordvault",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple vocabulary store CLI: shared and personal dictionaries with random quiz sampling",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// Register a user, or rename an already registered one
    User {
        /// External user identifier (e.g. the bot chat id)
        user_id: i64,

        /// Display name; overwritten on re-registration
        username: String,
    },

    /// Bulk-load the common dictionary from a CSV file (target,translation)
    Load {
        /// Path to the word list file
        file: String,
    },

    /// Draw random words from the common and personal dictionaries
    Quiz {
        /// External user identifier
        user_id: i64,

        /// How many words to draw (defaults to the configured quiz size)
        #[arg(long = "limit")]
        limit: Option<usize>,
    },

    /// Add a word to a personal dictionary
    Add {
        /// External user identifier
        user_id: i64,

        /// Target-language word
        target: String,

        /// Translation
        translation: String,
    },

    /// Delete a word from a personal dictionary
    Del {
        /// External user identifier
        user_id: i64,

        /// Target-language word to delete
        target: String,
    },

    /// Insert a word into a personal dictionary if absent (never overwrites)
    Update {
        /// External user identifier
        user_id: i64,

        /// Target-language word
        target: String,

        /// Translation
        translation: String,
    },

    /// Check whether a word is present in the common dictionary
    Exists {
        /// Target-language word to look up
        word: String,
    },

    /// Print a personal dictionary
    List {
        /// External user identifier
        user_id: i64,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
