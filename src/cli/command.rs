use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(name = "birthday-rolodex", version, about = "Birthday reminders for your contacts")]
pub struct Cli {
    /// File the contacts are persisted to
    #[arg(long, global = true, env = "BIRTHDAY_STORAGE_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub data_file: String,

    /// Log store activity (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new birthday
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Birth date as YYYY-MM-DD
        #[arg(long)]
        birth_date: NaiveDate,

        /// Contact email address
        #[arg(long)]
        email: String,
    },
    /// List upcoming birthdays, nearest first
    List,
    /// Delete every contact with this exact name
    Delete {
        /// Name of contact to delete
        #[arg(long)]
        name: String,
    },
    /// Print the names of stored contacts
    Names,
}
