//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "address-book",
    version,
    about = "Personal address book with phone numbers and birthday reminders"
)]
pub struct Cli {
    /// Address book file (overrides ADDRESS_BOOK_PATH).
    #[arg(long = "file", short = 'f', value_name = "PATH", global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a contact, replacing any contact with the same name.
    Add {
        name: String,
        /// Birthday in YYYY-MM-DD form.
        #[arg(long)]
        birthday: Option<String>,
        /// Phone number (ten digits); may be repeated.
        #[arg(long = "phone", short = 'p')]
        phones: Vec<String>,
    },

    /// Delete a contact.
    Delete { name: String },

    /// Show one contact.
    Show { name: String },

    /// List every contact.
    List,

    /// Find contacts whose name or phone contains the query.
    Search { query: String },

    /// Add a phone number to a contact.
    AddPhone { name: String, phone: String },

    /// Remove every occurrence of a phone number from a contact.
    RemovePhone { name: String, phone: String },

    /// Replace a contact's phone number.
    EditPhone {
        name: String,
        old: String,
        new: String,
    },

    /// Set a contact's birthday (YYYY-MM-DD).
    SetBirthday { name: String, birthday: String },

    /// Days until a contact's next birthday.
    Birthday { name: String },

    /// Contacts with a birthday in the coming days.
    Upcoming {
        #[arg(long, default_value_t = 7)]
        days: i64,
    },
}
