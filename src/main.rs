//! Address Book - command-line entry point.

use address_book::{AddressBook, AddressBookError, Config, Record};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod cli;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;

    // Logs go to stderr so command output stays clean on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let path = cli.file.clone().unwrap_or_else(|| config.book_path.clone());
    info!(path = %path.display(), "Opening address book");

    let mut book = AddressBook::open(&path)
        .with_context(|| format!("Failed to open address book at {}", path.display()))?;

    let mut stdout = io::stdout().lock();
    if let Err(e) = run(&mut book, cli.command, &mut stdout) {
        error!("Command failed: {}", e);
        return Err(e);
    }
    Ok(())
}

/// Execute one command against `book`, writing user-facing output to `out`.
///
/// Output describing a change is only written once the change is persisted.
fn run(book: &mut AddressBook, command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Add {
            name,
            birthday,
            phones,
        } => {
            let mut record = Record::new(name, birthday.as_deref())?;
            for phone in &phones {
                record.add_phone(phone)?;
            }
            let summary = record.to_string();
            book.add_record(record)?;
            writeln!(out, "{}", summary)?;
        }
        Command::Delete { name } => match book.delete(&name)? {
            Some(_) => writeln!(out, "Deleted {}", name)?,
            None => writeln!(out, "No contact named {}", name)?,
        },
        Command::Show { name } => {
            let record = book
                .get(&name)
                .ok_or(AddressBookError::ContactNotFound(name))?;
            write_record(out, record)?;
        }
        Command::List => {
            for record in book.records() {
                write_record(out, record)?;
            }
        }
        Command::Search { query } => {
            let results = book.search(&query);
            if results.is_empty() {
                writeln!(out, "No contacts match '{}'", query)?;
            }
            for record in results {
                write_record(out, record)?;
            }
        }
        Command::AddPhone { name, phone } => {
            book.update_record(&name, |r| r.add_phone(&phone))?;
        }
        Command::RemovePhone { name, phone } => {
            let removed = book.update_record(&name, |r| Ok(r.remove_phone(&phone)))?;
            writeln!(out, "Removed {} phone number(s)", removed)?;
        }
        Command::EditPhone { name, old, new } => {
            book.update_record(&name, |r| r.edit_phone(&old, &new))?;
        }
        Command::SetBirthday { name, birthday } => {
            book.update_record(&name, |r| r.set_birthday(&birthday))?;
        }
        Command::Birthday { name } => {
            let record = book
                .get(&name)
                .ok_or_else(|| AddressBookError::ContactNotFound(name.clone()))?;
            match record.days_to_next_birthday() {
                Some(0) => writeln!(out, "{}'s birthday is today", name)?,
                Some(days) => writeln!(out, "{} day(s) until {}'s birthday", days, name)?,
                None => writeln!(out, "{} has no birthday set", name)?,
            }
        }
        Command::Upcoming { days } => {
            for (record, remaining) in book.upcoming_birthdays(days) {
                writeln!(out, "{} in {} day(s)", record.name(), remaining)?;
            }
        }
    }
    Ok(())
}

fn write_record(out: &mut impl Write, record: &Record) -> io::Result<()> {
    match record.birthday() {
        Some(birthday) => writeln!(out, "{}, birthday: {}", record, birthday),
        None => writeln!(out, "{}", record),
    }
}
