use std::io::{self, Write};

use clap::Parser;
use log::info;

use contacts::error::Result;
use contacts::{Contact, ContactList};

#[derive(Debug, Parser)]
pub struct Config {
    /// Name fragment to look up
    #[arg(short, long, default_value = "Alice")]
    pub(crate) search: String,
}

pub fn command(cfg: Config) -> Result<()> {
    let stdout = io::stdout();
    write_report(&cfg.search, &mut stdout.lock())
}

fn demo_list() -> ContactList {
    let mut list = ContactList::new();
    list.add(Contact::new("Alice", "alice@example.com"));
    list.add(Contact::new("Bob", "bob@example.com"));
    list.add(Contact::new("Alice Baby", "alicebaby@example.com"));
    list.add(Contact::friend("Dusty", "Dusty@private.com", "555-1212"));
    list.add(Contact::supplier("Acme", "sales@acme.com"));
    list
}

pub(crate) fn write_report<W: Write>(search: &str, out: &mut W) -> Result<()> {
    let list = demo_list();
    let all: Vec<String> = list.iter().map(|c| c.to_string()).collect();
    writeln!(out, "[{}]", all.join(", "))?;

    let found = list.search(search);
    info!("search {:?} matched {} contacts", search, found.len());
    let names: Vec<&str> = found.iter().map(|c| c.name()).collect();
    writeln!(out, "{:?}", names)?;

    for contact in &list {
        for line in contact.contact_lines() {
            writeln!(out, "{}", line)?;
        }
        if let Ok(line) = contact.order("I need pliers") {
            writeln!(out, "{}", line)?;
        }
    }
    Ok(())
}
