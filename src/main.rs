mod db;
mod error;
mod models;
mod operations;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::db::store::LedgerStore;
use crate::models::transaction::TransactionType;
use crate::operations::add;
use crate::operations::summary;

#[derive(Parser)]
#[command(name = "fintrack", about = "Track income and expenses in a local SQLite ledger")]
struct Cli {
    /// Path to the SQLite ledger file.
    #[arg(long, default_value = "finance.db")]
    db: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store = LedgerStore::new(cli.db);
    store.initialize()?;

    loop {
        println!();
        println!("=== Personal Finance Tracker ===");
        println!("1. Add Income");
        println!("2. Add Expense");
        println!("3. View Monthly Summary");
        println!("4. Exit");
        let choice = prompt("Choose an option: ")?;

        match choice.as_str() {
            "1" => run_add(&store, TransactionType::Income)?,
            "2" => run_add(&store, TransactionType::Expense)?,
            "3" => run_summary(&store)?,
            "4" => {
                println!("Goodbye!");
                break;
            }
            _ => println!("Invalid choice. Try again."),
        }
    }

    Ok(())
}

fn run_add(store: &LedgerStore, kind: TransactionType) -> Result<()> {
    let category = prompt(&format!("{kind} category: "))?;
    let amount = prompt("Amount: ")?;
    let date = prompt("Date (YYYY-MM-DD, blank for today): ")?;

    let result = add::parse_amount(&amount)
        .and_then(|amount| Ok((amount, add::parse_optional_date(&date)?)))
        .and_then(|(amount, date)| store.append(kind, &category, amount, date));

    match result {
        Ok(tx) => println!(
            "{} of ${} added under '{}' on {}",
            tx.kind, tx.amount, tx.category, tx.date
        ),
        Err(e) => {
            println!("Error: {e}");
            println!("Please try again.");
        }
    }
    Ok(())
}

fn run_summary(store: &LedgerStore) -> Result<()> {
    let month = prompt("Enter month (1-12): ")?;
    let year = prompt("Enter year (e.g., 2025): ")?;

    let result = summary::parse_month(&month)
        .and_then(|month| Ok((month, summary::parse_year(&year)?)))
        .and_then(|(month, year)| summary::summarize(store, month, year));

    match result {
        Ok(report) => {
            println!();
            println!("{}", summary::render(&report));
        }
        Err(e) => println!("Error: {e}"),
    }
    Ok(())
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
