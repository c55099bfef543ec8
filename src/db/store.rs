use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use log::debug;
use rusqlite::params;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::db::connection;
use crate::error::LedgerError;
use crate::models::transaction::{CategoryTotal, Transaction, TransactionType};

/// Append-only store for transactions, backed by a single SQLite file.
///
/// Every operation opens its own connection, runs one statement and drops
/// the connection. There is no shared pool and no multi-statement
/// transaction; a single local user is assumed.
pub struct LedgerStore {
    db_path: PathBuf,
}

impl LedgerStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Creates the transactions table if it does not exist yet.
    /// Idempotent: calling it again never erases existing records.
    pub fn initialize(&self) -> Result<(), LedgerError> {
        let conn = connection::open(&self.db_path)?;
        connection::ensure_schema(&conn)?;
        debug!("ledger schema ready at {}", self.db_path.display());
        Ok(())
    }

    /// Persists a new transaction and returns it with its assigned id.
    ///
    /// A `None` date defaults to the current local date. Pass an explicit
    /// date to pin the record to a day, which is also how tests avoid
    /// depending on the wall clock.
    pub fn append(
        &self,
        kind: TransactionType,
        category: &str,
        amount: Decimal,
        date: Option<NaiveDate>,
    ) -> Result<Transaction, LedgerError> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        let conn = connection::open(&self.db_path)?;
        conn.execute(
            "INSERT INTO transactions (type, category, amount, date) VALUES (?1, ?2, ?3, ?4)",
            params![
                kind.as_str(),
                category,
                amount.to_string(),
                date.format("%Y-%m-%d").to_string(),
            ],
        )?;
        let id = conn.last_insert_rowid();
        debug!("appended transaction {id}: {kind} '{category}' {amount} on {date}");
        Ok(Transaction {
            id,
            kind,
            category: category.to_string(),
            amount,
            date,
        })
    }

    /// Sums amounts for the given month, grouped by (type, category).
    ///
    /// The month is normalized to two digits and the year matched as its
    /// literal string form against the stored `YYYY-MM-DD` dates. Row order
    /// is whatever the grouping produces. A month with no transactions
    /// yields an empty vec, not an error.
    pub fn aggregate_by_month(
        &self,
        month: u32,
        year: i32,
    ) -> Result<Vec<CategoryTotal>, LedgerError> {
        let conn = connection::open(&self.db_path)?;
        let mut stmt = conn.prepare(
            "SELECT type, category, SUM(CAST(amount AS REAL)) \
             FROM transactions \
             WHERE strftime('%m', date) = ?1 AND strftime('%Y', date) = ?2 \
             GROUP BY type, category",
        )?;
        let rows = stmt.query_map(
            params![format!("{:02}", month), year.to_string()],
            |row| {
                let kind: String = row.get(0)?;
                let category: String = row.get(1)?;
                let total: f64 = row.get(2)?;
                Ok((kind, category, total))
            },
        )?;

        let mut totals = Vec::new();
        for row in rows {
            let (kind, category, total) = row?;
            totals.push(CategoryTotal {
                kind: kind.parse::<TransactionType>()?,
                category,
                total: Decimal::from_f64(total).ok_or(LedgerError::AmountOutOfRange(total))?,
            });
        }
        debug!(
            "aggregated {} group(s) for {:02}/{}",
            totals.len(),
            month,
            year
        );
        Ok(totals)
    }
}
