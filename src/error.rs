use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("invalid transaction type '{0}'. Use 'income' or 'expense'.")]
    InvalidTransactionType(String),

    #[error("invalid amount '{0}'. Please provide a valid decimal number.")]
    InvalidAmount(String),

    #[error("invalid date '{0}'. Please use YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("invalid month '{0}'. Please provide a number from 1 to 12.")]
    InvalidMonth(String),

    #[error("invalid year '{0}'. Please provide a year like 2025.")]
    InvalidYear(String),

    #[error("aggregate total {0} cannot be represented as a decimal")]
    AmountOutOfRange(f64),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
