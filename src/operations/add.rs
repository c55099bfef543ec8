use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerError;

pub fn parse_amount(input: &str) -> Result<Decimal, LedgerError> {
    let trimmed = input.trim();
    trimmed
        .parse::<Decimal>()
        .map_err(|_| LedgerError::InvalidAmount(trimmed.to_string()))
}

/// Blank input means "use today's date".
pub fn parse_optional_date(input: &str) -> Result<Option<NaiveDate>, LedgerError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| LedgerError::InvalidDate(trimmed.to_string()))
}
