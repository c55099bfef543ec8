use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Form stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl FromStr for TransactionType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(LedgerError::InvalidTransactionType(other.to_string())),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded income or expense event. Immutable once persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: i64,
    pub kind: TransactionType,
    pub category: String,
    pub amount: Decimal,
    pub date: NaiveDate,
}

/// One row of a monthly aggregate: the summed amount for a
/// (type, category) group.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub kind: TransactionType,
    pub category: String,
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_income_and_expense() {
        assert_eq!("income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("expense".parse::<TransactionType>().unwrap(), TransactionType::Expense);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Income".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("EXPENSE".parse::<TransactionType>().unwrap(), TransactionType::Expense);
    }

    #[test]
    fn test_parse_rejects_unknown_type() {
        let result = "savings".parse::<TransactionType>();
        assert!(matches!(result, Err(LedgerError::InvalidTransactionType(ref t)) if t == "savings"));
    }

    #[test]
    fn test_display_is_title_case() {
        assert_eq!(TransactionType::Income.to_string(), "Income");
        assert_eq!(TransactionType::Expense.to_string(), "Expense");
    }
}
