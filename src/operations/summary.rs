use rust_decimal::Decimal;

use crate::db::store::LedgerStore;
use crate::error::LedgerError;
use crate::models::transaction::{CategoryTotal, TransactionType};

/// A month's grouped totals plus the income/expense split.
#[derive(Debug, PartialEq)]
pub struct MonthlySummary {
    pub month: u32,
    pub year: i32,
    pub rows: Vec<CategoryTotal>,
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub net_balance: Decimal,
}

/// Aggregates the given month and adds each group's total to the income
/// or expense side. A month with no transactions yields zero totals.
pub fn summarize(
    store: &LedgerStore,
    month: u32,
    year: i32,
) -> Result<MonthlySummary, LedgerError> {
    let rows = store.aggregate_by_month(month, year)?;

    let mut income_total = Decimal::ZERO;
    let mut expense_total = Decimal::ZERO;
    for row in &rows {
        match row.kind {
            TransactionType::Income => income_total += row.total,
            TransactionType::Expense => expense_total += row.total,
        }
    }

    Ok(MonthlySummary {
        month,
        year,
        rows,
        income_total,
        expense_total,
        net_balance: income_total - expense_total,
    })
}

/// Renders the summary as the report text printed by the menu. Amounts are
/// formatted to two decimal places here; the totals themselves are unrounded.
pub fn render(summary: &MonthlySummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Summary for {}/{}:\n", summary.month, summary.year));
    for row in &summary.rows {
        out.push_str(&format!(
            "{:7} | {:12} | ${:.2}\n",
            row.kind.to_string(),
            row.category,
            row.total
        ));
    }
    out.push_str(&format!("\nTotal Income : ${:.2}\n", summary.income_total));
    out.push_str(&format!("Total Expense: ${:.2}\n", summary.expense_total));
    out.push_str(&format!("Net Balance  : ${:.2}", summary.net_balance));
    out
}

pub fn parse_month(input: &str) -> Result<u32, LedgerError> {
    let trimmed = input.trim();
    match trimmed.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(month),
        _ => Err(LedgerError::InvalidMonth(trimmed.to_string())),
    }
}

pub fn parse_year(input: &str) -> Result<i32, LedgerError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i32>()
        .map_err(|_| LedgerError::InvalidYear(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> LedgerStore {
        let store = LedgerStore::new(dir.path().join("ledger.db"));
        store.initialize().unwrap();
        store
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_summarize_salary_and_rent() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store
            .append(TransactionType::Income, "Salary", Decimal::new(1000, 0), Some(date(2025, 1, 5)))
            .unwrap();
        store
            .append(TransactionType::Expense, "Rent", Decimal::new(400, 0), Some(date(2025, 1, 10)))
            .unwrap();

        let summary = summarize(&store, 1, 2025).unwrap();

        assert_eq!(summary.rows.len(), 2);
        assert!(summary.rows.contains(&CategoryTotal {
            kind: TransactionType::Income,
            category: "Salary".to_string(),
            total: Decimal::new(1000, 0),
        }));
        assert!(summary.rows.contains(&CategoryTotal {
            kind: TransactionType::Expense,
            category: "Rent".to_string(),
            total: Decimal::new(400, 0),
        }));
        assert_eq!(summary.income_total, Decimal::new(1000, 0));
        assert_eq!(summary.expense_total, Decimal::new(400, 0));
        assert_eq!(summary.net_balance, Decimal::new(600, 0));
    }

    #[test]
    fn test_summarize_empty_month_reports_zeros() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);

        let summary = summarize(&store, 3, 2025).unwrap();

        assert!(summary.rows.is_empty());
        assert_eq!(summary.income_total, Decimal::ZERO);
        assert_eq!(summary.expense_total, Decimal::ZERO);
        assert_eq!(summary.net_balance, Decimal::ZERO);
    }

    #[test]
    fn test_net_balance_is_income_minus_expense() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store
            .append(TransactionType::Income, "Salary", Decimal::new(250050, 2), Some(date(2025, 7, 1)))
            .unwrap();
        store
            .append(TransactionType::Expense, "Rent", Decimal::new(90000, 2), Some(date(2025, 7, 2)))
            .unwrap();
        store
            .append(TransactionType::Expense, "Food", Decimal::new(12345, 2), Some(date(2025, 7, 15)))
            .unwrap();

        let summary = summarize(&store, 7, 2025).unwrap();

        assert_eq!(summary.net_balance, summary.income_total - summary.expense_total);
    }

    #[test]
    fn test_render_formats_two_decimal_places() {
        let summary = MonthlySummary {
            month: 1,
            year: 2025,
            rows: vec![CategoryTotal {
                kind: TransactionType::Income,
                category: "Salary".to_string(),
                total: Decimal::new(1000, 0),
            }],
            income_total: Decimal::new(1000, 0),
            expense_total: Decimal::ZERO,
            net_balance: Decimal::new(1000, 0),
        };

        let text = render(&summary);

        assert!(text.starts_with("Summary for 1/2025:\n"));
        assert!(text.contains("Income  | Salary       | $1000.00"));
        assert!(text.contains("Total Income : $1000.00"));
        assert!(text.contains("Total Expense: $0.00"));
        assert!(text.ends_with("Net Balance  : $1000.00"));
    }

    #[test]
    fn test_parse_month_bounds() {
        assert_eq!(parse_month("1").unwrap(), 1);
        assert_eq!(parse_month(" 12 ").unwrap(), 12);
        assert!(matches!(parse_month("0"), Err(LedgerError::InvalidMonth(_))));
        assert!(matches!(parse_month("13"), Err(LedgerError::InvalidMonth(_))));
        assert!(matches!(parse_month("jan"), Err(LedgerError::InvalidMonth(_))));
    }

    #[test]
    fn test_parse_year_rejects_non_numeric() {
        assert_eq!(parse_year("2025").unwrap(), 2025);
        assert!(matches!(parse_year("last year"), Err(LedgerError::InvalidYear(_))));
    }
}
