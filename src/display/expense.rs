//! Expense display formatting
//!
//! Renders stored expenses as a table. Values that failed to parse are shown
//! exactly as they appear on disk.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::config::settings::Settings;
use crate::models::Expense;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl ExpenseRow {
    fn from_expense(expense: &Expense, settings: &Settings) -> Self {
        let date = match expense.date() {
            Some(date) => date.format(&settings.date_format).to_string(),
            None => expense.date.to_string(),
        };
        let amount = match expense.amount() {
            Some(amount) => amount.format_with_symbol(&settings.currency_symbol),
            None => expense.amount.to_string(),
        };

        Self {
            date,
            category: expense.category.clone(),
            amount,
            note: truncate(&expense.note, 30),
            description: truncate(&expense.description, 40),
        }
    }
}

/// Format all expenses as a table, in stored order
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No transactions to display.\n".to_string();
    }

    let rows: Vec<ExpenseRow> = expenses
        .iter()
        .map(|expense| ExpenseRow::from_expense(expense, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lenient, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_empty_table() {
        let text = format_expense_table(&[], &Settings::default());
        assert_eq!(text, "No transactions to display.\n");
    }

    #[test]
    fn test_table_contents() {
        let expenses = vec![Expense::new(
            Money::from_cents(250050),
            "Rent",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .with_note("March")];

        let text = format_expense_table(&expenses, &Settings::default());
        assert!(text.contains("Category"));
        assert!(text.contains("Rent"));
        assert!(text.contains("₦2500.50"));
        assert!(text.contains("2024-03-01"));
        assert!(text.contains("March"));
    }

    #[test]
    fn test_raw_values_shown_verbatim() {
        let mut expense = Expense::new(
            Money::zero(),
            "Misc",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        expense.amount = Lenient::Raw("abc".into());
        expense.date = Lenient::Raw("someday".into());

        let text = format_expense_table(&[expense], &Settings::default());
        assert!(text.contains("abc"));
        assert!(text.contains("someday"));
    }

    #[test]
    fn test_custom_date_format() {
        let settings = Settings {
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        let expenses = vec![Expense::new(
            Money::from_cents(100),
            "Food",
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        )];

        assert!(format_expense_table(&expenses, &settings).contains("09/03/2024"));
    }
}
