//! Monthly breakdowns
//!
//! Per-month expense totals, per-month income, and spending within a month.

use std::collections::BTreeMap;

use crate::models::{Expense, Income, Money, Month};

/// Month key ("YYYY-MM") to amount, ordered by key
pub type MonthlyBreakdown = BTreeMap<String, Money>;

/// Sum expenses by the month of their date
///
/// Rows with an unreadable date have no month and are left out; rows with an
/// unreadable amount contribute nothing to their month's sum.
pub fn expense_breakdown(expenses: &[Expense]) -> MonthlyBreakdown {
    let mut totals = MonthlyBreakdown::new();
    for expense in expenses {
        if let Some(date) = expense.date() {
            let total = totals.entry(Month::of(date).to_string()).or_default();
            if let Some(amount) = expense.amount() {
                *total += amount;
            }
        }
    }
    totals
}

/// Income rows as a month-to-income mapping
///
/// Rows with an unreadable income value are left out.
pub fn income_breakdown(income: &[Income]) -> MonthlyBreakdown {
    income
        .iter()
        .filter_map(|row| row.amount().map(|amount| (row.month.clone(), amount)))
        .collect()
}

/// Total spent in `month`
pub fn spending_in(expenses: &[Expense], month: Month) -> Money {
    expenses
        .iter()
        .filter(|expense| expense.date().is_some_and(|date| month.contains(date)))
        .filter_map(Expense::amount)
        .sum()
}
