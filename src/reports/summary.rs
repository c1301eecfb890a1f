//! Summary statistics
//!
//! Totals, averages and category frequencies over all expenses.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::{Expense, Money};

/// Summary statistics over every recorded expense
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sum of all readable amounts
    pub total: Money,
    /// Mean amount per expense; absent when no amount is readable
    pub average: Option<Money>,
    /// Mean of per-day totals over the distinct dates present
    pub daily_average: Option<Money>,
    /// Number of expenses per category
    pub category_counts: BTreeMap<String, usize>,
    /// Number of stored expense rows
    pub transaction_count: usize,
}

impl Summary {
    /// Compute the summary, or `None` if there are no expenses
    ///
    /// Amounts or dates that don't parse are left out of the sums and means
    /// they would feed, so a single bad row never blocks reporting.
    pub fn from_expenses(expenses: &[Expense]) -> Option<Self> {
        if expenses.is_empty() {
            return None;
        }

        let amounts: Vec<Money> = expenses.iter().filter_map(Expense::amount).collect();
        let total: Money = amounts.iter().sum();
        let average = total.div_rounded(amounts.len());

        let mut per_day: BTreeMap<NaiveDate, Money> = BTreeMap::new();
        for expense in expenses {
            if let Some(date) = expense.date() {
                let day_total = per_day.entry(date).or_default();
                if let Some(amount) = expense.amount() {
                    *day_total += amount;
                }
            }
        }
        let daily_average = per_day.values().sum::<Money>().div_rounded(per_day.len());

        let mut category_counts = BTreeMap::new();
        for expense in expenses {
            let category = expense.category.trim();
            if !category.is_empty() {
                *category_counts.entry(category.to_string()).or_insert(0) += 1;
            }
        }

        Some(Self {
            total,
            average,
            daily_average,
            category_counts,
            transaction_count: expenses.len(),
        })
    }

    /// The most frequent category; ties go to the alphabetically first name
    pub fn top_category(&self) -> Option<&str> {
        self.category_counts
            .iter()
            .fold(None, |best: Option<(&String, usize)>, (name, count)| match best {
                Some((_, best_count)) if best_count >= *count => best,
                _ => Some((name, *count)),
            })
            .map(|(name, _)| name.as_str())
    }
}
