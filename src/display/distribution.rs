//! Spending by category
//!
//! Per-category totals and their share of overall spending, rendered as a
//! horizontal bar chart.

use serde::Serialize;
use std::collections::BTreeMap;

use super::report::{format_bar, format_percentage, separator, truncate};
use crate::models::{Expense, Money};

/// One category's slice of total spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub total: Money,
    pub count: usize,
    pub percentage: f64,
}

/// Spending split across categories, largest first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDistribution {
    pub categories: Vec<CategoryShare>,
    pub total: Money,
}

impl CategoryDistribution {
    /// Group readable amounts by category
    ///
    /// Expenses with a blank category or unreadable amount are left out.
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals: BTreeMap<&str, (Money, usize)> = BTreeMap::new();
        for expense in expenses {
            let category = expense.category.trim();
            if category.is_empty() {
                continue;
            }
            if let Some(amount) = expense.amount() {
                let entry = totals.entry(category).or_default();
                entry.0 += amount;
                entry.1 += 1;
            }
        }

        let total: Money = totals.values().map(|(amount, _)| *amount).sum();

        let mut categories: Vec<CategoryShare> = totals
            .into_iter()
            .map(|(category, (amount, count))| CategoryShare {
                category: category.to_string(),
                total: amount,
                count,
                percentage: amount.percentage_of(total),
            })
            .collect();

        // BTreeMap order already breaks ties by name; the sort is stable
        categories.sort_by(|a, b| b.total.cmp(&a.total));

        Self { categories, total }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Format the distribution for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "No data to display category breakdown.\n".to_string();
        }

        let max = self
            .categories
            .first()
            .map(|share| share.total.as_f64())
            .unwrap_or(0.0);

        let mut output = String::new();
        output.push_str("Spending by Category\n");
        output.push_str(&separator(72));
        output.push('\n');

        for share in &self.categories {
            output.push_str(&format!(
                "{:<20} {:>14} {:>6}  {}\n",
                truncate(&share.category, 20),
                share.total.format_with_symbol(currency),
                format_percentage(share.percentage),
                format_bar(share.total.as_f64(), max, 24)
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>14}\n",
            "Total",
            self.total.format_with_symbol(currency)
        ));

        output
    }
}
