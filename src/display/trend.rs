//! Month-over-month income vs expenses

use serde::Serialize;
use std::collections::BTreeSet;

use super::report::{double_separator, separator};
use crate::models::Money;
use crate::reports::MonthlyBreakdown;

/// Income and expenses for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub month: String,
    pub income: Money,
    pub expenses: Money,
}

impl TrendPoint {
    /// Income left after expenses (negative when overspent)
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

/// Both series aligned over every month present in either
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    pub points: Vec<TrendPoint>,
}

impl MonthlyTrend {
    /// Align the two breakdowns on the sorted union of their months
    ///
    /// A month missing from one series counts as zero in that series.
    pub fn from_breakdowns(expenses: &MonthlyBreakdown, income: &MonthlyBreakdown) -> Self {
        let months: BTreeSet<&String> = expenses.keys().chain(income.keys()).collect();

        let points = months
            .into_iter()
            .map(|month| TrendPoint {
                month: month.clone(),
                income: income.get(month).copied().unwrap_or_default(),
                expenses: expenses.get(month).copied().unwrap_or_default(),
            })
            .collect();

        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Format the trend as a table for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        if self.is_empty() {
            return "No income or expense data yet.\n".to_string();
        }

        let mut output = String::new();
        output.push_str("Monthly Income vs Expenses\n");
        output.push_str(&double_separator(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>15} {:>15} {:>15}\n",
            "Month", "Income", "Expenses", "Net"
        ));
        output.push_str(&separator(60));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<10} {:>15} {:>15} {:>15}\n",
                point.month,
                point.income.format_with_symbol(currency),
                point.expenses.format_with_symbol(currency),
                point.net().format_with_symbol(currency)
            ));
        }

        output
    }
}
