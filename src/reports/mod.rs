//! Reports module for the expense tracker
//!
//! Read-only summaries over the stored expenses and income. Every call
//! reloads the collections from the [`Store`], so results always reflect
//! the current files and repeated calls without writes agree.

pub mod monthly;
pub mod summary;

pub use monthly::MonthlyBreakdown;
pub use summary::Summary;

use crate::error::TrackerResult;
use crate::models::{Money, Month};
use crate::storage::Store;

/// Computes summaries from whatever the store currently holds
pub struct Aggregator<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> Aggregator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Summary statistics, or `None` when no expenses are recorded
    pub fn summary_stats(&self) -> TrackerResult<Option<Summary>> {
        let expenses = self.store.load_expenses()?;
        Ok(Summary::from_expenses(&expenses))
    }

    /// Total spent per "YYYY-MM" month
    pub fn monthly_expense_breakdown(&self) -> TrackerResult<MonthlyBreakdown> {
        let expenses = self.store.load_expenses()?;
        Ok(monthly::expense_breakdown(&expenses))
    }

    /// Income per month as recorded
    pub fn monthly_income_breakdown(&self) -> TrackerResult<MonthlyBreakdown> {
        let income = self.store.load_income()?;
        Ok(monthly::income_breakdown(&income))
    }

    /// Total spent in the given calendar month; zero for an invalid month
    pub fn monthly_spending(&self, year: i32, month: u32) -> TrackerResult<Money> {
        let Some(month) = Month::new(year, month) else {
            return Ok(Money::zero());
        };
        let expenses = self.store.load_expenses()?;
        Ok(monthly::spending_in(&expenses, month))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::models::{Expense, Income};
    use crate::services::{CreateExpenseInput, ExpenseService, IncomeService};
    use crate::storage::{MemoryStore, Storage};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    fn sample_store() -> MemoryStore {
        MemoryStore::with_data(
            vec![
                Expense::new(Money::from_cents(10000), "Food", jan(1)),
                Expense::new(Money::from_cents(5000), "Food", jan(1)),
                Expense::new(Money::from_cents(3000), "Transport", jan(2)),
            ],
            vec![Income::new("2024-01", Money::from_cents(250000))],
        )
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        let aggregator = Aggregator::new(&store);

        assert_eq!(aggregator.summary_stats().unwrap(), None);
        assert!(aggregator.monthly_expense_breakdown().unwrap().is_empty());
        assert!(aggregator.monthly_income_breakdown().unwrap().is_empty());
        assert_eq!(aggregator.monthly_spending(2024, 1).unwrap(), Money::zero());
    }

    #[test]
    fn test_summary_stats() {
        let store = sample_store();
        let summary = Aggregator::new(&store).summary_stats().unwrap().unwrap();

        assert_eq!(summary.total, Money::from_cents(18000));
        assert_eq!(summary.average, Some(Money::from_cents(6000)));
        assert_eq!(summary.daily_average, Some(Money::from_cents(9000)));
        assert_eq!(summary.category_counts.get("Food"), Some(&2));
        assert_eq!(summary.category_counts.get("Transport"), Some(&1));
    }

    #[test]
    fn test_monthly_spending() {
        let store = sample_store();
        let aggregator = Aggregator::new(&store);

        assert_eq!(
            aggregator.monthly_spending(2024, 1).unwrap(),
            Money::from_cents(18000)
        );
        assert_eq!(aggregator.monthly_spending(2024, 2).unwrap(), Money::zero());
        assert_eq!(aggregator.monthly_spending(2024, 13).unwrap(), Money::zero());
    }

    #[test]
    fn test_breakdowns() {
        let store = sample_store();
        let aggregator = Aggregator::new(&store);

        let expenses = aggregator.monthly_expense_breakdown().unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses.get("2024-01"), Some(&Money::from_cents(18000)));

        let income = aggregator.monthly_income_breakdown().unwrap();
        assert_eq!(income.get("2024-01"), Some(&Money::from_cents(250000)));
    }

    #[test]
    fn test_reads_are_idempotent() {
        let store = sample_store();
        let aggregator = Aggregator::new(&store);

        assert_eq!(
            aggregator.summary_stats().unwrap(),
            aggregator.summary_stats().unwrap()
        );
        assert_eq!(
            aggregator.monthly_expense_breakdown().unwrap(),
            aggregator.monthly_expense_breakdown().unwrap()
        );
        assert_eq!(
            aggregator.monthly_income_breakdown().unwrap(),
            aggregator.monthly_income_breakdown().unwrap()
        );
    }

    #[test]
    fn test_reflects_writes_through_csv_storage() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(TrackerPaths::with_base_dir(temp_dir.path().to_path_buf()));
        let aggregator = Aggregator::new(&storage);
        let expenses = ExpenseService::new(&storage);
        let income = IncomeService::new(&storage);

        assert_eq!(aggregator.summary_stats().unwrap(), None);

        expenses
            .add_expense(CreateExpenseInput::new(Money::from_cents(10000), "Food").date(jan(1)))
            .unwrap();
        income.add_income("2024-01", Money::from_cents(1000)).unwrap();
        income.add_income("2024-01", Money::from_cents(2000)).unwrap();

        let summary = aggregator.summary_stats().unwrap().unwrap();
        assert_eq!(summary.total, Money::from_cents(10000));
        assert_eq!(
            aggregator.monthly_income_breakdown().unwrap().get("2024-01"),
            Some(&Money::from_cents(2000))
        );
    }
}
