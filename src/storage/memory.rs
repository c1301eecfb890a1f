//! In-memory store
//!
//! Holds both collections in process memory. Useful for tests and for
//! embedding the aggregation layer without touching the filesystem.

use std::sync::RwLock;

use crate::error::TrackerError;
use crate::models::{Expense, Income};

use super::Store;

/// A [`Store`] backed by two in-memory vectors
#[derive(Debug, Default)]
pub struct MemoryStore {
    expenses: RwLock<Vec<Expense>>,
    income: RwLock<Vec<Income>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with data
    pub fn with_data(expenses: Vec<Expense>, income: Vec<Income>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
            income: RwLock::new(income),
        }
    }
}

impl Store for MemoryStore {
    fn load_expenses(&self) -> Result<Vec<Expense>, TrackerError> {
        let expenses = self
            .expenses
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(expenses.clone())
    }

    fn load_income(&self) -> Result<Vec<Income>, TrackerError> {
        let income = self
            .income
            .read()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(income.clone())
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        let mut stored = self
            .expenses
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *stored = expenses.to_vec();
        Ok(())
    }

    fn save_income(&self, income: &[Income]) -> Result<(), TrackerError> {
        let mut stored = self
            .income
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *stored = income.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_starts_empty() {
        let store = MemoryStore::new();
        assert!(store.load_expenses().unwrap().is_empty());
        assert!(store.load_income().unwrap().is_empty());
    }

    #[test]
    fn test_save_replaces_collection() {
        let store = MemoryStore::new();
        let expense = Expense::new(
            Money::from_cents(100),
            "Food",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );

        store.save_expenses(&[expense.clone(), expense.clone()]).unwrap();
        assert_eq!(store.load_expenses().unwrap().len(), 2);

        store.save_expenses(&[expense]).unwrap();
        assert_eq!(store.load_expenses().unwrap().len(), 1);
    }
}
