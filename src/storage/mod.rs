//! Storage layer for the expense tracker
//!
//! Provides CSV file storage with atomic whole-file writes and lazy file
//! creation. The [`Store`] trait is the only seam through which services and
//! reports touch persisted state.

pub mod expenses;
pub mod file_io;
pub mod income;
pub mod memory;

pub use expenses::ExpenseRepository;
pub use file_io::{read_csv, write_csv_atomic, CsvRecord};
pub use income::{upsert_income, IncomeRepository};
pub use memory::MemoryStore;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::{Expense, Income};

/// Whole-collection persistence for expenses and income
///
/// Loads return an empty collection when nothing has been stored yet.
/// Saves replace the entire collection.
pub trait Store {
    fn load_expenses(&self) -> Result<Vec<Expense>, TrackerError>;
    fn load_income(&self) -> Result<Vec<Income>, TrackerError>;
    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), TrackerError>;
    fn save_income(&self, income: &[Income]) -> Result<(), TrackerError>;
}

/// CSV-backed storage rooted at a data directory
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    pub income: IncomeRepository,
}

impl Storage {
    /// Create a new Storage instance
    ///
    /// No files or directories are created until the first save.
    pub fn new(paths: TrackerPaths) -> Self {
        Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            income: IncomeRepository::new(paths.income_file()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}

impl Store for Storage {
    fn load_expenses(&self) -> Result<Vec<Expense>, TrackerError> {
        self.expenses.load()
    }

    fn load_income(&self) -> Result<Vec<Income>, TrackerError> {
        self.income.load()
    }

    fn save_expenses(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        self.expenses.save(expenses)
    }

    fn save_income(&self, income: &[Income]) -> Result<(), TrackerError> {
        self.income.save(income)
    }
}
