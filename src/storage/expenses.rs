//! Expense repository
//!
//! Handles persistence of expenses to `expenses.csv`. Insertion order is the
//! transaction history, so rows are only ever appended.

use std::path::PathBuf;

use crate::error::TrackerError;
use crate::models::Expense;

use super::file_io::{read_csv, write_csv_atomic, CsvRecord};

impl CsvRecord for Expense {
    const HEADERS: &'static [&'static str] = &["Amount", "Category", "Note", "Date", "Description"];
}

/// Repository for expenses
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
}

impl ExpenseRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all expenses in file order
    pub fn load(&self) -> Result<Vec<Expense>, TrackerError> {
        read_csv(&self.path)
    }

    /// Overwrite the file with `expenses`
    pub fn save(&self, expenses: &[Expense]) -> Result<(), TrackerError> {
        write_csv_atomic(&self.path, expenses)
    }

    /// Append one expense, rewriting the whole file
    pub fn append(&self, expense: Expense) -> Result<(), TrackerError> {
        let mut expenses = self.load()?;
        expenses.push(expense);
        self.save(&expenses)
    }
}
