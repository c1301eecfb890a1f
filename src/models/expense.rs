//! Expense model
//!
//! A single outgoing transaction. Stored rows keep their column names
//! (`Amount`, `Category`, `Note`, `Date`, `Description`) so the CSV file
//! stays readable by spreadsheet tools.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::lenient::Lenient;
use super::money::Money;

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
    MissingCategory,
    MissingDate,
}

impl std::fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Amount must be greater than zero"),
            Self::MissingCategory => write!(f, "Category cannot be empty"),
            Self::MissingDate => write!(f, "Date is required"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Expense {
    #[serde(default)]
    pub amount: Lenient<Money>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub date: Lenient<NaiveDate>,
    #[serde(default)]
    pub description: String,
}

impl Expense {
    /// Create a new expense with empty note and description
    pub fn new(amount: Money, category: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            amount: Lenient::Parsed(amount),
            category: category.into(),
            note: String::new(),
            date: Lenient::Parsed(date),
            description: String::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The amount, if the stored value parses
    pub fn amount(&self) -> Option<Money> {
        self.amount.value().copied()
    }

    /// The date, if the stored value parses
    pub fn date(&self) -> Option<NaiveDate> {
        self.date.value().copied()
    }

    /// Check the invariants every newly recorded expense must satisfy
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        match self.amount() {
            Some(amount) if amount.is_positive() => {}
            _ => return Err(ExpenseValidationError::NonPositiveAmount),
        }

        if self.category.trim().is_empty() {
            return Err(ExpenseValidationError::MissingCategory);
        }

        if self.date().is_none() {
            return Err(ExpenseValidationError::MissingDate);
        }

        Ok(())
    }
}
