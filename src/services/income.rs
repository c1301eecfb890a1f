//! Income service
//!
//! Records monthly income with overwrite-on-match semantics.

use std::fmt::Display;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Income, Money, MoneyParseError};
use crate::storage::{upsert_income, Store};

/// Outcome of recording income for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncomeChange {
    Added,
    Replaced,
}

/// Service for monthly income management
pub struct IncomeService<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> IncomeService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Set the income for a month
    ///
    /// `month` is stored as text; an existing row for the same month is
    /// overwritten in place, otherwise a new row is appended.
    pub fn add_income(&self, month: impl Display, income: Money) -> TrackerResult<IncomeChange> {
        let month = month.to_string().trim().to_string();

        Income::new(month.as_str(), income)
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let mut rows = self.store.load_income()?;
        let change = if upsert_income(&mut rows, &month, income) {
            IncomeChange::Replaced
        } else {
            IncomeChange::Added
        };
        self.store.save_income(&rows)?;

        tracing::info!(month = %month, income = %income, ?change, "income recorded");

        Ok(change)
    }

    /// Like [`add_income`](Self::add_income), coercing the amount from text
    pub fn add_income_text(&self, month: impl Display, income: &str) -> TrackerResult<IncomeChange> {
        let income = parse_income(income)?;
        self.add_income(month, income)
    }

    /// The stored income for `month`, if any row matches and parses
    pub fn get(&self, month: &str) -> TrackerResult<Option<Money>> {
        let month = month.trim();
        Ok(self
            .store
            .load_income()?
            .iter()
            .find(|row| row.month == month)
            .and_then(Income::amount))
    }

    pub fn list(&self) -> TrackerResult<Vec<Income>> {
        self.store.load_income()
    }
}

/// Coerce user text into an income amount
pub fn parse_income(text: &str) -> TrackerResult<Money> {
    Money::parse(text).map_err(|e| match e {
        MoneyParseError::TooLarge(_) => TrackerError::Coercion(format!(
            "'{}' exceeds the largest accepted income",
            text.trim()
        )),
        MoneyParseError::InvalidFormat(_) => {
            TrackerError::Coercion(format!("'{}' is not a valid income amount", text.trim()))
        }
    })
}
