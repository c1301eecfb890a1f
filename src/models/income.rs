//! Monthly income model
//!
//! One row per month; `month` is free text, conventionally "YYYY-MM".

use serde::{Deserialize, Serialize};

use super::lenient::Lenient;
use super::money::Money;

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    MissingMonth,
    NegativeAmount,
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingMonth => write!(f, "Month cannot be empty"),
            Self::NegativeAmount => write!(f, "Income cannot be negative"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}

/// Recorded income for a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Income {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub income: Lenient<Money>,
}

impl Income {
    pub fn new(month: impl Into<String>, income: Money) -> Self {
        Self {
            month: month.into(),
            income: Lenient::Parsed(income),
        }
    }

    /// The income value, if the stored value parses
    pub fn amount(&self) -> Option<Money> {
        self.income.value().copied()
    }

    /// Replace the income value
    pub fn set_amount(&mut self, amount: Money) {
        self.income = Lenient::Parsed(amount);
    }

    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.month.trim().is_empty() {
            return Err(IncomeValidationError::MissingMonth);
        }
        if self.amount().is_some_and(|amount| amount.is_negative()) {
            return Err(IncomeValidationError::NegativeAmount);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_income() {
        let income = Income::new("2025-01", Money::from_cents(500000));
        assert_eq!(income.month, "2025-01");
        assert_eq!(income.amount(), Some(Money::from_cents(500000)));
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_zero_income_is_valid() {
        let income = Income::new("2025-01", Money::zero());
        assert!(income.validate().is_ok());
    }

    #[test]
    fn test_validation_negative_amount() {
        let income = Income::new("2025-01", Money::from_cents(-100));
        assert_eq!(income.validate(), Err(IncomeValidationError::NegativeAmount));
    }

    #[test]
    fn test_validation_missing_month() {
        let income = Income::new(" ", Money::from_cents(100));
        assert_eq!(income.validate(), Err(IncomeValidationError::MissingMonth));
    }

    #[test]
    fn test_set_amount() {
        let mut income = Income::new("2025-01", Money::from_cents(100));
        income.income = Lenient::Raw("lots".into());
        assert_eq!(income.amount(), None);

        income.set_amount(Money::from_cents(250));
        assert_eq!(income.amount(), Some(Money::from_cents(250)));
    }
}
