//! Core data models for the expense tracker
//!
//! Expenses, monthly income, and the value types they are built from.

pub mod expense;
pub mod income;
pub mod lenient;
pub mod money;
pub mod month;

pub use expense::{Expense, ExpenseValidationError};
pub use income::{Income, IncomeValidationError};
pub use lenient::Lenient;
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
