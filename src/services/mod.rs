//! Service layer for the expense tracker
//!
//! The service layer provides the write operations on top of the storage
//! layer, handling input coercion and validation before anything is persisted.

pub mod expense;
pub mod income;

pub use expense::{parse_amount, parse_date, CreateExpenseInput, ExpenseService};
pub use income::{parse_income, IncomeChange, IncomeService};
