//! Expense Tracker - personal expense and income tracking
//!
//! This library records expenses and monthly income in two CSV files and
//! computes read-only summaries over them: totals and averages, per-month
//! breakdowns, and spending within a given month.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (money, months, expenses, income)
//! - `storage`: CSV file storage behind the [`storage::Store`] trait
//! - `services`: Validated add operations
//! - `reports`: The [`reports::Aggregator`] and its summaries
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `expense` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::paths::TrackerPaths;
//! use expense_tracker::reports::Aggregator;
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::new(TrackerPaths::new()?);
//! let summary = Aggregator::new(&storage).summary_stats()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
