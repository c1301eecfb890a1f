//! Display formatting for terminal output
//!
//! Turns expenses and report results into text for the terminal: the
//! expense table, dashboard metrics, category distribution and the monthly
//! income vs expense trend.

pub mod distribution;
pub mod expense;
pub mod report;
pub mod summary;
pub mod trend;

pub use distribution::{CategoryDistribution, CategoryShare};
pub use expense::format_expense_table;
pub use summary::{format_category_frequency, format_monthly_breakdown, format_summary};
pub use trend::{MonthlyTrend, TrendPoint};
