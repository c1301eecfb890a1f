//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service and report layers.

pub mod expense;
pub mod income;
pub mod report;

pub use expense::{handle_add_command, handle_list_command, AddArgs};
pub use income::{handle_income_command, IncomeArgs};
pub use report::{
    handle_analytics_command, handle_dashboard_command, handle_month_command,
    handle_placeholder_command, handle_trend_command,
};
