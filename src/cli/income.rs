//! Income CLI commands

use clap::Args;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::Month;
use crate::services::{parse_income, IncomeChange, IncomeService};
use crate::storage::Storage;

/// Arguments for `income`
#[derive(Args, Debug)]
pub struct IncomeArgs {
    /// Month the income belongs to (e.g., "2025-01")
    pub month: String,

    /// Total income for the month
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Handle `income`
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    args: IncomeArgs,
) -> TrackerResult<()> {
    let month = Month::parse(&args.month)
        .map_err(|e| TrackerError::Coercion(format!("'{}': {}", args.month.trim(), e)))?;
    let amount = parse_income(&args.amount)?;

    let change = IncomeService::new(storage).add_income(month, amount)?;

    println!("Income added successfully!");
    match change {
        IncomeChange::Added => println!(
            "  {} set to {}",
            month.friendly(),
            amount.format_with_symbol(&settings.currency_symbol)
        ),
        IncomeChange::Replaced => println!(
            "  {} updated to {}",
            month.friendly(),
            amount.format_with_symbol(&settings.currency_symbol)
        ),
    }

    Ok(())
}
