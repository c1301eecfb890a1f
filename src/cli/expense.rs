//! Expense CLI commands
//!
//! Adding an expense and listing every stored expense.

use clap::Args;

use crate::config::settings::Settings;
use crate::display::format_expense_table;
use crate::error::TrackerResult;
use crate::services::{parse_amount, parse_date, CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g., "1500" or "1,500.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category name (e.g., "Food")
    pub category: String,

    /// Short note
    #[arg(short, long)]
    pub note: Option<String>,

    /// Date of the expense (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Longer description
    #[arg(long)]
    pub description: Option<String>,
}

/// Handle `add`
pub fn handle_add_command(storage: &Storage, settings: &Settings, args: AddArgs) -> TrackerResult<()> {
    let amount = parse_amount(&args.amount)?;

    let mut input = CreateExpenseInput::new(amount, args.category);
    if let Some(date) = args.date.as_deref() {
        input = input.date(parse_date(date)?);
    }
    if let Some(note) = args.note {
        input = input.note(note);
    }
    if let Some(description) = args.description {
        input = input.description(description);
    }

    let expense = ExpenseService::new(storage).add_expense(input)?;

    println!("Expense added successfully!");
    println!(
        "  {} on {} ({})",
        amount.format_with_symbol(&settings.currency_symbol),
        expense.category,
        expense.date
    );

    Ok(())
}

/// Handle `list`
pub fn handle_list_command(storage: &Storage, settings: &Settings, json: bool) -> TrackerResult<()> {
    let expenses = ExpenseService::new(storage).list()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&expenses)?);
    } else {
        print!("{}", format_expense_table(&expenses, settings));
    }

    Ok(())
}
