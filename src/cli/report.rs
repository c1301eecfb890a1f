//! Report CLI commands
//!
//! Read-only views over stored data: dashboard, analytics, trend and
//! single-month spending. With `--json` each view prints its data as JSON
//! instead of text.

use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{
    format_category_frequency, format_monthly_breakdown, format_summary, CategoryDistribution,
    MonthlyTrend,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Money, Month};
use crate::reports::{Aggregator, MonthlyBreakdown, Summary};
use crate::services::ExpenseService;
use crate::storage::Storage;

#[derive(Serialize)]
struct DashboardReport {
    summary: Option<Summary>,
    monthly_expenses: MonthlyBreakdown,
    monthly_income: MonthlyBreakdown,
}

#[derive(Serialize)]
struct AnalyticsReport {
    monthly_expenses: MonthlyBreakdown,
    categories: CategoryDistribution,
}

#[derive(Serialize)]
struct MonthReport {
    month: String,
    spending: Money,
}

fn print_json<T: Serialize>(value: &T) -> TrackerResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Handle `dashboard`
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    json: bool,
) -> TrackerResult<()> {
    let aggregator = Aggregator::new(storage);
    let report = DashboardReport {
        summary: aggregator.summary_stats()?,
        monthly_expenses: aggregator.monthly_expense_breakdown()?,
        monthly_income: aggregator.monthly_income_breakdown()?,
    };

    if json {
        return print_json(&report);
    }

    let currency = &settings.currency_symbol;
    print!("{}", format_summary(report.summary.as_ref(), currency));
    println!();
    print!(
        "{}",
        format_monthly_breakdown("Monthly Expenses", &report.monthly_expenses, currency)
    );
    println!();
    print!(
        "{}",
        format_monthly_breakdown("Monthly Income", &report.monthly_income, currency)
    );

    Ok(())
}

/// Handle `analytics`
pub fn handle_analytics_command(
    storage: &Storage,
    settings: &Settings,
    json: bool,
) -> TrackerResult<()> {
    let aggregator = Aggregator::new(storage);
    let expenses = ExpenseService::new(storage).list()?;
    let report = AnalyticsReport {
        monthly_expenses: aggregator.monthly_expense_breakdown()?,
        categories: CategoryDistribution::from_expenses(&expenses),
    };

    if json {
        return print_json(&report);
    }

    let currency = &settings.currency_symbol;
    print!(
        "{}",
        format_monthly_breakdown("Monthly Spending", &report.monthly_expenses, currency)
    );
    println!();
    print!("{}", report.categories.format_terminal(currency));
    println!();
    print!(
        "{}",
        format_category_frequency(aggregator.summary_stats()?.as_ref())
    );

    Ok(())
}

/// Handle `trend`
pub fn handle_trend_command(storage: &Storage, settings: &Settings, json: bool) -> TrackerResult<()> {
    let aggregator = Aggregator::new(storage);
    let trend = MonthlyTrend::from_breakdowns(
        &aggregator.monthly_expense_breakdown()?,
        &aggregator.monthly_income_breakdown()?,
    );

    if json {
        return print_json(&trend);
    }

    print!("{}", trend.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Handle `month`
pub fn handle_month_command(
    storage: &Storage,
    settings: &Settings,
    month: Option<&str>,
    json: bool,
) -> TrackerResult<()> {
    let month = match month {
        Some(text) => Month::parse(text)
            .map_err(|e| TrackerError::Coercion(format!("'{}': {}", text.trim(), e)))?,
        None => Month::current(),
    };

    let spending = Aggregator::new(storage).monthly_spending(month.year, month.month)?;

    if json {
        return print_json(&MonthReport {
            month: month.to_string(),
            spending,
        });
    }

    println!(
        "Spending for {}: {}",
        month.friendly(),
        spending.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Handle the views that have no backing feature yet
pub fn handle_placeholder_command(view: &str) {
    println!("{} are not available yet.", view);
}
