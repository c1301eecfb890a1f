use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use expense_tracker::cli::{
    handle_add_command, handle_analytics_command, handle_dashboard_command,
    handle_income_command, handle_list_command, handle_month_command, handle_placeholder_command,
    handle_trend_command, AddArgs, IncomeArgs,
};
use expense_tracker::config::paths::{TrackerPaths, DATA_DIR_ENV};
use expense_tracker::config::settings::Settings;
use expense_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Personal expense and income tracker",
    long_about = "Record expenses and monthly income in local CSV files and \
                  review spending through summaries, monthly breakdowns and \
                  category distributions."
)]
struct Cli {
    /// Directory holding config.json and the data/ folder
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Print report output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add(AddArgs),

    /// Set the income for a month (replaces any existing value)
    Income(IncomeArgs),

    /// List all transactions
    #[command(alias = "ls")]
    List,

    /// Summary statistics with monthly overviews
    Dashboard,

    /// Monthly spending and category breakdowns
    Analytics,

    /// Month-over-month income vs expenses
    Trend,

    /// Spending for a single month
    Month {
        /// Month to report (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Savings goals
    Savings,

    /// Budgets
    Budgets,

    /// Show current configuration and paths
    Config {
        /// Write the settings file with the current values
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let paths = match cli.data_dir {
        Some(dir) => TrackerPaths::with_base_dir(dir),
        None => TrackerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    let storage = Storage::new(paths.clone());

    tracing::debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::Income(args)) => handle_income_command(&storage, &settings, args)?,
        Some(Commands::List) => handle_list_command(&storage, &settings, cli.json)?,
        Some(Commands::Dashboard) => handle_dashboard_command(&storage, &settings, cli.json)?,
        Some(Commands::Analytics) => handle_analytics_command(&storage, &settings, cli.json)?,
        Some(Commands::Trend) => handle_trend_command(&storage, &settings, cli.json)?,
        Some(Commands::Month { month }) => {
            handle_month_command(&storage, &settings, month.as_deref(), cli.json)?
        }
        Some(Commands::Savings) => handle_placeholder_command("Savings goals"),
        Some(Commands::Budgets) => handle_placeholder_command("Budgets"),
        Some(Commands::Config { save }) => {
            if save {
                settings.save(&paths)?;
                println!("Settings written to {}", paths.settings_file().display());
            }
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Expenses file:   {}", paths.expenses_file().display());
            println!("Income file:     {}", paths.income_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("Expense Tracker - personal expenses and income");
            println!();
            println!("Run 'expense --help' for usage information.");
            println!("Run 'expense dashboard' for a spending summary.");
        }
    }

    Ok(())
}
