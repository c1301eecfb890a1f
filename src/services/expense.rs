//! Expense service
//!
//! Validates and records new expenses through a [`Store`].

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money, MoneyParseError};
use crate::storage::Store;

/// Input for recording a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    pub category: String,
    pub note: Option<String>,
    /// Defaults to today on the local clock
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
}

impl CreateExpenseInput {
    pub fn new(amount: Money, category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            note: None,
            date: None,
            description: None,
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service for expense management
pub struct ExpenseService<'a, S: Store + ?Sized> {
    store: &'a S,
}

impl<'a, S: Store + ?Sized> ExpenseService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Record a new expense
    ///
    /// Validation happens before any I/O; a rejected expense leaves storage
    /// untouched.
    pub fn add_expense(&self, input: CreateExpenseInput) -> TrackerResult<Expense> {
        let date = input
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        let mut expense = Expense::new(input.amount, input.category.trim(), date);
        if let Some(note) = input.note {
            expense.note = note;
        }
        if let Some(description) = input.description {
            expense.description = description;
        }

        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let mut expenses = self.store.load_expenses()?;
        expenses.push(expense.clone());
        self.store.save_expenses(&expenses)?;

        tracing::info!(
            amount = %input.amount,
            category = %expense.category,
            date = %date,
            "expense recorded"
        );

        Ok(expense)
    }

    /// All expenses in insertion order
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.store.load_expenses()
    }

    pub fn count(&self) -> TrackerResult<usize> {
        Ok(self.store.load_expenses()?.len())
    }
}

/// Coerce user text into an expense amount
pub fn parse_amount(text: &str) -> TrackerResult<Money> {
    Money::parse(text).map_err(|e| match e {
        MoneyParseError::TooLarge(_) => TrackerError::Coercion(format!(
            "'{}' exceeds the largest accepted amount",
            text.trim()
        )),
        MoneyParseError::InvalidFormat(_) => {
            TrackerError::Coercion(format!("'{}' is not a valid amount", text.trim()))
        }
    })
}

/// Coerce user text ("YYYY-MM-DD") into a date
pub fn parse_date(text: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Coercion(format!(
            "'{}' is not a valid date (expected YYYY-MM-DD)",
            text.trim()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TrackerPaths;
    use crate::storage::{MemoryStore, Storage};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (temp_dir, Storage::new(paths))
    }

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_add_then_load_returns_record_last() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add_expense(CreateExpenseInput::new(Money::from_cents(500), "Food").date(jan(1)))
            .unwrap();
        let added = service
            .add_expense(
                CreateExpenseInput::new(Money::from_cents(10000), "Transport")
                    .note("bus")
                    .date(jan(2))
                    .description("to work"),
            )
            .unwrap();

        let loaded = storage.load_expenses().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.last(), Some(&added));
        assert_eq!(added.note, "bus");
        assert_eq!(added.description, "to work");
    }

    #[test]
    fn test_date_defaults_to_today() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        let added = service
            .add_expense(CreateExpenseInput::new(Money::from_cents(100), "Food"))
            .unwrap();

        assert_eq!(added.date(), Some(chrono::Local::now().date_naive()));
    }

    #[test]
    fn test_rejected_add_leaves_storage_untouched() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        service
            .add_expense(CreateExpenseInput::new(Money::from_cents(100), "Food").date(jan(1)))
            .unwrap();

        let err = service
            .add_expense(CreateExpenseInput::new(Money::from_cents(-500), "Food").date(jan(1)))
            .unwrap_err();

        assert!(err.is_validation());
        assert_eq!(service.count().unwrap(), 1);
    }

    #[test]
    fn test_rejected_first_add_creates_no_file() {
        let (_temp_dir, storage) = create_test_storage();
        let service = ExpenseService::new(&storage);

        let err = service
            .add_expense(CreateExpenseInput::new(Money::from_cents(100), "  ").date(jan(1)))
            .unwrap_err();

        assert!(err.is_validation());
        assert!(!storage.paths().expenses_file().exists());
    }

    #[test]
    fn test_category_is_trimmed() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        let added = service
            .add_expense(CreateExpenseInput::new(Money::from_cents(100), " Food ").date(jan(1)))
            .unwrap();

        assert_eq!(added.category, "Food");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5").unwrap(), Money::from_cents(1250));
        let err = parse_amount("twelve").unwrap_err();
        assert!(err.is_coercion());
        assert_eq!(err.to_string(), "Invalid input: 'twelve' is not a valid amount");
    }

    #[test]
    fn test_parse_amount_rejects_oversized() {
        let err = parse_amount("90000000000000000").unwrap_err();
        assert!(err.is_coercion());
        assert!(err.to_string().contains("largest accepted amount"));
        assert!(parse_amount("1000000000000").is_ok());
    }

    #[test]
    fn test_largest_amounts_still_summarize() {
        let store = MemoryStore::new();
        let service = ExpenseService::new(&store);

        for _ in 0..2 {
            let amount = parse_amount("1,000,000,000,000").unwrap();
            service
                .add_expense(CreateExpenseInput::new(amount, "Property").date(jan(1)))
                .unwrap();
        }

        let summary = crate::reports::Aggregator::new(&store)
            .summary_stats()
            .unwrap()
            .unwrap();
        assert_eq!(summary.total, Money::from_cents(200_000_000_000_000));
        assert_eq!(summary.average, Some(Money::from_cents(100_000_000_000_000)));
    }

    #[test]
    fn test_add_keeps_rows_with_invalid_utf8() {
        let (_temp_dir, storage) = create_test_storage();
        let path = storage.paths().expenses_file();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();

        let mut contents = b"Amount,Category,Note,Date,Description\n10,Food,".to_vec();
        contents.extend_from_slice(&[0xFF, 0xFE]);
        contents.extend_from_slice(b",2024-01-01,\n20,Rent,,2024-01-02,\n");
        std::fs::write(&path, contents).unwrap();

        let service = ExpenseService::new(&storage);
        assert_eq!(service.count().unwrap(), 2);

        service
            .add_expense(CreateExpenseInput::new(Money::from_cents(500), "Food").date(jan(3)))
            .unwrap();

        let loaded = storage.load_expenses().unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[0].amount(), Some(Money::from_cents(1000)));
        assert_eq!(loaded[0].category, "Food");
        assert_eq!(loaded[0].note, "\u{FFFD}\u{FFFD}");
        assert_eq!(loaded[1].category, "Rent");
        assert_eq!(loaded[2].amount(), Some(Money::from_cents(500)));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-01-02").unwrap(), jan(2));
        assert!(parse_date("02/01/2024").unwrap_err().is_coercion());
        assert!(parse_date("2024-02-30").is_err());
    }
}
