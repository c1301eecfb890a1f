//! Income repository
//!
//! Handles persistence of monthly income to `income.csv`.

use std::path::PathBuf;

use crate::error::TrackerError;
use crate::models::{Income, Money};

use super::file_io::{read_csv, write_csv_atomic, CsvRecord};

impl CsvRecord for Income {
    const HEADERS: &'static [&'static str] = &["Month", "Income"];
}

/// Repository for monthly income
#[derive(Debug, Clone)]
pub struct IncomeRepository {
    path: PathBuf,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load all income rows in file order
    pub fn load(&self) -> Result<Vec<Income>, TrackerError> {
        read_csv(&self.path)
    }

    /// Overwrite the file with `income`
    pub fn save(&self, income: &[Income]) -> Result<(), TrackerError> {
        write_csv_atomic(&self.path, income)
    }
}

/// Insert or overwrite the income for `month` in `rows`
///
/// Every row whose month matches is updated in place, keeping its position.
/// Returns `true` if an existing row was overwritten.
pub fn upsert_income(rows: &mut Vec<Income>, month: &str, amount: Money) -> bool {
    let mut replaced = false;
    for row in rows.iter_mut().filter(|row| row.month == month) {
        row.set_amount(amount);
        replaced = true;
    }

    if !replaced {
        rows.push(Income::new(month, amount));
    }

    replaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.csv"));
        assert!(repo.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.csv"));

        let rows = vec![
            Income::new("2025-01", Money::from_cents(500000)),
            Income::new("2025-02", Money::from_cents(550000)),
        ];
        repo.save(&rows).unwrap();

        assert_eq!(repo.load().unwrap(), rows);
        assert_eq!(
            fs::read_to_string(repo.path()).unwrap(),
            "Month,Income\n2025-01,5000.00\n2025-02,5500.00\n"
        );
    }

    #[test]
    fn test_upsert_appends_new_month() {
        let mut rows = vec![Income::new("2025-01", Money::from_cents(100))];

        let replaced = upsert_income(&mut rows, "2025-02", Money::from_cents(200));

        assert!(!replaced);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].month, "2025-02");
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let mut rows = vec![
            Income::new("2025-01", Money::from_cents(100)),
            Income::new("2025-02", Money::from_cents(200)),
        ];

        let replaced = upsert_income(&mut rows, "2025-01", Money::from_cents(300));

        assert!(replaced);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].month, "2025-01");
        assert_eq!(rows[0].amount(), Some(Money::from_cents(300)));
    }
}
