//! CSV file I/O with atomic writes
//!
//! Provides file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TrackerError;

/// A row type stored in a CSV file with a fixed header
pub trait CsvRecord: Serialize + DeserializeOwned {
    /// Column names, in file order
    const HEADERS: &'static [&'static str];
}

/// Read all rows from a CSV file, returning an empty collection if the file doesn't exist
///
/// Fields are decoded lossily, so bytes that are not valid UTF-8 become
/// U+FFFD instead of costing the row. Rows that still fail to deserialize
/// into `T` are skipped with a warning rather than failing the whole load.
pub fn read_csv<T, P>(path: P) -> Result<Vec<T>, TrackerError>
where
    T: CsvRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "no file yet, returning empty collection");
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers = lossy_record(reader.byte_headers()?, true);

    let mut rows = Vec::new();
    let mut record = csv::ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        match lossy_record(&record, false).deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    line = record.position().map(|p| p.line()),
                    error = %e,
                    "skipping unreadable row"
                );
            }
        }
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded");
    Ok(rows)
}

fn lossy_record(record: &csv::ByteRecord, trim: bool) -> csv::StringRecord {
    record
        .iter()
        .map(|field| {
            let text = String::from_utf8_lossy(field);
            if trim {
                text.trim().to_string()
            } else {
                text.into_owned()
            }
        })
        .collect()
}

/// Write rows to a CSV file atomically (write to temp, then rename)
///
/// The header row is always written, so an empty collection still produces
/// a well-formed file.
pub fn write_csv_atomic<T, P>(path: P, rows: &[T]) -> Result<(), TrackerError>
where
    T: CsvRecord,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("csv.tmp");

    let result = write_rows(&temp_path, rows).and_then(|()| {
        fs::rename(&temp_path, path)
            .map_err(|e| TrackerError::Storage(format!("Failed to rename temp file: {}", e)))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    } else {
        tracing::debug!(path = %path.display(), rows = rows.len(), "saved");
    }

    result
}

fn write_rows<T: CsvRecord>(temp_path: &Path, rows: &[T]) -> Result<(), TrackerError> {
    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(T::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }

    let buffered = writer
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    let file = buffered
        .into_inner()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    file.sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    Ok(())
}
