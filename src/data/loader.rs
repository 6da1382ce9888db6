//! CSV Data Loader Module
//! Reads the daily usage file with Polars and decodes it into fixed-field records.

use super::record::{Category, LoadOutcome, UsageRecord, UsageTable};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use thiserror::Error;
use tracing::{debug, error, warn};

/// Header name of the date column.
pub const DATE_COLUMN: &str = "date";

/// Only `NotFound` and `Io` leave `DataLoader::load`; the rest degrade to `Empty`.
#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("The file {} was not found", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read file: {0}")]
    Io(#[from] io::Error),
    #[error("File is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}

/// Loads one usage file per call; holds nothing between calls.
pub struct DataLoader {
    file_path: PathBuf,
}

impl DataLoader {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    /// Get file path.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Load the CSV file into a usage table.
    ///
    /// A missing or unreadable file is an error. An empty file, a header
    /// without rows, or content that cannot be parsed yields `LoadOutcome::Empty`.
    pub fn load(&self) -> Result<LoadOutcome, LoaderError> {
        let bytes = self.read_file()?;

        match Self::parse_bytes(bytes) {
            Ok(LoadOutcome::Loaded(table)) => {
                debug!(
                    "Loaded {} rows from {}",
                    table.len(),
                    self.file_path.display()
                );
                Ok(LoadOutcome::Loaded(table))
            }
            Ok(LoadOutcome::Empty) => {
                warn!("The file is empty or not readable.");
                Ok(LoadOutcome::Empty)
            }
            Err(e) => {
                error!("The file is empty or not readable: {}", e);
                Ok(LoadOutcome::Empty)
            }
        }
    }

    /// Read the whole file; the handle is dropped before parsing starts.
    fn read_file(&self) -> Result<Vec<u8>, LoaderError> {
        let mut file = match File::open(&self.file_path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                error!("The file {} was not found.", self.file_path.display());
                return Err(LoaderError::NotFound(self.file_path.clone()));
            }
            Err(e) => {
                error!("Could not read {}: {}", self.file_path.display(), e);
                return Err(e.into());
            }
        };

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Parse raw file content into an outcome without logging the advisory.
    fn parse_bytes(bytes: Vec<u8>) -> Result<LoadOutcome, LoaderError> {
        let text = String::from_utf8(bytes)?;
        let screened = Self::screen_rows(&text);
        if screened.is_empty() {
            return Ok(LoadOutcome::Empty);
        }

        // Everything is read as text; numeric casting happens per column below
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(screened))
            .finish()?;

        Self::check_columns(&df)?;

        if df.height() == 0 {
            return Ok(LoadOutcome::Empty);
        }

        Ok(LoadOutcome::Loaded(Self::decode_records(&df)?))
    }

    /// Keep the header and every data row whose field count matches it.
    ///
    /// Blank lines and rows with only empty cells are dropped silently;
    /// rows with the wrong field count are dropped with a warning.
    fn screen_rows(text: &str) -> String {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty());

        let Some((_, header)) = lines.next() else {
            return String::new();
        };
        let expected = Self::field_count(header);

        let mut kept = String::with_capacity(text.len());
        kept.push_str(header);
        kept.push('\n');

        for (idx, line) in lines {
            let found = Self::field_count(line);
            if found != expected {
                warn!(
                    "Skipping line {}: expected {} fields, found {}",
                    idx + 1,
                    expected,
                    found
                );
                continue;
            }
            if line.split(',').all(|field| field.trim().is_empty()) {
                continue;
            }
            kept.push_str(line);
            kept.push('\n');
        }

        kept
    }

    /// Number of comma-separated fields, ignoring commas inside double quotes.
    fn field_count(line: &str) -> usize {
        let mut in_quotes = false;
        let separators = line
            .chars()
            .filter(|&c| {
                if c == '"' {
                    in_quotes = !in_quotes;
                }
                c == ',' && !in_quotes
            })
            .count();
        separators + 1
    }

    /// Every category plus `date` must be present; order is free.
    fn check_columns(df: &DataFrame) -> Result<(), LoaderError> {
        let missing: Vec<String> = std::iter::once(DATE_COLUMN)
            .chain(Category::ALL.iter().map(|c| c.column_name()))
            .filter(|name| df.column(name).is_err())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            for name in df.get_column_names() {
                if name.as_str() != DATE_COLUMN
                    && Category::from_column_name(name.as_str()).is_none()
                {
                    debug!("Ignoring extra column '{}'", name);
                }
            }
            Ok(())
        } else {
            Err(LoaderError::MissingColumns(missing))
        }
    }

    /// Trim surrounding whitespace from every cell of a text column.
    fn trimmed(df: &DataFrame, name: &str) -> Result<StringChunked, LoaderError> {
        let ca = df.column(name)?.str()?;
        Ok(ca.into_iter().map(|v| v.map(str::trim)).collect())
    }

    /// Decode each row into a `UsageRecord`.
    ///
    /// Category cells are cast non-strictly, so blank or malformed cells become `None`.
    fn decode_records(df: &DataFrame) -> Result<UsageTable, LoaderError> {
        let dates = Self::trimmed(df, DATE_COLUMN)?;
        let mut records: Vec<UsageRecord> = dates
            .into_iter()
            .map(|date| UsageRecord {
                date: date.unwrap_or_default().to_string(),
                ..Default::default()
            })
            .collect();

        for category in Category::ALL {
            let values = Self::trimmed(df, category.column_name())?
                .into_series()
                .cast(&DataType::Float64)?;
            let values = values.f64()?;

            for (record, value) in records.iter_mut().zip(values.into_iter()) {
                record.set_usage(category, value);
            }
        }

        Ok(UsageTable::new(records))
    }
}
