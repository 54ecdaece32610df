use csv::{ReaderBuilder, StringRecord, Trim};
use std::io::Read;
use tracing::{debug, warn};

use crate::models::errors::AnalysisError;
use crate::models::sales_record::{SalesRecord, SalesRow};
use crate::models::REQUIRED_COLUMNS;

/// The valid sales rows of one upload.
///
/// Built once by coercing every record and dropping the ones that fail; immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    rows: Vec<SalesRow>,
    dropped: usize
}

impl Dataset {
    /// Parses CSV text, tolerating a leading UTF-8 byte order mark.
    pub fn from_csv_str(text: &str) -> Result<Self, AnalysisError> {
        Self::from_reader(text.trim_start_matches('\u{feff}').as_bytes())
    }

    /// Reads, coerces and filters every record of a CSV stream.
    ///
    /// # Errors
    /// Returns `AnalysisError::MissingColumns` when the header lacks any of the required
    /// columns, `AnalysisError::DuplicateColumns` when one of them appears more than once,
    /// or `AnalysisError::Csv` when the header itself cannot be read. Row-level problems
    /// never fail the load; those rows are dropped and counted.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, AnalysisError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        check_required_columns(&headers)?;

        let mut rows = Vec::new();
        let mut dropped = 0;

        for result in reader.records() {
            let record = match result {
                Ok(record) => record,
                Err(error) => {
                    warn!("CSV record error: {error}");
                    dropped += 1;
                    continue;
                }
            };

            let line = record.position().map(|position| position.line()).unwrap_or_default();

            let raw = match record.deserialize::<SalesRecord>(Some(&headers)) {
                Ok(raw) => raw,
                Err(error) => {
                    debug!("Dropping row [{line}]: {error}");
                    dropped += 1;
                    continue;
                }
            };

            match SalesRow::from_record(raw, line) {
                Ok(row) => rows.push(row),
                Err(error) => {
                    debug!("Dropping row: {error}");
                    dropped += 1;
                }
            }
        }

        Ok(Self { rows, dropped })
    }

    pub fn from_rows(rows: Vec<SalesRow>) -> Self {
        Self { rows, dropped: 0 }
    }

    pub fn rows(&self) -> &[SalesRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of records removed by coercion and filtering.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

fn check_required_columns(headers: &StringRecord) -> Result<(), AnalysisError> {
    let missing: Vec<String> = REQUIRED_COLUMNS.iter()
        .filter(|column| !headers.iter().any(|header| header == **column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(AnalysisError::MissingColumns(missing));
    }

    // Row deserialization cannot tell which copy of a repeated column to use.
    let duplicated: Vec<String> = REQUIRED_COLUMNS.iter()
        .filter(|column| headers.iter().filter(|header| header == *column).count() > 1)
        .map(|column| column.to_string())
        .collect();

    if duplicated.is_empty() {
        Ok(())
    } else {
        Err(AnalysisError::DuplicateColumns(duplicated))
    }
}
