use crate::types::NumericError;
use thiserror::Error;

/// Failures that stop an analysis and are reported back to the caller.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("Duplicate required column(s): {}", .0.join(", "))]
    DuplicateColumns(Vec<String>),
    #[error("No valid sales rows remain after dropping invalid rows")]
    EmptyResult,
    #[error("Numeric overflow while aggregating {metric} for product [{product}]")]
    Overflow {
        product: String,
        metric: &'static str
    },
    #[error("Unable to read CSV header: {0}")]
    Csv(#[from] csv::Error)
}

/// Reasons a single row is dropped during coercion. These never leave the dataset loader.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("Row [{line}] is missing a value for [{column}]")]
    MissingValue {
        line: u64,
        column: &'static str
    },
    #[error("Row [{line}] has an invalid [Price Each]: {source}")]
    InvalidPrice {
        line: u64,
        source: NumericError
    },
    #[error("Row [{line}] has an invalid [Quantity Ordered]: {source}")]
    InvalidQuantity {
        line: u64,
        source: NumericError
    }
}

impl RowError {
    pub fn missing_value(line: u64, column: &'static str) -> Self {
        Self::MissingValue { line, column }
    }

    pub fn invalid_price(line: u64, source: NumericError) -> Self {
        Self::InvalidPrice { line, source }
    }

    pub fn invalid_quantity(line: u64, source: NumericError) -> Self {
        Self::InvalidQuantity { line, source }
    }
}

impl AnalysisError {
    pub fn revenue_overflow(product: &str) -> Self {
        Self::Overflow { product: product.to_string(), metric: "revenue" }
    }

    pub fn quantity_overflow(product: &str) -> Self {
        Self::Overflow { product: product.to_string(), metric: "quantity" }
    }
}
