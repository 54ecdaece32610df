use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::errors::RowError;
use crate::models::{COLUMN_PRICE_EACH, COLUMN_PRODUCT, COLUMN_QUANTITY_ORDERED};
use crate::types::{parse_price, parse_quantity, ProductName, Quantity};

/// Represents a single row from the uploaded CSV file, before coercion.
///
/// Every field is optional text because uploads routinely contain blank cells,
/// repeated header lines and other noise. Columns other than these three are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Product")]
    pub product: Option<String>,
    #[serde(rename = "Price Each")]
    pub price_each: Option<String>,
    #[serde(rename = "Quantity Ordered")]
    pub quantity_ordered: Option<String>
}

/// A sales row whose numeric fields were coerced successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRow {
    pub product: ProductName,
    pub price_each: Decimal,
    pub quantity_ordered: Quantity
}

impl SalesRow {
    /// Coerces a raw record. `line` is the 1-based line in the source file, used for diagnostics.
    pub fn from_record(record: SalesRecord, line: u64) -> Result<Self, RowError> {
        let product = record.product
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .ok_or_else(|| RowError::missing_value(line, COLUMN_PRODUCT))?;

        let Some(price_each) = record.price_each else {
            return Err(RowError::missing_value(line, COLUMN_PRICE_EACH))
        };

        let Some(quantity_ordered) = record.quantity_ordered else {
            return Err(RowError::missing_value(line, COLUMN_QUANTITY_ORDERED))
        };

        let price_each = parse_price(&price_each)
            .map_err(|error| RowError::invalid_price(line, error))?;

        let quantity_ordered = parse_quantity(&quantity_ordered)
            .map_err(|error| RowError::invalid_quantity(line, error))?;

        Ok(Self { product, price_each, quantity_ordered })
    }
}
