mod aggregate;
mod dataset;
mod errors;
mod sales_record;

pub use aggregate::{ProductAggregate, ProductTotals, ProductValue};
pub use dataset::Dataset;
pub use errors::{AnalysisError, RowError};
pub use sales_record::{SalesRecord, SalesRow};

pub const COLUMN_PRODUCT: &str = "Product";
pub const COLUMN_PRICE_EACH: &str = "Price Each";
pub const COLUMN_QUANTITY_ORDERED: &str = "Quantity Ordered";

pub const REQUIRED_COLUMNS: [&str; 3] = [COLUMN_PRODUCT, COLUMN_PRICE_EACH, COLUMN_QUANTITY_ORDERED];
