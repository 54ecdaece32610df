mod errors;
mod numeric;

pub use errors::NumericError;
pub use numeric::{parse_price, parse_quantity};

pub type ProductName = String;
pub type Quantity = rust_decimal::Decimal;
