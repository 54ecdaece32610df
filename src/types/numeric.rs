use crate::types::errors::NumericError;
use crate::types::Quantity;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Coerces a `Price Each` cell into a decimal.
///
/// Accepts plain decimal text (`11.95`, `-3`) and scientific notation (`1.2e3`).
/// Digit-group underscores (`1_000`) are not numbers here.
pub fn parse_price(value: &str) -> Result<Decimal, NumericError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(NumericError::Empty);
    }

    if value.contains('_') {
        return Err(NumericError::InvalidFormat(value.to_string()));
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .map_err(|_| NumericError::InvalidFormat(value.to_string()))
}

/// Coerces a `Quantity Ordered` cell. Any numeric text is kept, fractional quantities included.
pub fn parse_quantity(value: &str) -> Result<Quantity, NumericError> {
    parse_price(value)
}
