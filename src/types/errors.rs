use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    #[error("Numeric error: Value is an empty string")]
    Empty,
    #[error("Numeric error: '{0}' is not a number")]
    InvalidFormat(String)
}
