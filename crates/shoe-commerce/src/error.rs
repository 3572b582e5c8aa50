//! Listing error types.

use thiserror::Error;

/// Errors raised while validating or interpreting a shoe listing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListingError {
    /// Malformed input: bad price, unparseable date, bad slug.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ListingError {
    /// Shorthand for building an `InvalidInput` error.
    pub fn invalid(message: impl Into<String>) -> Self {
        ListingError::InvalidInput(message.into())
    }
}

impl From<chrono::ParseError> for ListingError {
    fn from(e: chrono::ParseError) -> Self {
        ListingError::InvalidInput(format!("unparseable date: {}", e))
    }
}

impl From<serde_json::Error> for ListingError {
    fn from(e: serde_json::Error) -> Self {
        ListingError::InvalidInput(format!("malformed listing: {}", e))
    }
}

/// Result alias for listing operations.
pub type Result<T> = std::result::Result<T, ListingError>;
