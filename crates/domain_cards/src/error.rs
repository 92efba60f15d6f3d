//! Cards domain errors
//!
//! This module defines the error taxonomy for the cards domain: data that
//! fails boundary validation, and failures reported by the backing store.
//! "Not found" is not an error here; the store ports signal it with an
//! `Option` sentinel so callers can keep it distinct from an empty list.

use thiserror::Error;

/// Errors that can occur in the cards domain
#[derive(Debug, Error)]
pub enum CardsError {
    /// Data shaped unexpectedly at a trust boundary; unrecoverable
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backing store failed (connection, query); unrecoverable here
    #[error("Store error: {0}")]
    Store(String),
}

impl CardsError {
    /// Creates a Validation error with a message
    pub fn validation(message: impl Into<String>) -> Self {
        CardsError::Validation(message.into())
    }

    /// Creates a Validation error from a list of validation errors
    pub fn validation_failed(errors: Vec<String>) -> Self {
        CardsError::Validation(errors.join("; "))
    }

    /// Creates a Store error with a message
    pub fn store(message: impl Into<String>) -> Self {
        CardsError::Store(message.into())
    }

    /// Checks if this error came from boundary validation
    pub fn is_validation(&self) -> bool {
        matches!(self, CardsError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_joins_messages() {
        let err = CardsError::validation_failed(vec![
            "currency must be a 3-letter code".to_string(),
            "company name is required".to_string(),
        ]);
        let text = err.to_string();
        assert!(text.contains("currency"));
        assert!(text.contains("; "));
        assert!(err.is_validation());
    }
}
