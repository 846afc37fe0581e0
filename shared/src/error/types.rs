//! Error types

use super::codes::ErrorCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (offending ids, field names)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Look up a detail entry
    pub fn detail(&self, key: &str) -> Option<&Value> {
        self.details.as_ref().and_then(|d| d.get(key))
    }

    // ==================== Convenience constructors ====================

    /// Create a product not found error
    pub fn product_not_found(id: i64) -> Self {
        Self::with_message(
            ErrorCode::ProductNotFound,
            format!("Product {} not found", id),
        )
        .with_detail("product_id", id)
    }

    /// Create a taxon not found error
    pub fn taxon_not_found(id: i64) -> Self {
        Self::with_message(ErrorCode::TaxonNotFound, format!("Taxon {} not found", id))
            .with_detail("taxon_id", id)
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_not_found_carries_id() {
        let err = AppError::product_not_found(42);
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.to_string(), "Product 42 not found");
        assert_eq!(err.detail("product_id"), Some(&Value::from(42)));
    }

    #[test]
    fn test_new_uses_default_message() {
        let err = AppError::new(ErrorCode::InvalidDateRange);
        assert_eq!(err.message, "Start date is after end date");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_with_detail_accumulates() {
        let err = AppError::new(ErrorCode::InvalidDateRange)
            .with_detail("start", "2024-02-01")
            .with_detail("end", "2024-01-01");
        assert_eq!(err.details.as_ref().map(|d| d.len()), Some(2));
    }
}
