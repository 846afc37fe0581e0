//! Unified error codes for the report engine
//!
//! Error codes are organized by category:
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors (products, taxons)

use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ErrorCategory;

/// Unified error code enum
///
/// Represented as u16 values so callers in other languages can match on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 4xxx: Order ====================
    /// Invalid order date range
    InvalidDateRange = 4101,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Taxon not found
    TaxonNotFound = 6101,
    /// Taxon tree contains a cycle
    TaxonCycle = 6102,
}

/// Raised when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidDateRange => "Start date is after end date",

            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::TaxonNotFound => "Taxon not found",
            ErrorCode::TaxonCycle => "Taxon tree contains a cycle",
        }
    }

    /// Category of this code
    pub const fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::InvalidDateRange => ErrorCategory::Order,
            ErrorCode::ProductNotFound | ErrorCode::TaxonNotFound | ErrorCode::TaxonCycle => {
                ErrorCategory::Catalog
            }
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // Order
            4101 => Ok(ErrorCode::InvalidDateRange),

            // Catalog
            6001 => Ok(ErrorCode::ProductNotFound),
            6101 => Ok(ErrorCode::TaxonNotFound),
            6102 => Ok(ErrorCode::TaxonCycle),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
