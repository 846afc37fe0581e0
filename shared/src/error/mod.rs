//! Unified error system for the report engine
//!
//! - [`ErrorCode`]: Standardized error codes
//! - [`ErrorCategory`]: Classification of errors by domain
//! - [`AppError`]: Error type with code, message, and details
//!
//! # Error Code Ranges
//!
//! - 4xxx: Order errors
//! - 6xxx: Catalog errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::taxon_not_found(7);
//! assert_eq!(err.code, ErrorCode::TaxonNotFound);
//! ```

mod category;
mod codes;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
