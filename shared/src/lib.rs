//! Shared types for the sales report engine
//!
//! Order, product and taxon models plus the error types used across crates.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCode};
pub use serde::{Deserialize, Serialize};
