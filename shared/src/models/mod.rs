//! Data models
//!
//! Read-only snapshots handed to the report engine by the order-management
//! system. All IDs are `i64`.

pub mod order;
pub mod product;
pub mod taxon;

// Re-exports
pub use order::*;
pub use product::*;
pub use taxon::*;
