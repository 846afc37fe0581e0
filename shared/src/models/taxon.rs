//! Taxon Model (product category tree node)

use serde::{Deserialize, Serialize};

/// Taxon entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Taxon {
    pub id: i64,
    pub name: String,
    /// Parent taxon, `None` for a taxonomy root
    pub parent_id: Option<i64>,
}
