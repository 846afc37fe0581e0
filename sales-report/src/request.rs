//! Report request
//!
//! Immutable description of a report run, built once by the caller from
//! already parsed values.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::models::OrderState;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// First day of the range (inclusive); earliest completion day when unset
    pub created_after: Option<NaiveDate>,
    /// Last day of the range (inclusive); latest completion day when unset
    pub created_before: Option<NaiveDate>,
    /// Order state to report on; config default when unset
    pub state: Option<OrderState>,
    pub product_id: Option<i64>,
    pub taxon_id: Option<i64>,
    /// Top products limit; config default when unset
    pub limit: Option<usize>,
}

impl ReportRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date_range(mut self, after: Option<NaiveDate>, before: Option<NaiveDate>) -> Self {
        self.created_after = after;
        self.created_before = before;
        self
    }

    pub fn with_state(mut self, state: OrderState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_product(mut self, product_id: i64) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn with_taxon(mut self, taxon_id: i64) -> Self {
        self.taxon_id = Some(taxon_id);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn has_filters(&self) -> bool {
        self.product_id.is_some() || self.taxon_id.is_some()
    }
}
