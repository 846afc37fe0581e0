//! Product Model

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Direct taxon memberships (junction table)
    #[serde(default)]
    pub taxon_ids: Vec<i64>,
}

/// Product variant (sellable SKU)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Variant {
    pub id: i64,
    pub product_id: i64,
    /// List price
    pub price: Decimal,
    /// Purchase cost, `None` when never recorded
    pub cost_price: Option<Decimal>,
    /// Units per bundle, only set on bundle variants
    #[serde(default)]
    pub bundle_quantity: Option<NonZeroU32>,
}

impl Variant {
    /// Cost price, treating a missing value as zero
    pub fn cost_price_or_zero(&self) -> Decimal {
        self.cost_price.unwrap_or(Decimal::ZERO)
    }

    /// List price minus cost
    pub fn unit_margin(&self) -> Decimal {
        self.price - self.cost_price_or_zero()
    }
}
