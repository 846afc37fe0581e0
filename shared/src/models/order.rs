//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::product::{Product, Variant};

/// Order checkout state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    Cart,
    Address,
    Payment,
    #[default]
    Complete,
    Canceled,
    Returned,
    AwaitingReturn,
}

impl OrderState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cart => "cart",
            Self::Address => "address",
            Self::Payment => "payment",
            Self::Complete => "complete",
            Self::Canceled => "canceled",
            Self::Returned => "returned",
            Self::AwaitingReturn => "awaiting_return",
        }
    }
}

impl std::str::FromStr for OrderState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cart" => Ok(Self::Cart),
            "address" => Ok(Self::Address),
            "payment" => Ok(Self::Payment),
            "complete" => Ok(Self::Complete),
            "canceled" | "cancelled" => Ok(Self::Canceled),
            "returned" => Ok(Self::Returned),
            "awaiting_return" => Ok(Self::AwaitingReturn),
            other => Err(format!("unknown order state: {}", other)),
        }
    }
}

impl std::fmt::Display for OrderState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order line item
///
/// `product` is a snapshot of the catalog entry at order time and may be
/// missing when the product was removed from the catalog afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: i64,
    pub product: Option<Product>,
    pub variant: Variant,
    pub quantity: i32,
    /// Unit sale price at order time
    pub price: Decimal,
}

impl LineItem {
    /// Product id, if the product reference survived
    pub fn product_id(&self) -> Option<i64> {
        self.product.as_ref().map(|p| p.id)
    }
}

/// Order-level adjustment (promotion, tax, shipping)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub id: i64,
    pub label: String,
    /// Signed amount charged to the customer
    pub amount: Decimal,
    /// Cost basis of the adjustment
    #[serde(default)]
    pub cost: Decimal,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub number: String,
    pub state: OrderState,
    pub created_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    /// Sum of line item totals before adjustments
    pub item_total: Decimal,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

impl Order {
    /// Sum of all adjustment amounts
    pub fn adjustment_total(&self) -> Decimal {
        self.adjustments.iter().map(|a| a.amount).sum()
    }

    /// Sum of all adjustment cost bases
    pub fn adjustment_cost_total(&self) -> Decimal {
        self.adjustments.iter().map(|a| a.cost).sum()
    }
}
