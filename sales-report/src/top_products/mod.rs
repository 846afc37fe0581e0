//! Top products by revenue
//!
//! Per-product sales are accumulated from the raw line items of every order:
//! `quantity * price` for revenue and plain `quantity` for units. Report
//! scope and bundle multipliers do not apply here, unlike the per-order
//! metrics in [`crate::metrics`].

use std::collections::HashMap;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::Order;

/// Decimal places shown for revenue
const DECIMAL_PLACES: u32 = 2;

/// Running sales total for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSales {
    pub product_id: i64,
    pub name: String,
    pub revenue: Decimal,
    pub units: i64,
}

/// One row of the top products report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopProductRow {
    pub name: String,
    pub units: i64,
    pub revenue: Decimal,
}

impl TopProductRow {
    /// Revenue as `$0.00`
    pub fn formatted_revenue(&self) -> String {
        let rounded = self
            .revenue
            .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
        format!("${:.2}", rounded)
    }
}

impl From<ProductSales> for TopProductRow {
    fn from(sales: ProductSales) -> Self {
        Self {
            name: sales.name,
            units: sales.units,
            revenue: sales.revenue,
        }
    }
}

/// Accumulate sales per product, in first-seen order.
///
/// Line items without a product are skipped. The product name is taken from
/// the first line item seen for that product.
pub fn accumulate_product_sales<'a, I>(orders: I) -> Vec<ProductSales>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut index: HashMap<i64, usize> = HashMap::new();
    let mut sales: Vec<ProductSales> = Vec::new();

    for order in orders {
        for li in &order.line_items {
            let Some(product) = li.product.as_ref() else {
                continue;
            };
            let slot = *index.entry(product.id).or_insert_with(|| {
                sales.push(ProductSales {
                    product_id: product.id,
                    name: product.name.clone(),
                    revenue: Decimal::ZERO,
                    units: 0,
                });
                sales.len() - 1
            });
            let entry = &mut sales[slot];
            entry.revenue += li.price * Decimal::from(li.quantity);
            entry.units += i64::from(li.quantity);
        }
    }

    sales
}

/// Rank products by revenue, highest first.
///
/// Returns up to `limit + 1` rows: the report has always shown one row more
/// than the requested limit and consumers rely on that row count. Ties keep
/// first-seen order.
pub fn top_products<'a, I>(orders: I, limit: usize) -> Vec<TopProductRow>
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut sales = accumulate_product_sales(orders);
    sales.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    let rows = limit.saturating_add(1);
    tracing::debug!(
        products = sales.len(),
        limit,
        rows = rows.min(sales.len()),
        "Ranked products by revenue"
    );

    sales
        .into_iter()
        .take(rows)
        .map(TopProductRow::from)
        .collect()
}
