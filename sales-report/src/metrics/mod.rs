//! Per-order sales metrics
//!
//! Revenue, profit and units are computed over the line items selected by
//! [`Scope::selects`], so the three figures of an order always describe the
//! same subset of items. Everything is zero under
//! [`Scope::GloballyExcluded`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::{LineItem, Order};

use crate::scope::Scope;

/// Line items of `order` that count under `scope`
pub fn selected_line_items<'a>(
    order: &'a Order,
    scope: &'a Scope,
) -> impl Iterator<Item = &'a LineItem> + 'a {
    order.line_items.iter().filter(move |li| scope.selects(li))
}

/// Units sold by a line item, expanding bundle variants
#[inline]
pub fn line_item_units(line_item: &LineItem) -> i64 {
    let quantity = i64::from(line_item.quantity);
    match line_item.variant.bundle_quantity {
        Some(bundle) => quantity * i64::from(bundle.get()),
        None => quantity,
    }
}

/// Order revenue under `scope`.
///
/// Unscoped reports read the order's own `item_total`. Adjustments are only
/// added when the base revenue is positive.
pub fn revenue(order: &Order, scope: &Scope) -> Decimal {
    if scope.is_excluded() {
        return Decimal::ZERO;
    }

    let base = if scope.is_unscoped() {
        order.item_total
    } else {
        selected_line_items(order, scope)
            .map(|li| li.price * Decimal::from(li.quantity))
            .sum()
    };

    if base > Decimal::ZERO {
        base + order.adjustment_total()
    } else {
        base
    }
}

/// Order profit under `scope`.
///
/// Margin is taken from the variant's list price and cost. The adjustment
/// margin (amount minus cost) is always added.
pub fn profit(order: &Order, scope: &Scope) -> Decimal {
    if scope.is_excluded() {
        return Decimal::ZERO;
    }

    let items: Decimal = selected_line_items(order, scope)
        .map(|li| li.variant.unit_margin() * Decimal::from(li.quantity))
        .sum();

    items + order.adjustment_total() - order.adjustment_cost_total()
}

/// Units sold in `order` under `scope`
pub fn units(order: &Order, scope: &Scope) -> i64 {
    if scope.is_excluded() {
        return 0;
    }
    selected_line_items(order, scope).map(line_item_units).sum()
}

/// 1 for every order in scope, 0 when the scope is globally excluded
pub fn order_count(_order: &Order, scope: &Scope) -> i64 {
    if scope.is_excluded() { 0 } else { 1 }
}

/// All four metrics of a single order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderMetrics {
    pub order_id: i64,
    pub revenue: Decimal,
    pub profit: Decimal,
    pub units: i64,
    pub orders: i64,
}

impl OrderMetrics {
    pub fn compute(order: &Order, scope: &Scope) -> Self {
        Self {
            order_id: order.id,
            revenue: revenue(order, scope),
            profit: profit(order, scope),
            units: units(order, scope),
            orders: order_count(order, scope),
        }
    }
}

/// Metrics summed over a set of orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricTotals {
    pub revenue: Decimal,
    pub profit: Decimal,
    pub units: i64,
    pub orders: i64,
}

impl MetricTotals {
    pub fn add(&mut self, metrics: &OrderMetrics) {
        self.revenue += metrics.revenue;
        self.profit += metrics.profit;
        self.units += metrics.units;
        self.orders += metrics.orders;
    }
}

impl<'a> FromIterator<&'a OrderMetrics> for MetricTotals {
    fn from_iter<I: IntoIterator<Item = &'a OrderMetrics>>(iter: I) -> Self {
        let mut totals = Self::default();
        for metrics in iter {
            totals.add(metrics);
        }
        totals
    }
}

/// Sum the per-order metrics of `orders` under `scope`
pub fn totals<'a, I>(orders: I, scope: &Scope) -> MetricTotals
where
    I: IntoIterator<Item = &'a Order>,
{
    let mut totals = MetricTotals::default();
    for order in orders {
        totals.add(&OrderMetrics::compute(order, scope));
    }
    totals
}
