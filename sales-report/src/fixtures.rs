//! Builders for unit tests

use std::num::NonZeroU32;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use shared::models::{Adjustment, LineItem, Order, OrderState, Product, Taxon, Variant};

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn product(id: i64, name: &str, taxon_ids: &[i64]) -> Product {
    Product {
        id,
        name: name.to_string(),
        taxon_ids: taxon_ids.to_vec(),
    }
}

pub fn taxon(id: i64, name: &str, parent_id: Option<i64>) -> Taxon {
    Taxon {
        id,
        name: name.to_string(),
        parent_id,
    }
}

pub fn variant(product_id: i64, price: &str, cost_price: Option<&str>) -> Variant {
    Variant {
        id: product_id * 100,
        product_id,
        price: dec(price),
        cost_price: cost_price.map(dec),
        bundle_quantity: None,
    }
}

pub fn bundle_variant(product_id: i64, price: &str, bundle_quantity: u32) -> Variant {
    Variant {
        bundle_quantity: NonZeroU32::new(bundle_quantity),
        ..variant(product_id, price, None)
    }
}

/// Line item for `product` sold at the variant's list price
pub fn item(id: i64, product: &Product, quantity: i32, price: &str) -> LineItem {
    LineItem {
        id,
        product: Some(product.clone()),
        variant: variant(product.id, price, None),
        quantity,
        price: dec(price),
    }
}

pub fn item_with_variant(
    id: i64,
    product: Option<&Product>,
    variant: Variant,
    quantity: i32,
    price: &str,
) -> LineItem {
    LineItem {
        id,
        product: product.cloned(),
        variant,
        quantity,
        price: dec(price),
    }
}

pub fn adjustment(id: i64, amount: &str, cost: &str) -> Adjustment {
    Adjustment {
        id,
        label: format!("adjustment-{}", id),
        amount: dec(amount),
        cost: dec(cost),
    }
}

/// Completed order whose `item_total` matches its line items
pub fn order(id: i64, line_items: Vec<LineItem>, adjustments: Vec<Adjustment>) -> Order {
    let item_total = line_items
        .iter()
        .map(|li| li.price * Decimal::from(li.quantity))
        .sum();
    Order {
        id,
        number: format!("R{:09}", id),
        state: OrderState::Complete,
        created_at: at(2024, 3, 1, 10),
        completed_at: Some(at(2024, 3, 1, 11)),
        item_total,
        line_items,
        adjustments,
    }
}
