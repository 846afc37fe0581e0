//! Sales report engine
//!
//! Computes revenue, profit, units and order counts over a snapshot of
//! orders, optionally narrowed to one product or one taxon subtree, and ranks
//! products by revenue.
//!
//! # Layers
//!
//! - [`scope`]: product / taxon filters → [`Scope`]
//! - [`metrics`]: per-order metrics under a scope
//! - [`top_products`]: revenue ranking across all orders
//! - [`report`]: request → selected orders → metrics, totals, ranking

pub mod catalog;
pub mod config;
pub mod logger;
pub mod metrics;
pub mod orders;
pub mod report;
pub mod request;
pub mod scope;
pub mod top_products;

#[cfg(test)]
mod fixtures;

// Re-exports
pub use catalog::{Catalog, MemoryCatalog, RequestFilters, lookup_filters, resolve_request_scope};
pub use config::ReportConfig;
pub use metrics::{
    MetricTotals, OrderMetrics, line_item_units, order_count, profit, revenue, totals, units,
};
pub use orders::{DateBounds, select_orders};
pub use report::SalesReport;
pub use request::ReportRequest;
pub use scope::{Scope, TaxonFilter, TaxonomyMatch, in_taxonomy, resolve_scope};
pub use top_products::{ProductSales, TopProductRow, accumulate_product_sales, top_products};
