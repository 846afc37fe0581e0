//! Sales report
//!
//! Ties a [`ReportRequest`] to a catalog and an order snapshot: resolves the
//! scope and date range, selects the orders, then computes per-order metrics,
//! totals and the top products ranking.

use shared::error::AppResult;
use shared::models::{Order, OrderState};

use crate::catalog::{Catalog, lookup_filters};
use crate::config::ReportConfig;
use crate::metrics::{MetricTotals, OrderMetrics};
use crate::orders::{DateBounds, select_orders};
use crate::request::ReportRequest;
use crate::scope::Scope;
use crate::top_products::{TopProductRow, top_products};

#[derive(Debug, Clone)]
pub struct SalesReport<'a> {
    scope: Scope,
    product_label: Option<String>,
    taxon_label: Option<String>,
    bounds: DateBounds,
    state: OrderState,
    orders: Vec<&'a Order>,
    order_metrics: Vec<OrderMetrics>,
    totals: MetricTotals,
    top_products: Vec<TopProductRow>,
}

impl<'a> SalesReport<'a> {
    pub fn build<C: Catalog + ?Sized>(
        request: &ReportRequest,
        catalog: &C,
        orders: &'a [Order],
        config: &ReportConfig,
    ) -> AppResult<Self> {
        Self::assemble(request, catalog, orders, config).inspect_err(|err| {
            tracing::warn!(
                code = %err.code,
                category = %err.code.category(),
                "Sales report failed: {}",
                err
            );
        })
    }

    fn assemble<C: Catalog + ?Sized>(
        request: &ReportRequest,
        catalog: &C,
        orders: &'a [Order],
        config: &ReportConfig,
    ) -> AppResult<Self> {
        let filters = lookup_filters(catalog, request, config.taxonomy_match)?;
        let product_label = filters.product_name().map(str::to_owned);
        let taxon_label = filters.taxon_name().map(str::to_owned);
        let scope = filters.into_scope();
        let bounds = DateBounds::resolve(request, orders)?;
        let state = request.state.unwrap_or(config.order_state);
        let limit = request.limit.unwrap_or(config.top_limit);

        let selected = select_orders(orders, &bounds, state);
        let order_metrics: Vec<OrderMetrics> = selected
            .iter()
            .map(|order| OrderMetrics::compute(order, &scope))
            .collect();
        let totals: MetricTotals = order_metrics.iter().collect();
        let top_products = top_products(selected.iter().copied(), limit);

        tracing::info!(
            scope = scope.kind(),
            state = %state,
            candidates = orders.len(),
            selected = selected.len(),
            revenue = %totals.revenue,
            "Sales report built"
        );

        Ok(Self {
            scope,
            product_label,
            taxon_label,
            bounds,
            state,
            orders: selected,
            order_metrics,
            totals,
            top_products,
        })
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    /// Orders that passed state and date selection
    pub fn orders(&self) -> &[&'a Order] {
        &self.orders
    }

    /// Metrics of each selected order, in selection order
    pub fn order_metrics(&self) -> &[OrderMetrics] {
        &self.order_metrics
    }

    pub fn totals(&self) -> &MetricTotals {
        &self.totals
    }

    pub fn top_products(&self) -> &[TopProductRow] {
        &self.top_products
    }

    /// Name of the requested product filter
    ///
    /// Set whenever the request named a product, even if the taxon filter
    /// contradicts it.
    pub fn product_label(&self) -> Option<&str> {
        self.product_label.as_deref()
    }

    /// Name of the requested taxon filter
    pub fn taxon_label(&self) -> Option<&str> {
        self.taxon_label.as_deref()
    }
}
