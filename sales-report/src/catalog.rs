//! Catalog lookups
//!
//! The report engine never owns products or taxons. It resolves the ids of a
//! [`ReportRequest`] through a [`Catalog`] and fails with a not-found error
//! when an id does not resolve.

use std::collections::{HashMap, HashSet};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Product, Taxon};

use crate::request::ReportRequest;
use crate::scope::{Scope, TaxonFilter, TaxonomyMatch, resolve_scope};

/// Read access to products and the taxon tree
pub trait Catalog {
    fn product(&self, id: i64) -> Option<Product>;

    fn taxon(&self, id: i64) -> Option<Taxon>;

    /// The taxon followed by its parent chain up to the root
    fn self_and_ancestors(&self, taxon: &Taxon) -> AppResult<Vec<Taxon>>;

    fn require_product(&self, id: i64) -> AppResult<Product> {
        self.product(id)
            .ok_or_else(|| AppError::product_not_found(id))
    }

    fn require_taxon(&self, id: i64) -> AppResult<Taxon> {
        self.taxon(id)
            .ok_or_else(|| AppError::taxon_not_found(id))
    }
}

/// In-memory catalog snapshot
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: HashMap<i64, Product>,
    taxons: HashMap<i64, Taxon>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(mut self, products: impl IntoIterator<Item = Product>) -> Self {
        for product in products {
            self.insert_product(product);
        }
        self
    }

    pub fn with_taxons(mut self, taxons: impl IntoIterator<Item = Taxon>) -> Self {
        for taxon in taxons {
            self.insert_taxon(taxon);
        }
        self
    }

    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(product.id, product);
    }

    pub fn insert_taxon(&mut self, taxon: Taxon) {
        self.taxons.insert(taxon.id, taxon);
    }
}

impl Catalog for MemoryCatalog {
    fn product(&self, id: i64) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    fn taxon(&self, id: i64) -> Option<Taxon> {
        self.taxons.get(&id).cloned()
    }

    fn self_and_ancestors(&self, taxon: &Taxon) -> AppResult<Vec<Taxon>> {
        let mut chain = vec![taxon.clone()];
        let mut seen = HashSet::from([taxon.id]);
        let mut parent_id = taxon.parent_id;

        while let Some(id) = parent_id {
            if !seen.insert(id) {
                return Err(
                    AppError::new(ErrorCode::TaxonCycle).with_detail("taxon_id", taxon.id)
                );
            }
            // A dangling parent ends the chain
            let Some(parent) = self.taxons.get(&id) else {
                tracing::warn!(
                    taxon_id = taxon.id,
                    parent_id = id,
                    "Taxon parent missing from catalog"
                );
                break;
            };
            chain.push(parent.clone());
            parent_id = parent.parent_id;
        }

        Ok(chain)
    }
}

/// Product and taxon filters of a request, looked up in the catalog
#[derive(Debug, Clone, Default)]
pub struct RequestFilters {
    pub product: Option<Product>,
    pub taxon: Option<TaxonFilter>,
}

impl RequestFilters {
    pub fn product_name(&self) -> Option<&str> {
        self.product.as_ref().map(|p| p.name.as_str())
    }

    pub fn taxon_name(&self) -> Option<&str> {
        self.taxon.as_ref().map(|t| t.taxon().name.as_str())
    }

    pub fn into_scope(self) -> Scope {
        resolve_scope(self.product, self.taxon)
    }
}

/// Look up the request's product and taxon ids
pub fn lookup_filters<C: Catalog + ?Sized>(
    catalog: &C,
    request: &ReportRequest,
    matching: TaxonomyMatch,
) -> AppResult<RequestFilters> {
    let product = request
        .product_id
        .map(|id| catalog.require_product(id))
        .transpose()?;

    let taxon = match request.taxon_id {
        Some(id) => {
            let taxon = catalog.require_taxon(id)?;
            let closure = catalog.self_and_ancestors(&taxon)?;
            Some(TaxonFilter::new(taxon, &closure, matching))
        }
        None => None,
    };

    Ok(RequestFilters { product, taxon })
}

/// Look up the request's product and taxon and resolve the report scope
pub fn resolve_request_scope<C: Catalog + ?Sized>(
    catalog: &C,
    request: &ReportRequest,
    matching: TaxonomyMatch,
) -> AppResult<Scope> {
    Ok(lookup_filters(catalog, request, matching)?.into_scope())
}
