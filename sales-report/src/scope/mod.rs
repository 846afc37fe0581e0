//! Report scope resolution
//!
//! Turns the optional product / taxon filters of a report into a [`Scope`]
//! that decides which line items of an order count towards its metrics.
//!
//! # Taxonomy matching
//!
//! Historically a product was considered part of a taxon subtree when the
//! *union* of its taxons and the taxon's self-and-ancestors was non-empty.
//! The closure always contains the taxon itself, so that test holds for every
//! product. Report output depends on it, so it stays the default
//! ([`TaxonomyMatch::Union`]). [`TaxonomyMatch::Intersection`] implements real
//! membership: the product must belong to a taxon inside the closure.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use shared::models::{LineItem, Product, Taxon};

/// How product membership in a taxon subtree is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxonomyMatch {
    /// Legacy test: union of product taxons and taxon closure is non-empty
    #[default]
    Union,
    /// Product taxons intersect the taxon closure
    Intersection,
}

impl TaxonomyMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Union => "union",
            Self::Intersection => "intersection",
        }
    }
}

impl std::str::FromStr for TaxonomyMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(Self::Union),
            "intersection" => Ok(Self::Intersection),
            other => Err(format!("unknown taxonomy match mode: {}", other)),
        }
    }
}

/// A taxon together with its self-and-ancestors closure
#[derive(Debug, Clone, PartialEq)]
pub struct TaxonFilter {
    taxon: Taxon,
    self_and_ancestors: HashSet<i64>,
    matching: TaxonomyMatch,
}

impl TaxonFilter {
    /// Build a filter from the catalog's ancestor closure.
    ///
    /// The taxon itself is always part of the closure, even if the catalog
    /// left it out.
    pub fn new(taxon: Taxon, self_and_ancestors: &[Taxon], matching: TaxonomyMatch) -> Self {
        let mut closure: HashSet<i64> = self_and_ancestors.iter().map(|t| t.id).collect();
        closure.insert(taxon.id);
        Self {
            taxon,
            self_and_ancestors: closure,
            matching,
        }
    }

    pub fn taxon(&self) -> &Taxon {
        &self.taxon
    }

    pub fn matching(&self) -> TaxonomyMatch {
        self.matching
    }

    pub fn self_and_ancestor_ids(&self) -> &HashSet<i64> {
        &self.self_and_ancestors
    }

    /// Whether `product` counts as part of this taxon's subtree
    pub fn contains(&self, product: &Product) -> bool {
        in_taxonomy(product, self)
    }
}

/// Product-in-taxonomy test under the filter's [`TaxonomyMatch`] mode
pub fn in_taxonomy(product: &Product, filter: &TaxonFilter) -> bool {
    match filter.matching {
        TaxonomyMatch::Union => {
            !product.taxon_ids.is_empty() || !filter.self_and_ancestors.is_empty()
        }
        TaxonomyMatch::Intersection => product
            .taxon_ids
            .iter()
            .any(|id| filter.self_and_ancestors.contains(id)),
    }
}

/// Filter context a report is computed under
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// Whole catalog
    Unscoped,
    /// A single product
    Product(Product),
    /// Every product inside a taxon subtree
    Taxon(TaxonFilter),
    /// Product and taxon filters contradict each other; every order is out of scope
    GloballyExcluded,
}

impl Scope {
    pub fn is_excluded(&self) -> bool {
        matches!(self, Self::GloballyExcluded)
    }

    pub fn is_unscoped(&self) -> bool {
        matches!(self, Self::Unscoped)
    }

    /// Line-item selection rule shared by revenue, profit and units.
    ///
    /// Always `false` for [`Scope::GloballyExcluded`].
    pub fn selects(&self, line_item: &LineItem) -> bool {
        match self {
            Self::Unscoped => true,
            Self::Product(product) => line_item.product_id() == Some(product.id),
            Self::Taxon(filter) => line_item
                .product
                .as_ref()
                .is_some_and(|p| filter.contains(p)),
            Self::GloballyExcluded => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Unscoped => "unscoped",
            Self::Product(_) => "product",
            Self::Taxon(_) => "taxon",
            Self::GloballyExcluded => "globally_excluded",
        }
    }
}

/// Resolve optional product / taxon filters into a [`Scope`].
///
/// When both are given and the product is outside the taxon subtree the
/// filters contradict each other and the whole report is empty. When they
/// agree the product filter wins.
pub fn resolve_scope(product: Option<Product>, taxon: Option<TaxonFilter>) -> Scope {
    let scope = match (product, taxon) {
        (Some(product), Some(filter)) => {
            if filter.contains(&product) {
                Scope::Product(product)
            } else {
                tracing::warn!(
                    product_id = product.id,
                    taxon_id = filter.taxon.id,
                    matching = filter.matching.as_str(),
                    "Product is outside taxon subtree, report scope is empty"
                );
                Scope::GloballyExcluded
            }
        }
        (Some(product), None) => Scope::Product(product),
        (None, Some(filter)) => Scope::Taxon(filter),
        (None, None) => Scope::Unscoped,
    };

    tracing::debug!(scope = scope.kind(), "Resolved report scope");
    scope
}

#[cfg(test)]
mod tests;
