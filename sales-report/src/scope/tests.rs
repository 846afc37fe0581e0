use super::*;
use crate::fixtures::*;

// Clothing(1) > Shirts(2) > Polos(3), Mugs(10) is a separate root
fn polos_filter(matching: TaxonomyMatch) -> TaxonFilter {
    let polos = taxon(3, "Polos", Some(2));
    let closure = vec![
        polos.clone(),
        taxon(2, "Shirts", Some(1)),
        taxon(1, "Clothing", None),
    ];
    TaxonFilter::new(polos, &closure, matching)
}

#[test]
fn test_filter_always_contains_own_taxon() {
    let polos = taxon(3, "Polos", Some(2));
    let filter = TaxonFilter::new(polos, &[], TaxonomyMatch::Intersection);
    assert!(filter.self_and_ancestor_ids().contains(&3));
    assert_eq!(filter.self_and_ancestor_ids().len(), 1);
}

#[test]
fn test_union_match_accepts_unrelated_product() {
    // Legacy behaviour: the union is never empty, so any product matches
    let filter = polos_filter(TaxonomyMatch::Union);
    let mug = product(7, "Mug", &[10]);
    let untagged = product(8, "Gift card", &[]);

    assert!(in_taxonomy(&mug, &filter));
    assert!(in_taxonomy(&untagged, &filter));
}

#[test]
fn test_intersection_match_requires_membership() {
    let filter = polos_filter(TaxonomyMatch::Intersection);

    assert!(in_taxonomy(&product(1, "Polo", &[3]), &filter));
    // Ancestor membership is inside the closure
    assert!(in_taxonomy(&product(2, "Shirt", &[2]), &filter));
    assert!(!in_taxonomy(&product(3, "Mug", &[10]), &filter));
    assert!(!in_taxonomy(&product(4, "Gift card", &[]), &filter));
}

#[test]
fn test_resolve_without_filters_is_unscoped() {
    assert_eq!(resolve_scope(None, None), Scope::Unscoped);
}

#[test]
fn test_resolve_product_only() {
    let polo = product(1, "Polo", &[3]);
    assert_eq!(
        resolve_scope(Some(polo.clone()), None),
        Scope::Product(polo)
    );
}

#[test]
fn test_resolve_taxon_only() {
    let filter = polos_filter(TaxonomyMatch::Intersection);
    assert_eq!(
        resolve_scope(None, Some(filter.clone())),
        Scope::Taxon(filter)
    );
}

#[test]
fn test_resolve_agreeing_filters_prefers_product() {
    let polo = product(1, "Polo", &[3]);
    let scope = resolve_scope(
        Some(polo.clone()),
        Some(polos_filter(TaxonomyMatch::Intersection)),
    );
    assert_eq!(scope, Scope::Product(polo));
}

#[test]
fn test_resolve_contradicting_filters_excludes_everything() {
    let mug = product(7, "Mug", &[10]);
    let scope = resolve_scope(Some(mug), Some(polos_filter(TaxonomyMatch::Intersection)));
    assert!(scope.is_excluded());
}

#[test]
fn test_resolve_contradiction_is_masked_by_union_mode() {
    let mug = product(7, "Mug", &[10]);
    let scope = resolve_scope(Some(mug.clone()), Some(polos_filter(TaxonomyMatch::Union)));
    assert_eq!(scope, Scope::Product(mug));
}

#[test]
fn test_selects_by_scope() {
    let polo = product(1, "Polo", &[3]);
    let mug = product(7, "Mug", &[10]);
    let polo_item = item(1, &polo, 1, "20.00");
    let mug_item = item(2, &mug, 1, "8.00");
    let orphan = item_with_variant(3, None, variant(99, "5.00", None), 1, "5.00");

    let unscoped = Scope::Unscoped;
    assert!(unscoped.selects(&polo_item));
    assert!(unscoped.selects(&mug_item));
    assert!(unscoped.selects(&orphan));

    let by_product = Scope::Product(mug.clone());
    assert!(!by_product.selects(&polo_item));
    assert!(by_product.selects(&mug_item));
    assert!(!by_product.selects(&orphan));

    let by_taxon = Scope::Taxon(polos_filter(TaxonomyMatch::Intersection));
    assert!(by_taxon.selects(&polo_item));
    assert!(!by_taxon.selects(&mug_item));
    // Null product never matches a taxon, even in union mode
    let union_scope = Scope::Taxon(polos_filter(TaxonomyMatch::Union));
    assert!(!union_scope.selects(&orphan));

    assert!(!Scope::GloballyExcluded.selects(&polo_item));
}

#[test]
fn test_taxonomy_match_parse() {
    assert_eq!("union".parse::<TaxonomyMatch>(), Ok(TaxonomyMatch::Union));
    assert_eq!(
        " Intersection ".parse::<TaxonomyMatch>(),
        Ok(TaxonomyMatch::Intersection)
    );
    assert!("subset".parse::<TaxonomyMatch>().is_err());
    assert_eq!(TaxonomyMatch::default(), TaxonomyMatch::Union);
}
