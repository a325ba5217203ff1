use super::*;

#[test]
fn find_resolves_known_slugs() {
    let category = find("footwear").expect("footwear should exist");
    assert_eq!(category.name, "Footwear");
}

#[test]
fn find_rejects_unknown_slugs() {
    assert_eq!(find("gadgets"), None);
    assert_eq!(find(""), None);
}

#[test]
fn category_paths_are_rooted_under_products() {
    let category = find("apparel").expect("apparel should exist");
    assert_eq!(category_path(category), "/products/apparel");
}

#[test]
fn every_product_references_a_known_category() {
    for product in PRODUCTS {
        assert!(find(product.category).is_some(), "product {} has unknown category {}", product.sku, product.category);
    }
}

#[test]
fn every_category_has_at_least_one_product() {
    for category in CATEGORIES {
        assert!(products_in(category.slug).next().is_some(), "category {} is empty", category.slug);
    }
}

#[test]
fn product_skus_are_unique() {
    for (i, a) in PRODUCTS.iter().enumerate() {
        for b in &PRODUCTS[i + 1..] {
            assert_ne!(a.sku, b.sku);
        }
    }
}
