//! Static catalog tables — categories and demo inventory.
//!
//! SYSTEM CONTEXT
//! ==============
//! Categories drive storefront navigation and are enumerated by the
//! server's sitemap generator, so both crates read this one table.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A product category with a stable URL slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    pub name: &'static str,
    pub blurb: &'static str,
}

/// Categories shown in navigation and enumerated in the sitemap.
pub const CATEGORIES: &[Category] = &[
    Category { slug: "apparel", name: "Apparel", blurb: "Everyday basics cut from organic cotton." },
    Category { slug: "footwear", name: "Footwear", blurb: "Sneakers and boots built to last." },
    Category { slug: "accessories", name: "Accessories", blurb: "Bags, belts, and small leather goods." },
    Category { slug: "home-goods", name: "Home Goods", blurb: "Ceramics and textiles for the kitchen and den." },
];

/// A catalog product.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub sku: &'static str,
    pub name: &'static str,
    pub price_cents: u32,
    pub category: &'static str,
}

/// Demo inventory listed on category pages.
pub const PRODUCTS: &[Product] = &[
    Product { sku: "tee-01", name: "Organic Tee", price_cents: 2400, category: "apparel" },
    Product { sku: "hoodie-01", name: "Fleece Hoodie", price_cents: 6800, category: "apparel" },
    Product { sku: "sock-01", name: "Wool Socks (3-pack)", price_cents: 1900, category: "apparel" },
    Product { sku: "sneaker-01", name: "Court Sneaker", price_cents: 9800, category: "footwear" },
    Product { sku: "boot-01", name: "Chelsea Boot", price_cents: 16500, category: "footwear" },
    Product { sku: "tote-01", name: "Canvas Tote", price_cents: 4200, category: "accessories" },
    Product { sku: "belt-01", name: "Bridle Leather Belt", price_cents: 5600, category: "accessories" },
    Product { sku: "mug-01", name: "Stoneware Mug", price_cents: 1800, category: "home-goods" },
    Product { sku: "throw-01", name: "Alpaca Throw", price_cents: 12900, category: "home-goods" },
];

/// Look up a category by slug.
#[must_use]
pub fn find(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|category| category.slug == slug)
}

/// Route path for a category page.
#[must_use]
pub fn category_path(category: &Category) -> String {
    format!("/products/{}", category.slug)
}

/// Products belonging to a category.
pub fn products_in(slug: &str) -> impl Iterator<Item = &'static Product> {
    let slug = slug.to_owned();
    PRODUCTS.iter().filter(move |product| product.category == slug)
}
