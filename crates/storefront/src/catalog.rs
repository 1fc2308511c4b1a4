//! The static product catalog.
//!
//! Products are fixed at startup and read-only from then on; the cart store
//! looks prices up here exactly once, at add-time, and snapshots them into
//! the persisted line item.

use gizmo_depot_core::{Price, ProductId};
use serde::Serialize;

/// A purchasable product.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Stable, unique catalog id.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    /// Image URL for the product card.
    pub image: String,
    /// Optional merchandising badge ("Popular", "Sale", ...).
    pub badge: Option<String>,
}

/// The fixed set of purchasable products known to the system.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in catalog order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// The demo store's catalog: eight gadgets with fixed ids and prices.
    #[must_use]
    pub fn demo() -> Self {
        let product = |id: i32, name: &str, description: &str, cents: i64, image: &str, badge: Option<&str>| Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::from_cents(cents),
            image: image.to_string(),
            badge: badge.map(String::from),
        };

        Self::new(vec![
            product(
                1,
                "Apple AirPods Pro",
                "Active noise cancellation, transparency mode, and personalized spatial audio with dynamic head tracking.",
                24900,
                "https://store.storeimages.cdn-apple.com/4982/as-images.apple.com/is/MQD83?wid=572&hei=572&fmt=jpeg&qlt=95",
                Some("Popular"),
            ),
            product(
                2,
                "Sony WH-1000XM5",
                "Industry-leading noise canceling wireless headphones with exceptional sound quality and 30-hour battery.",
                34800,
                "https://m.media-amazon.com/images/I/51aXvjzcukL._AC_SL1500_.jpg",
                None,
            ),
            product(
                3,
                "Logitech MX Master 3S",
                "Advanced wireless mouse with ultra-fast scrolling, 8K DPI tracking, and quiet clicks for any surface.",
                9999,
                "https://m.media-amazon.com/images/I/61ni3t1ryQL._AC_SL1500_.jpg",
                Some("Best Seller"),
            ),
            product(
                4,
                "Keychron K2 Keyboard",
                "Compact 75% wireless mechanical keyboard with Gateron switches, RGB backlight, and Mac/Windows layout.",
                8999,
                "https://m.media-amazon.com/images/I/71V2v8CXZML._AC_SL1500_.jpg",
                None,
            ),
            product(
                5,
                "Samsung 27\" 4K Monitor",
                "Ultra-sharp 4K UHD display with IPS panel, HDR10 support, and USB-C connectivity for pro workflows.",
                44999,
                "https://m.media-amazon.com/images/I/81oMSsSiZBL._AC_SL1500_.jpg",
                Some("Hot"),
            ),
            product(
                6,
                "Apple MacBook Air M2",
                "Supercharged by M2 chip with 8-core GPU, 13.6\" Liquid Retina display, and 18-hour battery life.",
                119_900,
                "https://m.media-amazon.com/images/I/71f5Eu5lJSL._AC_SL1500_.jpg",
                Some("New"),
            ),
            product(
                7,
                "JBL Charge 5 Speaker",
                "Portable Bluetooth speaker with powerful JBL Pro Sound, built-in powerbank, and IP67 waterproof rating.",
                17995,
                "https://m.media-amazon.com/images/I/71FHJ56yMbL._AC_SL1500_.jpg",
                None,
            ),
            product(
                8,
                "Anker 65W USB-C Charger",
                "Ultra-compact GaN charger with 3 ports, fast charging for laptops and phones simultaneously.",
                3599,
                "https://m.media-amazon.com/images/I/617oDbNeJBL._AC_SL1500_.jpg",
                Some("Sale"),
            ),
        ])
    }
}
