//! Product catalog
//!
//! Loaded once at startup and immutable afterwards. Every `Catalog` holds at
//! least one product, so index wrapping is always defined.

use serde::{Deserialize, Serialize};

use crate::consts::MAX_STARS;
use crate::error::{Error, Result};
use crate::wrap_index;

/// A single product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    /// Image URL
    #[serde(alias = "img")]
    pub image: String,
    /// Short category/collection label
    pub tag: String,
    /// Detail page link
    pub url: String,
    pub price: f64,
    /// 0.0 - 5.0, half-star granularity when displayed
    pub rating: f32,
    /// Optional highlight ("New", "Bestseller", ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        image: impl Into<String>,
        tag: impl Into<String>,
        url: impl Into<String>,
        price: f64,
        rating: f32,
    ) -> Self {
        Self {
            name: name.into(),
            image: image.into(),
            tag: tag.into(),
            url: url.into(),
            price,
            rating,
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }
}

/// Immutable, non-empty, ordered product list
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validate and wrap a product list
    pub fn new(products: Vec<Product>) -> Result<Self> {
        if products.is_empty() {
            return Err(Error::EmptyCatalog);
        }
        for (index, product) in products.iter().enumerate() {
            if !product.rating.is_finite() || !(0.0..=MAX_STARS as f32).contains(&product.rating) {
                return Err(Error::InvalidRating {
                    index,
                    rating: product.rating,
                });
            }
            if !product.price.is_finite() || product.price < 0.0 {
                return Err(Error::InvalidPrice {
                    index,
                    price: product.price,
                });
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array of products
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// Catalog shipped with the page when no data block is present
    pub fn builtin() -> Self {
        Self {
            products: builtin_products(),
        }
    }

    /// Number of products (always >= 1)
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Always false; kept for API symmetry with collections
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Product at an actual index in `[0, len)`
    pub fn get(&self, actual: usize) -> Option<&Product> {
        self.products.get(actual)
    }

    /// Product at an unbounded cursor (wraps in both directions)
    pub fn product_at(&self, cursor: i64) -> &Product {
        &self.products[wrap_index(cursor, self.products.len())]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

fn builtin_products() -> Vec<Product> {
    vec![
        Product::new(
            "Aurora Runner",
            "/products/product_1.png",
            "Running / Road",
            "/shop/aurora-runner",
            149.0,
            4.5,
        )
        .with_badge("New"),
        Product::new(
            "Nimbus Trail",
            "/products/product_2.png",
            "Running / Trail",
            "/shop/nimbus-trail",
            169.0,
            4.0,
        ),
        Product::new(
            "Vector Court",
            "/products/product_3.png",
            "Basketball",
            "/shop/vector-court",
            189.0,
            5.0,
        )
        .with_badge("Bestseller"),
        Product::new(
            "Drift Lite",
            "/products/product_4.png",
            "Lifestyle",
            "/shop/drift-lite",
            119.0,
            3.5,
        ),
        Product::new(
            "Pulse Trainer",
            "/products/product_5.png",
            "Training / Gym",
            "/shop/pulse-trainer",
            129.0,
            4.0,
        )
        .with_badge("Limited"),
        Product::new(
            "Summit Hiker",
            "/products/product_6.png",
            "Outdoor",
            "/shop/summit-hiker",
            209.0,
            4.5,
        ),
        Product::new(
            "Glide Slip-On",
            "/products/product_7.png",
            "Lifestyle",
            "/shop/glide-slip-on",
            89.0,
            3.0,
        ),
        Product::new(
            "Apex Sprint",
            "/products/product_8.png",
            "Track / Spikes",
            "/shop/apex-sprint",
            159.0,
            4.5,
        )
        .with_badge("Sale"),
    ]
}
