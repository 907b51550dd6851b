//! Catalog data models
//!
//! `Product` is the hit record as the search endpoint returns it.
//! `CatalogItem` adds the USD figures the client derives from it.

use crate::currency::convert_to_usd;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Product identifier; the search index emits either numbers or strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// Numeric id
    Number(i64),
    /// String id, e.g. a SKU
    Text(String),
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductId::Number(n) => write!(f, "{}", n),
            ProductId::Text(s) => f.write_str(s),
        }
    }
}

/// A single hit from the search endpoint
///
/// Prices are denominated in `currency`, never in USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier in the search index
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Image URLs, primary first
    #[serde(default)]
    pub images: Vec<String>,
    /// Category, one of `CATEGORIES` for well-formed hits
    #[serde(default)]
    pub category_name: String,
    /// Size labels in stock
    #[serde(default)]
    pub sizes: Vec<String>,
    /// Price in `currency`
    pub current_price: f64,
    /// Pre-discount price in `currency`
    #[serde(default)]
    pub old_price: Option<f64>,
    /// Discount percentage
    #[serde(default)]
    pub off_percent: Option<f64>,
    /// Currency code of the prices, e.g. `AED`
    pub currency: String,
}

impl Product {
    /// First image URL, if the product has any
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Product plus its derived USD prices
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    /// Hit as received
    pub product: Product,
    /// `product.current_price` in USD
    pub current_price_usd: f64,
    /// Present iff `product.old_price` is present
    pub old_price_usd: Option<f64>,
}

impl From<Product> for CatalogItem {
    fn from(product: Product) -> Self {
        let current_price_usd = convert_to_usd(product.current_price, &product.currency);
        let old_price_usd = product
            .old_price
            .map(|old| convert_to_usd(old, &product.currency));
        Self {
            product,
            current_price_usd,
            old_price_usd,
        }
    }
}

/// Size labels the filters panel offers
pub const SIZES: [&str; 5] = ["S", "M", "L", "XL", "2XL"];

/// Category names the filters panel offers
pub const CATEGORIES: [&str; 52] = [
    "tops", "shirts", "sweatshirts", "bags", "watches", "shoes", "earrings",
    "keychains", "belts", "headbands", "dresses", "t-shirts", "raincoats",
    "sunglasses", "kimonos", "blouses", "shorts", "hoodies", "waistcoats",
    "scarves", "anklets", "scrunchies", "rings", "pants", "skirts", "jackets",
    "sweaters", "bracelets", "necklaces", "socks", "blazers", "coats", "ties",
    "hats", "bodysuits", "jalabiyas", "jumpsuits", "turbans", "bras", "swimwears",
    "slippers", "briefs", "abayas", "shackets", "suits", "cases", "patches",
    "gloves", "capes", "polo shirts", "kaftans", "jewelry sets",
];

/// Whether `name` is one of the known categories
pub fn is_known_category(name: &str) -> bool {
    CATEGORIES.contains(&name)
}

/// Whether `label` is one of the known sizes
pub fn is_known_size(label: &str) -> bool {
    SIZES.contains(&label)
}
