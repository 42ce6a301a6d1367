// SPDX-License-Identifier: MPL-2.0
//! Catalog domain types.
//!
//! A [`Product`] is the unit the storefront displays: a named article with a
//! CLP price, an ordered list of image references, and optional marketing
//! fields. Instances are decoded from backend documents; the UI never
//! mutates them.

pub mod category;
pub mod description;
pub mod price;

pub use category::Category;
pub use description::{parse_description, Block};
pub use price::format_price_clp;

use chrono::{DateTime, Utc};

/// One catalog article as stored in the hosted database.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Document id within the products collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Price in Chilean pesos (whole pesos, no decimals).
    pub price: i64,
    /// Markdown description body.
    pub description: String,
    /// Ordered image references; display order follows insertion order.
    pub images: Vec<String>,
    /// Category slug, when assigned.
    pub category: Option<String>,
    /// Units in stock, when tracked.
    pub stock: Option<i64>,
    /// Whether the product is featured on the storefront.
    pub highlighted: bool,
    /// Free-form recommended age line.
    pub age_recommendation: Option<String>,
    /// Markdown specifications body (dimensions, materials).
    pub dimensions: Option<String>,
    /// Last modification timestamp, when recorded.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Returns the category as a typed value, when the slug is known.
    #[must_use]
    pub fn category(&self) -> Option<Category> {
        self.category.as_deref().and_then(Category::from_slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "wooden-train".to_string(),
            name: "Tren de Madera".to_string(),
            price: 12990,
            description: "Un tren artesanal.".to_string(),
            images: vec!["https://img.example/a.jpg".to_string()],
            category: Some("wooden-toys".to_string()),
            stock: Some(3),
            highlighted: true,
            age_recommendation: Some("3+".to_string()),
            dimensions: None,
            updated_at: None,
        }
    }

    #[test]
    fn category_resolves_known_slug() {
        let product = sample_product();
        assert_eq!(product.category(), Some(Category::WoodenToys));
    }

    #[test]
    fn category_is_none_for_unknown_slug() {
        let mut product = sample_product();
        product.category = Some("mystery".to_string());
        assert_eq!(product.category(), None);
    }
}
