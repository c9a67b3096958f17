use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ProductUid, RegionCode};

/// A catalog product together with its eagerly loaded child rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub uid: ProductUid,
    pub title: String,
    pub display_title: String,
    /// Canonical product page URL as reported by the catalog API.
    pub url: String,
    pub description: String,
    pub tagline: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub specs: Vec<ProductSpec>,
    pub prices: Vec<ProductPrice>,
    pub technologies: Vec<ProductTechnology>,
    pub features: Vec<ProductFeature>,
}

/// A single specification line, e.g. "Weight: 1240 g".
///
/// The spec identifier is assigned by the catalog and is not unique across
/// products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductSpec {
    pub spec_id: String,
    pub title: String,
    pub value: String,
}

/// Regional price kept as free text to preserve currency formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductPrice {
    pub region: RegionCode,
    pub price: String,
}

/// A named technology with free-text content.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductTechnology {
    pub title: String,
    pub content: String,
}

/// A feature bullet clustered under a group heading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductFeature {
    /// Empty when the catalog supplied no group; rendered as "General".
    pub group_title: String,
    pub content: String,
}

/// Information required to create or update a [`Product`].
///
/// Timestamps are assigned by the store: `created_at` on first insert,
/// `updated_at` on every upsert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub uid: ProductUid,
    pub title: String,
    pub display_title: String,
    pub url: String,
    pub description: String,
    pub tagline: String,
    pub specs: Vec<ProductSpec>,
    pub prices: Vec<ProductPrice>,
    pub technologies: Vec<ProductTechnology>,
    pub features: Vec<ProductFeature>,
}
