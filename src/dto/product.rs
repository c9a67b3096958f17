//! Wire-format representations of catalog API payloads and their mapping
//! into domain entities.
//!
//! The upstream schema is loose: optional fields are omitted or null, spec
//! values arrive as either a string or a list of strings, and the technology
//! block may be a single object or a list. Everything is normalized here so
//! the rest of the pipeline only sees [`NewProduct`].

use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::domain::product::{
    NewProduct, ProductFeature, ProductPrice, ProductSpec, ProductTechnology,
};
use crate::domain::types::{ProductUid, RegionCode, TypeConstraintError};

/// Lightweight entry from the product index.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductSummary {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub display_title: String,
    #[serde(default)]
    pub url: String,
}

/// Full product record as returned by the detail operation.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDetail {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub display_title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub updated_product_specs: Vec<SpecEntry>,
    /// Region code to formatted price; null when a region has no listing.
    #[serde(default)]
    pub prices: BTreeMap<String, Option<String>>,
    #[serde(default)]
    pub details: Option<ProductDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpecEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub value: Option<SpecValue>,
}

/// Spec values come through as a plain string or a list of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SpecValue {
    Text(String),
    Many(Vec<String>),
}

impl SpecValue {
    fn into_text(self) -> String {
        match self {
            SpecValue::Text(text) => text,
            SpecValue::Many(items) => items.join(", "),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDetails {
    #[serde(default)]
    pub technology: Option<OneOrMany<TechnologyEntry>>,
    #[serde(default)]
    pub feature_details: Option<Vec<FeatureGroup>>,
}

/// The technology block is an object for single-technology products and a
/// list otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(item) => vec![item],
            OneOrMany::Many(items) => items,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TechnologyEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureGroup {
    #[serde(default)]
    pub group_title: String,
    #[serde(default)]
    pub group: Vec<FeatureEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeatureEntry {
    #[serde(default)]
    pub content: String,
}

/// Strips HTML tags and collapses runs of whitespace.
fn clean_html(html: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();

    let tags = TAGS.get_or_init(|| Regex::new("<[^>]*>").expect("valid regex"));
    let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("valid regex"));

    let text = tags.replace_all(html, "");
    whitespace.replace_all(&text, " ").trim().to_string()
}

impl TryFrom<ProductDetail> for NewProduct {
    type Error = TypeConstraintError;

    fn try_from(detail: ProductDetail) -> Result<Self, Self::Error> {
        let uid = ProductUid::new(detail.uid)?;

        let specs = detail
            .updated_product_specs
            .into_iter()
            .filter(|entry| !entry.id.trim().is_empty() && !entry.title.trim().is_empty())
            .map(|entry| ProductSpec {
                spec_id: entry.id,
                title: entry.title,
                value: entry.value.map(SpecValue::into_text).unwrap_or_default(),
            })
            .collect();

        let prices = detail
            .prices
            .into_iter()
            .filter_map(|(region, price)| {
                let price = price.filter(|p| !p.trim().is_empty())?;
                let region = RegionCode::new(region).ok()?;
                Some(ProductPrice { region, price })
            })
            .collect();

        let details = detail.details.unwrap_or_default();

        let technologies = details
            .technology
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| !entry.title.trim().is_empty())
            .map(|entry| ProductTechnology {
                title: entry.title,
                content: clean_html(&entry.content),
            })
            .collect();

        let features = details
            .feature_details
            .unwrap_or_default()
            .into_iter()
            .flat_map(|group| {
                let group_title = group.group_title;
                group
                    .group
                    .into_iter()
                    .filter(|entry| !entry.content.trim().is_empty())
                    .map(move |entry| ProductFeature {
                        group_title: group_title.clone(),
                        content: entry.content,
                    })
            })
            .collect();

        Ok(NewProduct {
            uid,
            title: detail.title,
            display_title: detail.display_title,
            url: detail.url,
            description: clean_html(&detail.description),
            tagline: detail.tagline,
            specs,
            prices,
            technologies,
            features,
        })
    }
}
