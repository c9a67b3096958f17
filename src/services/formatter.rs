//! Formatting stage: stored products -> flat text blocks.

use serde::Serialize;
use tera::Tera;

use crate::domain::product::{Product, ProductFeature, ProductPrice, ProductSpec, ProductTechnology};
use crate::services::ServiceResult;

/// Fixed layout of one product block. Empty sections are omitted entirely so
/// the output never contains a header with nothing under it.
const PRODUCT_TEMPLATE: &str = r#"Product: {{ display_title }}
{%- if tagline %}
Tagline: {{ tagline }}
{%- endif %}
URL: {{ url }}
UID: {{ uid }}
{%- if description %}
Description: {{ description }}
{%- endif %}
{%- if specs_text %}
Specifications: {{ specs_text }}
{%- endif %}
{%- if prices_text %}
Prices: {{ prices_text }}
{%- endif %}
{%- if technologies_text %}
Technology: {{ technologies_text }}
{%- endif %}
{%- if features_text %}
Features: {{ features_text }}
{%- endif %}"#;

const TEMPLATE_NAME: &str = "product.txt";

#[derive(Serialize)]
struct BlockContext<'a> {
    uid: &'a str,
    display_title: &'a str,
    url: &'a str,
    description: &'a str,
    tagline: &'a str,
    specs_text: Option<String>,
    prices_text: Option<String>,
    technologies_text: Option<String>,
    features_text: Option<String>,
}

/// Renders stored products into fixed-layout text blocks.
pub struct ProductFormatter {
    tera: Tera,
}

impl ProductFormatter {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, PRODUCT_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Renders a single product block. Deterministic: the same stored data
    /// always yields byte-identical text.
    pub fn format(&self, product: &Product) -> ServiceResult<String> {
        let context = BlockContext {
            uid: product.uid.as_str(),
            display_title: &product.display_title,
            url: &product.url,
            description: &product.description,
            tagline: &product.tagline,
            specs_text: format_specs(&product.specs),
            prices_text: format_prices(&product.prices),
            technologies_text: format_technologies(&product.technologies),
            features_text: format_features(&product.features),
        };

        let context = tera::Context::from_serialize(&context)?;
        Ok(self.tera.render(TEMPLATE_NAME, &context)?)
    }

    /// Renders every product in order.
    pub fn format_all(&self, products: &[Product]) -> ServiceResult<Vec<String>> {
        products.iter().map(|product| self.format(product)).collect()
    }
}

/// One line per spec title, de-duplicated (the last value for a repeated
/// title wins, the first position is kept); empty values are dropped.
fn format_specs(specs: &[ProductSpec]) -> Option<String> {
    let mut by_title: Vec<(&str, &str)> = Vec::new();
    for spec in specs {
        match by_title.iter_mut().find(|(title, _)| *title == spec.title) {
            Some(entry) => entry.1 = &spec.value,
            None => by_title.push((&spec.title, &spec.value)),
        }
    }

    let lines: Vec<String> = by_title
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(title, value)| format!("{title}: {value}"))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("; "))
    }
}

fn format_prices(prices: &[ProductPrice]) -> Option<String> {
    let lines: Vec<String> = prices
        .iter()
        .filter(|price| !price.price.is_empty())
        .map(|price| format!("{}: {}", price.region.as_str().to_uppercase(), price.price))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("; "))
    }
}

fn format_technologies(technologies: &[ProductTechnology]) -> Option<String> {
    let lines: Vec<String> = technologies
        .iter()
        .map(|technology| {
            if technology.content.is_empty() {
                technology.title.clone()
            } else {
                format!("{}: {}", technology.title, technology.content)
            }
        })
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" | "))
    }
}

/// Features cluster under their group heading; rows without one fall back to
/// "General".
fn format_features(features: &[ProductFeature]) -> Option<String> {
    let mut groups: Vec<(&str, Vec<&str>)> = Vec::new();
    for feature in features {
        let group_title = if feature.group_title.is_empty() {
            "General"
        } else {
            &feature.group_title
        };
        match groups.iter_mut().find(|(title, _)| *title == group_title) {
            Some(entry) => entry.1.push(&feature.content),
            None => groups.push((group_title, vec![&feature.content])),
        }
    }

    let lines: Vec<String> = groups
        .into_iter()
        .map(|(title, contents)| format!("{}: {}", title, contents.join(", ")))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join(" | "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    use crate::domain::types::{ProductUid, RegionCode};

    fn minimal_product(uid: &str) -> Product {
        let timestamp = DateTime::from_timestamp(0, 0).unwrap().naive_utc();
        Product {
            uid: ProductUid::new(uid).unwrap(),
            title: "Redline 3.0".to_string(),
            display_title: "Redline 3.0 Skis".to_string(),
            url: "/redline-3-0".to_string(),
            description: String::new(),
            tagline: String::new(),
            created_at: timestamp,
            updated_at: timestamp,
            specs: vec![],
            prices: vec![],
            technologies: vec![],
            features: vec![],
        }
    }

    fn full_product() -> Product {
        let mut product = minimal_product("blt100");
        product.description = "World cup racing ski.".to_string();
        product.tagline = "Fast as ever".to_string();
        product.specs = vec![
            ProductSpec {
                spec_id: "weight".to_string(),
                title: "Weight".to_string(),
                value: "940 g".to_string(),
            },
            ProductSpec {
                spec_id: "sizes".to_string(),
                title: "Sizes".to_string(),
                value: "182, 187, 192".to_string(),
            },
        ];
        product.prices = vec![
            ProductPrice {
                region: RegionCode::new("no").unwrap(),
                price: "7999 NOK".to_string(),
            },
            ProductPrice {
                region: RegionCode::new("se").unwrap(),
                price: "8499 SEK".to_string(),
            },
        ];
        product.technologies = vec![ProductTechnology {
            title: "Carbon Core".to_string(),
            content: "Full carbon layup".to_string(),
        }];
        product.features = vec![ProductFeature {
            group_title: "Race".to_string(),
            content: "Sintered race base".to_string(),
        }];
        product
    }

    #[test]
    fn renders_a_full_block() {
        let formatter = ProductFormatter::new().unwrap();

        let block = formatter.format(&full_product()).unwrap();

        assert_eq!(
            block,
            "Product: Redline 3.0 Skis\n\
             Tagline: Fast as ever\n\
             URL: /redline-3-0\n\
             UID: blt100\n\
             Description: World cup racing ski.\n\
             Specifications: Weight: 940 g; Sizes: 182, 187, 192\n\
             Prices: NO: 7999 NOK; SE: 8499 SEK\n\
             Technology: Carbon Core: Full carbon layup\n\
             Features: Race: Sintered race base"
        );
    }

    #[test]
    fn omits_empty_sections_entirely() {
        let formatter = ProductFormatter::new().unwrap();

        let block = formatter.format(&minimal_product("blt200")).unwrap();

        assert_eq!(
            block,
            "Product: Redline 3.0 Skis\n\
             URL: /redline-3-0\n\
             UID: blt200"
        );
    }

    #[test]
    fn zero_technologies_omit_the_section_one_renders_alone() {
        let formatter = ProductFormatter::new().unwrap();

        let without = formatter.format(&minimal_product("blt300")).unwrap();
        assert!(!without.contains("Technology:"));

        let mut product = minimal_product("blt300");
        product.technologies = vec![ProductTechnology {
            title: "Torsion Box".to_string(),
            content: String::new(),
        }];
        let with = formatter.format(&product).unwrap();
        assert!(with.contains("\nTechnology: Torsion Box"));
        assert_eq!(with.matches("Torsion Box").count(), 1);
    }

    #[test]
    fn groups_features_and_defaults_the_heading() {
        let features = vec![
            ProductFeature {
                group_title: "Race".to_string(),
                content: "Race base".to_string(),
            },
            ProductFeature {
                group_title: String::new(),
                content: "Stone grinding".to_string(),
            },
            ProductFeature {
                group_title: "Race".to_string(),
                content: "World cup profile".to_string(),
            },
        ];

        assert_eq!(
            format_features(&features).unwrap(),
            "Race: Race base, World cup profile | General: Stone grinding"
        );
    }

    #[test]
    fn deduplicates_spec_titles_keeping_the_last_value() {
        let specs = vec![
            ProductSpec {
                spec_id: "w1".to_string(),
                title: "Weight".to_string(),
                value: "940 g".to_string(),
            },
            ProductSpec {
                spec_id: "c1".to_string(),
                title: "Camber".to_string(),
                value: "High".to_string(),
            },
            ProductSpec {
                spec_id: "w2".to_string(),
                title: "Weight".to_string(),
                value: "1005 g".to_string(),
            },
        ];

        assert_eq!(
            format_specs(&specs).unwrap(),
            "Weight: 1005 g; Camber: High"
        );
    }

    #[test]
    fn skips_specs_with_empty_values() {
        let specs = vec![ProductSpec {
            spec_id: "w1".to_string(),
            title: "Weight".to_string(),
            value: String::new(),
        }];

        assert_eq!(format_specs(&specs), None);
    }
}
