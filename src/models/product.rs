use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    Product as DomainProduct, ProductFeature as DomainProductFeature,
    ProductPrice as DomainProductPrice, ProductSpec as DomainProductSpec,
    ProductTechnology as DomainProductTechnology,
};
use crate::domain::types::{ProductUid, RegionCode, TypeConstraintError};

/// Diesel representation of a product row.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products, primary_key(uid))]
pub struct Product {
    pub uid: String,
    pub title: String,
    pub display_title: String,
    pub url: String,
    pub description: String,
    pub tagline: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub uid: String,
    pub title: String,
    pub display_title: String,
    pub url: String,
    pub description: String,
    pub tagline: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product, foreign_key = product_uid))]
#[diesel(table_name = crate::schema::product_specs)]
pub struct ProductSpec {
    pub id: i32,
    pub product_uid: String,
    pub spec_id: String,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_specs)]
pub struct NewProductSpec {
    pub product_uid: String,
    pub spec_id: String,
    pub title: String,
    pub value: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product, foreign_key = product_uid))]
#[diesel(table_name = crate::schema::product_prices)]
pub struct ProductPrice {
    pub id: i32,
    pub product_uid: String,
    pub region: String,
    pub price: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_prices)]
pub struct NewProductPrice {
    pub product_uid: String,
    pub region: String,
    pub price: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product, foreign_key = product_uid))]
#[diesel(table_name = crate::schema::product_technologies)]
pub struct ProductTechnology {
    pub id: i32,
    pub product_uid: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_technologies)]
pub struct NewProductTechnology {
    pub product_uid: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Associations)]
#[diesel(belongs_to(Product, foreign_key = product_uid))]
#[diesel(table_name = crate::schema::product_features)]
pub struct ProductFeature {
    pub id: i32,
    pub product_uid: String,
    pub group_title: String,
    pub content: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_features)]
pub struct NewProductFeature {
    pub product_uid: String,
    pub group_title: String,
    pub content: String,
}

impl Product {
    /// Assembles the domain entity from a product row and its child rows.
    pub fn into_domain(
        self,
        specs: Vec<ProductSpec>,
        prices: Vec<ProductPrice>,
        technologies: Vec<ProductTechnology>,
        features: Vec<ProductFeature>,
    ) -> Result<DomainProduct, TypeConstraintError> {
        Ok(DomainProduct {
            uid: ProductUid::new(self.uid)?,
            title: self.title,
            display_title: self.display_title,
            url: self.url,
            description: self.description,
            tagline: self.tagline,
            created_at: self.created_at,
            updated_at: self.updated_at,
            specs: specs.into_iter().map(Into::into).collect(),
            prices: prices
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<Vec<_>, _>>()?,
            technologies: technologies.into_iter().map(Into::into).collect(),
            features: features.into_iter().map(Into::into).collect(),
        })
    }
}

impl From<ProductSpec> for DomainProductSpec {
    fn from(spec: ProductSpec) -> Self {
        Self {
            spec_id: spec.spec_id,
            title: spec.title,
            value: spec.value,
        }
    }
}

impl TryFrom<ProductPrice> for DomainProductPrice {
    type Error = TypeConstraintError;

    fn try_from(price: ProductPrice) -> Result<Self, Self::Error> {
        Ok(Self {
            region: RegionCode::new(price.region)?,
            price: price.price,
        })
    }
}

impl From<ProductTechnology> for DomainProductTechnology {
    fn from(technology: ProductTechnology) -> Self {
        Self {
            title: technology.title,
            content: technology.content,
        }
    }
}

impl From<ProductFeature> for DomainProductFeature {
    fn from(feature: ProductFeature) -> Self {
        Self {
            group_title: feature.group_title,
            content: feature.content,
        }
    }
}
