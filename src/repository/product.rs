use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductUid;
use crate::models::product::{
    NewProduct as DbNewProduct, NewProductFeature as DbNewProductFeature,
    NewProductPrice as DbNewProductPrice, NewProductSpec as DbNewProductSpec,
    NewProductTechnology as DbNewProductTechnology, Product as DbProduct,
    ProductFeature as DbProductFeature, ProductPrice as DbProductPrice,
    ProductSpec as DbProductSpec, ProductTechnology as DbProductTechnology,
};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

/// Loads one product row together with its children.
fn load_product(conn: &mut SqliteConnection, uid: &str) -> RepositoryResult<Option<Product>> {
    use crate::schema::{
        product_features, product_prices, product_specs, product_technologies, products,
    };

    let row = products::table
        .find(uid)
        .first::<DbProduct>(conn)
        .optional()?;

    let Some(row) = row else {
        return Ok(None);
    };

    let specs = DbProductSpec::belonging_to(&row)
        .order(product_specs::id.asc())
        .load::<DbProductSpec>(conn)?;
    let prices = DbProductPrice::belonging_to(&row)
        .order(product_prices::id.asc())
        .load::<DbProductPrice>(conn)?;
    let technologies = DbProductTechnology::belonging_to(&row)
        .order(product_technologies::id.asc())
        .load::<DbProductTechnology>(conn)?;
    let features = DbProductFeature::belonging_to(&row)
        .order(product_features::id.asc())
        .load::<DbProductFeature>(conn)?;

    Ok(Some(row.into_domain(specs, prices, technologies, features)?))
}

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::{
            product_features, product_prices, product_specs, product_technologies, products,
        };

        let mut conn = self.conn()?;

        let rows = products::table
            .order((products::created_at.asc(), products::uid.asc()))
            .load::<DbProduct>(&mut conn)?;

        let specs = DbProductSpec::belonging_to(&rows)
            .order(product_specs::id.asc())
            .load::<DbProductSpec>(&mut conn)?
            .grouped_by(&rows);
        let prices = DbProductPrice::belonging_to(&rows)
            .order(product_prices::id.asc())
            .load::<DbProductPrice>(&mut conn)?
            .grouped_by(&rows);
        let technologies = DbProductTechnology::belonging_to(&rows)
            .order(product_technologies::id.asc())
            .load::<DbProductTechnology>(&mut conn)?
            .grouped_by(&rows);
        let features = DbProductFeature::belonging_to(&rows)
            .order(product_features::id.asc())
            .load::<DbProductFeature>(&mut conn)?
            .grouped_by(&rows);

        rows.into_iter()
            .zip(specs)
            .zip(prices)
            .zip(technologies)
            .zip(features)
            .map(|((((row, specs), prices), technologies), features)| {
                row.into_domain(specs, prices, technologies, features)
                    .map_err(Into::into)
            })
            .collect()
    }

    fn get_product_by_uid(&self, uid: &ProductUid) -> RepositoryResult<Option<Product>> {
        let mut conn = self.conn()?;
        load_product(&mut conn, uid.as_str())
    }
}

impl ProductWriter for DieselRepository {
    fn upsert_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::{
            product_features, product_prices, product_specs, product_technologies, products,
        };

        let mut conn = self.conn()?;
        let uid = product.uid.as_str();

        conn.transaction::<_, RepositoryError, _>(|conn| {
            let now = Utc::now().naive_utc();

            // Insert-or-update the scalar fields; created_at is only set on
            // first insert.
            diesel::insert_into(products::table)
                .values(DbNewProduct {
                    uid: uid.to_string(),
                    title: product.title.clone(),
                    display_title: product.display_title.clone(),
                    url: product.url.clone(),
                    description: product.description.clone(),
                    tagline: product.tagline.clone(),
                    created_at: now,
                    updated_at: now,
                })
                .on_conflict(products::uid)
                .do_update()
                .set((
                    products::title.eq(&product.title),
                    products::display_title.eq(&product.display_title),
                    products::url.eq(&product.url),
                    products::description.eq(&product.description),
                    products::tagline.eq(&product.tagline),
                    products::updated_at.eq(now),
                ))
                .execute(conn)?;

            // Replace the full child-row sets so no stale rows survive a
            // re-collection.
            diesel::delete(product_specs::table.filter(product_specs::product_uid.eq(uid)))
                .execute(conn)?;
            diesel::delete(product_prices::table.filter(product_prices::product_uid.eq(uid)))
                .execute(conn)?;
            diesel::delete(
                product_technologies::table.filter(product_technologies::product_uid.eq(uid)),
            )
            .execute(conn)?;
            diesel::delete(product_features::table.filter(product_features::product_uid.eq(uid)))
                .execute(conn)?;

            let specs = product
                .specs
                .iter()
                .map(|spec| DbNewProductSpec {
                    product_uid: uid.to_string(),
                    spec_id: spec.spec_id.clone(),
                    title: spec.title.clone(),
                    value: spec.value.clone(),
                })
                .collect::<Vec<_>>();
            if !specs.is_empty() {
                diesel::insert_into(product_specs::table)
                    .values(&specs)
                    .execute(conn)?;
            }

            let prices = product
                .prices
                .iter()
                .map(|price| DbNewProductPrice {
                    product_uid: uid.to_string(),
                    region: price.region.as_str().to_string(),
                    price: price.price.clone(),
                })
                .collect::<Vec<_>>();
            if !prices.is_empty() {
                diesel::insert_into(product_prices::table)
                    .values(&prices)
                    .execute(conn)?;
            }

            let technologies = product
                .technologies
                .iter()
                .map(|technology| DbNewProductTechnology {
                    product_uid: uid.to_string(),
                    title: technology.title.clone(),
                    content: technology.content.clone(),
                })
                .collect::<Vec<_>>();
            if !technologies.is_empty() {
                diesel::insert_into(product_technologies::table)
                    .values(&technologies)
                    .execute(conn)?;
            }

            let features = product
                .features
                .iter()
                .map(|feature| DbNewProductFeature {
                    product_uid: uid.to_string(),
                    group_title: feature.group_title.clone(),
                    content: feature.content.clone(),
                })
                .collect::<Vec<_>>();
            if !features.is_empty() {
                diesel::insert_into(product_features::table)
                    .values(&features)
                    .execute(conn)?;
            }

            load_product(conn, uid)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_product(&self, uid: &ProductUid) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(products::table.filter(products::uid.eq(uid.as_str())))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
