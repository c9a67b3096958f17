use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::ProductUid;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between pipeline stages.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for product entities.
///
/// Children are always loaded eagerly; callers never observe a product
/// without its specs, prices, technologies and features.
pub trait ProductReader {
    /// List all stored products with their children, in insertion order.
    fn list_products(&self) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a single product by its external uid.
    fn get_product_by_uid(&self, uid: &ProductUid) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Insert or update a product keyed by uid, replacing its full child-row
    /// sets. Atomic per product; returns the stored entity.
    fn upsert_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Delete a product; child rows are removed by cascade.
    fn delete_product(&self, uid: &ProductUid) -> RepositoryResult<usize>;
}
