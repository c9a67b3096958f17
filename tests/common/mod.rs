//! Helpers for integration tests.

use catalog_pipeline::db::{DbPool, MIGRATIONS, establish_connection_pool};
use catalog_pipeline::domain::product::{
    NewProduct, ProductFeature, ProductPrice, ProductSpec, ProductTechnology,
};
use catalog_pipeline::domain::types::{ProductUid, RegionCode};
use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

/// A product carrying every kind of child row.
pub fn full_product(uid: &str) -> NewProduct {
    NewProduct {
        uid: ProductUid::new(uid).expect("valid uid"),
        title: "Redline 3.0".to_string(),
        display_title: "Redline 3.0 Skis".to_string(),
        url: format!("/{uid}"),
        description: "World cup racing ski.".to_string(),
        tagline: "Fast as ever".to_string(),
        specs: vec![
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
            ProductSpec {
                spec_id: "camber".to_string(),
                title: "Camber".to_string(),
                value: "High".to_string(),
            },
        ],
        prices: vec![
            ProductPrice {
                region: RegionCode::new("no").expect("valid region"),
                price: "7999 NOK".to_string(),
            },
            ProductPrice {
                region: RegionCode::new("se").expect("valid region"),
                price: "8499 SEK".to_string(),
            },
        ],
        technologies: vec![ProductTechnology {
            title: "Carbon Core".to_string(),
            content: "Full carbon layup".to_string(),
        }],
        features: vec![
            ProductFeature {
                group_title: "Race".to_string(),
                content: "Sintered race base".to_string(),
            },
            ProductFeature {
                group_title: "Race".to_string(),
                content: "World cup profile".to_string(),
            },
        ],
    }
}

/// A product with nothing beyond the required scalar fields.
pub fn minimal_product(uid: &str) -> NewProduct {
    NewProduct {
        uid: ProductUid::new(uid).expect("valid uid"),
        title: "Nanosonic".to_string(),
        display_title: "Nanosonic Skis".to_string(),
        url: format!("/{uid}"),
        description: String::new(),
        tagline: String::new(),
        specs: vec![],
        prices: vec![],
        technologies: vec![],
        features: vec![],
    }
}
