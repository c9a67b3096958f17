use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration, built once at process start and passed into
/// each component.
///
/// Sources, in ascending precedence: built-in defaults, an optional
/// `config.yaml` next to the binary, then `CATALOG_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// GraphQL endpoint of the vendor catalog.
    pub api_url: String,
    /// Region code used for catalog queries and price selection.
    pub region: String,
    /// Locale code used for catalog queries.
    pub locale: String,
    /// Default destination for the generated output artifact.
    pub output_path: PathBuf,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("database_url", "catalog.db")?
            .set_default("api_url", "https://shop.example.com/api/graphql")?
            .set_default("region", "no")?
            .set_default("locale", "en-us")?
            .set_default("output_path", "output/products.txt")?
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CATALOG"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.database_url, "catalog.db");
        assert_eq!(config.region, "no");
        assert_eq!(config.locale, "en-us");
        assert_eq!(config.output_path, PathBuf::from("output/products.txt"));
    }
}
