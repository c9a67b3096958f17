//! Blocking GraphQL client for the vendor catalog endpoint.
//!
//! The endpoint exposes two logical operations: listing the product grid and
//! fetching full detail for a single product. Both are plain HTTPS POSTs with
//! a JSON body; no timeout or retry semantics beyond the HTTP client
//! defaults.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::product::{ProductDetail, ProductSummary};
use crate::models::config::AppConfig;

pub mod queries;

/// Errors surfaced by catalog API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),
    /// The response carried a GraphQL `errors` array.
    #[error("graphql error: {0}")]
    GraphQL(String),
    /// The response was 2xx but carried no `data` object.
    #[error("response missing data for operation {0}")]
    MissingData(&'static str),
}

/// Convenient alias for results returned from API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// The two catalog operations the collector depends on.
///
/// Kept behind a trait so collection logic can be exercised against a stub
/// without a network.
pub trait CatalogApi {
    /// Fetch the lightweight product index.
    fn list_products(&self) -> ApiResult<Vec<ProductSummary>>;
    /// Fetch the full record for a single product.
    fn get_product_detail(&self, uid: &str) -> ApiResult<ProductDetail>;
}

#[derive(Serialize)]
struct GraphQLRequest<'a, V: Serialize> {
    query: &'a str,
    variables: V,
    #[serde(rename = "operationName")]
    operation_name: &'a str,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQLErrorEntry>,
}

#[derive(Deserialize)]
struct GraphQLErrorEntry {
    message: String,
}

/// Client for the vendor's GraphQL endpoint.
pub struct GraphQLClient {
    http: reqwest::blocking::Client,
    url: String,
    region: String,
    locale: String,
}

impl GraphQLClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            url: config.api_url.clone(),
            region: config.region.clone(),
            locale: config.locale.clone(),
        }
    }

    /// Executes one GraphQL operation and unwraps the response envelope.
    fn execute<V, T>(&self, query: &str, operation_name: &'static str, variables: V) -> ApiResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        log::debug!("Executing GraphQL operation {operation_name}");

        let response = self
            .http
            .post(&self.url)
            .json(&GraphQLRequest {
                query,
                variables,
                operation_name,
            })
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body: GraphQLResponse<T> = response.json()?;

        if !body.errors.is_empty() {
            let messages = body
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(ApiError::GraphQL(messages));
        }

        body.data.ok_or(ApiError::MissingData(operation_name))
    }
}

#[derive(Deserialize)]
struct ListProductsData {
    products: Vec<ProductSummary>,
}

#[derive(Deserialize)]
struct GetProductData {
    product: Option<ProductDetail>,
}

impl CatalogApi for GraphQLClient {
    fn list_products(&self) -> ApiResult<Vec<ProductSummary>> {
        let data: ListProductsData = self.execute(
            queries::LIST_PRODUCTS,
            "ListProducts",
            serde_json::json!({
                "region": self.region,
                "locale": self.locale,
            }),
        )?;
        Ok(data.products)
    }

    fn get_product_detail(&self, uid: &str) -> ApiResult<ProductDetail> {
        let data: GetProductData = self.execute(
            queries::GET_PRODUCT,
            "GetProduct",
            serde_json::json!({
                "uid": uid,
                "region": self.region,
                "locale": self.locale,
            }),
        )?;
        data.product.ok_or(ApiError::MissingData("GetProduct"))
    }
}
