//! Collection stage: catalog API -> relational store.

use std::collections::HashSet;

use crate::api::CatalogApi;
use crate::domain::product::NewProduct;
use crate::domain::types::ProductUid;
use crate::repository::ProductWriter;
use crate::services::ServiceResult;

/// A product that could not be collected during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFailure {
    pub uid: String,
    pub error: String,
}

/// Tally of one collection run.
#[derive(Debug, Default)]
pub struct CollectionReport {
    /// Number of products stored or refreshed.
    pub collected: usize,
    pub failures: Vec<CollectionFailure>,
}

/// Runs one full collection pass: fetch the product index, then fetch and
/// upsert each product.
///
/// A failing index fetch aborts the run. A failure on a single product
/// (detail fetch, mapping or storage) is logged, recorded in the report and
/// skipped; previously stored products stay committed.
pub fn collect_all<A, R>(api: &A, repo: &R, limit: Option<usize>) -> ServiceResult<CollectionReport>
where
    A: CatalogApi,
    R: ProductWriter,
{
    let summaries = api.list_products()?;
    log::info!("Catalog index returned {} products", summaries.len());

    let mut seen: HashSet<String> = HashSet::new();
    let mut report = CollectionReport::default();

    for summary in summaries {
        if limit.is_some_and(|limit| report.collected >= limit) {
            log::info!("Reached limit of {} products", report.collected);
            break;
        }

        let uid = summary.uid.trim();
        if uid.is_empty() {
            log::warn!("Skipping index entry without uid (url: {})", summary.url);
            continue;
        }
        // The upstream grid can repeat entries across pages.
        if !seen.insert(uid.to_string()) {
            continue;
        }

        match collect_product(api, repo, uid) {
            Ok(stored) => {
                log::info!("Stored product {stored}");
                report.collected += 1;
            }
            Err(error) => {
                log::error!("Failed to collect product {uid}: {error}");
                report.failures.push(CollectionFailure {
                    uid: uid.to_string(),
                    error: error.to_string(),
                });
            }
        }
    }

    log::info!(
        "Collected {} products ({} failures)",
        report.collected,
        report.failures.len()
    );
    Ok(report)
}

fn collect_product<A, R>(api: &A, repo: &R, uid: &str) -> ServiceResult<ProductUid>
where
    A: CatalogApi,
    R: ProductWriter,
{
    let detail = api.get_product_detail(uid)?;
    let product = NewProduct::try_from(detail)?;
    let stored = repo.upsert_product(&product)?;
    Ok(stored.uid)
}
