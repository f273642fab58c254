use actix_web::{HttpResponse, get, web};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::catalog::Catalog;

use super::{APIError, ApiKey};

/// Query parameters for a search. Filters the catalog has no use for
/// (`image_type`, `orientation`, `safesearch`) are accepted and ignored.
#[derive(Deserialize)]
pub struct SearchParams {
    key: Option<String>,
    #[serde(default)]
    q: String,
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_per_page")]
    per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

#[tracing::instrument(skip(params, catalog, api_key), fields(q = %params.q, page = params.page))]
#[get("/")]
pub async fn search_images(
    params: web::Query<SearchParams>,
    catalog: web::Data<Catalog>,
    api_key: web::Data<ApiKey>,
) -> Result<HttpResponse, APIError> {
    let params = params.into_inner();
    if params.key.as_deref() != Some(api_key.0.expose_secret()) {
        return Err(APIError::InvalidKey);
    }

    let results = catalog.page(&params.q, params.page, params.per_page)?;
    tracing::debug!(
        total_hits = results.total_hits,
        returned = results.hits.len(),
        "served page"
    );
    Ok(HttpResponse::Ok().json(results))
}
