pub mod search;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, http::StatusCode, web,
};
use secrecy::SecretString;

use crate::catalog::CatalogError;

/// The key clients must present, shared with every worker.
pub struct ApiKey(pub SecretString);

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("/api")
        .service(health_check)
        .service(search::search_images)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Errors are plain text bodies in the same shape the remote API uses.
#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("[ERROR 400] Invalid or missing API key")]
    InvalidKey,
    #[error("[ERROR 400] {0}")]
    BadRequest(#[from] CatalogError),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
