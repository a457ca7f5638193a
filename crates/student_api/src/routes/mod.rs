pub mod health;
pub mod students;

use crate::error::ApiError;
use actix_web::web::{self, ServiceConfig};
use actix_web::{HttpRequest, HttpResponse};

/// Upper bound for JSON request bodies.
const MAX_JSON_BODY_BYTES: usize = 16 * 1024;

/// Registers extractor configs and every route on an app or scope.
pub fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .service(health::health_routes())
        .service(students::students_routes());
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    Err(ApiError::RouteNotFound(format!(
        "{} {}",
        req.method(),
        req.path()
    )))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(MAX_JSON_BODY_BYTES)
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into())
}

fn path_config() -> web::PathConfig {
    web::PathConfig::default()
        .error_handler(|err, _req| ApiError::MalformedRequest(err.to_string()).into())
}
