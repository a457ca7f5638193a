use actix_web::{web, HttpResponse, Resource};
use serde_json::json;
use student_core::core_version;

pub fn health_routes() -> Resource {
    web::resource("/health").route(web::get().to(health))
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "version": core_version()
    }))
}
