use actix_web::{get, HttpResponse, Responder};
use serde_json::json;

/// Liveness probe.
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok"
    }))
}
