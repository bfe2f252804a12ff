use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    storage: &'static str,
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Checks the upload directory is there to write into
#[get("/ready")]
pub async fn readiness(data: web::Data<AppState>) -> impl Responder {
    if data.file_store.is_available().await {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            storage: "ok",
        })
    } else {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            storage: "unhealthy",
        })
    }
}
