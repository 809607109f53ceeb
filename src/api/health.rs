use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::database::Store;

pub const LIVENESS_MESSAGE: &str = "Perfect Fit server is running";

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (
            status = 200,
            description = "Plain-text liveness message",
            body = String,
            content_type = "text/plain"
        )
    )
)]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (
            status = 200,
            description = "Service health including database reachability",
            body = HealthResponse
        )
    )
)]
pub async fn health_check(store: web::Data<dyn Store>) -> impl Responder {
    let database_up = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            log::warn!("⚠️  Health check: database ping failed: {}", e);
            false
        }
    };

    HttpResponse::Ok().json(HealthResponse {
        status: if database_up { "healthy" } else { "degraded" }.to_string(),
        service: "perfect-fit-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if database_up { "up" } else { "down" }.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
