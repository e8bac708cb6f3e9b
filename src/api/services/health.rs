//! Health check endpoint

use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use tracing::{error, trace};

use crate::storage::SeaOrmStorage;

/// Application start time, recorded once at startup
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        storage: web::Data<Arc<SeaOrmStorage>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let db_status =
            match tokio::time::timeout(Duration::from_secs(5), storage.get_db().ping()).await {
                Ok(Ok(())) => json!({
                    "status": "healthy",
                    "backend": storage.backend_name(),
                }),
                Ok(Err(e)) => {
                    error!("Database health check failed: {}", e);
                    json!({
                        "status": "unhealthy",
                        "error": "ping failed",
                        "backend": storage.backend_name(),
                    })
                }
                Err(_) => {
                    error!("Database health check timeout");
                    json!({
                        "status": "unhealthy",
                        "error": "timeout",
                        "backend": storage.backend_name(),
                    })
                }
            };

        let now = chrono::Utc::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;
        let is_healthy = db_status["status"] == "healthy";

        let response_status = if is_healthy {
            actix_web::http::StatusCode::OK
        } else {
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE
        };

        HttpResponse::build(response_status).json(json!({
            "status": if is_healthy { "healthy" } else { "unhealthy" },
            "timestamp": now.to_rfc3339(),
            "uptime": uptime_seconds,
            "checks": {
                "database": db_status,
            },
            "response_time_ms": start_time.elapsed().as_millis(),
        }))
    }
}

/// Health route configuration
pub fn health_routes() -> actix_web::Scope {
    web::scope("/healthz")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
}
