//! Server mode
//!
//! Configures and starts the HTTP server with all routes: the
//! authenticated JSON API, the health endpoint, and the public redirect
//! path.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::Result;
use tracing::warn;

use crate::api::jwt::JwtService;
use crate::api::middleware::ApiAuth;
use crate::api::services::{
    AppStartTime, ErrorCode, api_routes, health_routes, helpers, redirect_routes,
};
use crate::config::{CorsConfig, get_config};
use crate::services::{AnalyticsService, LinkService, ScanLogger};
use crate::storage::SeaOrmStorage;
use crate::storage::backend::infer_backend_from_url;

/// Build CORS middleware from configuration
///
/// Disabled means the browser's default same-origin policy.
fn build_cors_middleware(cors_config: &CorsConfig) -> Cors {
    if !cors_config.enabled {
        return Cors::default();
    }

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec!["Content-Type", "Authorization", "Accept"])
        .max_age(3600);

    if cors_config.allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_any_origin();
    } else {
        for origin in &cors_config.allowed_origins {
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}

/// Run the HTTP server
///
/// **Note**: configuration and logging must be initialized before calling
/// this function.
pub async fn run_server() -> Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    let config = get_config();

    let backend_name = infer_backend_from_url(&config.database.url)?;
    let storage = Arc::new(SeaOrmStorage::new(&config.database.url, &backend_name).await?);

    let link_service = Arc::new(LinkService::new(storage.clone()));
    let scan_logger = Arc::new(ScanLogger::new(storage.clone()));
    let analytics_service = Arc::new(AnalyticsService::new(storage.clone()));

    if config.auth.jwt_secret.is_empty() {
        warn!("auth.jwt_secret is empty - every authenticated API call will be rejected");
    }
    let jwt_service = Arc::new(JwtService::new(
        &config.auth.jwt_secret,
        config.auth.access_token_minutes,
    ));

    let cors_config = config.cors.clone();
    let cpu_count = config.server.cpu_count.min(32);

    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);

    let server = HttpServer::new(move || {
        let cors = build_cors_middleware(&cors_config);

        App::new()
            .wrap(cors)
            .wrap(Compress::default())
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(link_service.clone()))
            .app_data(web::Data::new(scan_logger.clone()))
            .app_data(web::Data::new(analytics_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .app_data(web::PayloadConfig::new(64 * 1024))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                let response = helpers::error_response(
                    actix_web::http::StatusCode::BAD_REQUEST,
                    ErrorCode::BadRequest,
                    "Invalid payload",
                );
                actix_web::error::InternalError::from_response(err, response).into()
            }))
            .service(api_routes().wrap(ApiAuth::new(jwt_service.clone())))
            .service(health_routes())
            .service(redirect_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .bind(bind_address)?
    .run();

    server.await?;

    Ok(())
}
