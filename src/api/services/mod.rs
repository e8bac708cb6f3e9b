pub mod analytics;
pub mod error_code;
pub mod health;
pub mod helpers;
pub mod links;
pub mod redirect;
pub mod types;

use actix_web::web;

pub use error_code::ErrorCode;
pub use health::{AppStartTime, health_routes};
pub use redirect::redirect_routes;
pub use types::ApiResponse;

/// Authenticated JSON API `/api`
///
/// - POST /api/links - create a link
/// - GET /api/links - list the caller's links
/// - GET /api/analytics - per-link scan analytics
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api")
        .route("/links", web::post().to(links::post_link))
        .route("/links", web::get().to(links::get_links))
        .route("/analytics", web::get().to(analytics::get_analytics))
}
