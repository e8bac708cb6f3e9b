//! Redirect service
//!
//! The only request-time hot path: slug in, scan event appended, 307 out.
//! The scan write is awaited before the redirect is issued; if the write
//! fails the request fails and no redirect happens.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use tracing::{debug, error, trace};

use crate::services::ScanLogger;
use crate::storage::{ScanMetadata, SeaOrmStorage};
use crate::utils::ip::extract_client_ip;
use crate::utils::is_valid_slug;

pub struct RedirectService {}

impl RedirectService {
    pub async fn handle_redirect(
        req: HttpRequest,
        path: web::Path<String>,
        storage: web::Data<Arc<SeaOrmStorage>>,
        scan_logger: web::Data<Arc<ScanLogger>>,
    ) -> impl Responder {
        let slug = path.into_inner();

        if !is_valid_slug(&slug) {
            // Malformed slug, 404 without a storage query
            trace!("Invalid slug rejected: {}", &slug);
            return Self::not_found_response();
        }

        let link = match storage.get_link_by_slug(&slug).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                debug!("Redirect link not found: {}", &slug);
                return Self::not_found_response();
            }
            Err(e) => {
                error!("Database error during redirect lookup: {}", e);
                return Self::error_response();
            }
        };

        // Record the scan before redirecting. Ordering is load-bearing:
        // a failed write means a failed request, not a silent redirect.
        let metadata = Self::extract_metadata(&req);
        if let Err(e) = scan_logger.log_scan(&link.id, metadata).await {
            error!("Scan write failed for '{}': {}", &slug, e);
            return Self::error_response();
        }

        Self::finish_redirect(link.destination)
    }

    /// Capture requester metadata from the inbound request headers
    fn extract_metadata(req: &HttpRequest) -> ScanMetadata {
        let header = |name: &str| {
            req.headers()
                .get(name)
                .and_then(|h| h.to_str().ok())
                .map(String::from)
        };

        ScanMetadata {
            ip: extract_client_ip(req),
            user_agent: header("user-agent"),
            referer: header("referer"),
        }
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::build(StatusCode::NOT_FOUND)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .insert_header(("Cache-Control", "public, max-age=60"))
            .body("Not Found")
    }

    #[inline]
    fn error_response() -> HttpResponse {
        HttpResponse::build(StatusCode::INTERNAL_SERVER_ERROR)
            .insert_header(("Content-Type", "text/html; charset=utf-8"))
            .body("Internal Server Error")
    }

    /// Temporary redirect: slugs may be repointed some day, and a 308/301
    /// would let clients cache the target against that.
    fn finish_redirect(destination: String) -> HttpResponse {
        HttpResponse::build(StatusCode::TEMPORARY_REDIRECT)
            .insert_header(("Location", destination))
            .finish()
    }
}

/// Redirect route configuration
pub fn redirect_routes() -> actix_web::Scope {
    web::scope("")
        .route("/{slug}", web::get().to(RedirectService::handle_redirect))
        .route("/{slug}", web::head().to(RedirectService::handle_redirect))
}
