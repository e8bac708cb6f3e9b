//! Analytics API handlers

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use tracing::trace;

use crate::api::middleware::OwnerId;
use crate::services::AnalyticsService;

use super::helpers::{error_from_scanlink, success_response};
use super::types::LinkAnalyticsResponse;

/// Per-link analytics bundles for the authenticated owner
pub async fn get_analytics(
    owner: OwnerId,
    analytics_service: web::Data<Arc<AnalyticsService>>,
) -> ActixResult<impl Responder> {
    trace!("API: analytics for owner {}", owner.as_str());

    let response: HttpResponse = match analytics_service.get_analytics(owner.as_str()).await {
        Ok(bundles) => {
            let bundles: Vec<LinkAnalyticsResponse> = bundles
                .into_iter()
                .map(LinkAnalyticsResponse::from)
                .collect();
            success_response(bundles)
        }
        Err(e) => error_from_scanlink(&e),
    };

    Ok(response)
}
