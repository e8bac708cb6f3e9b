//! Link API handlers

use std::sync::Arc;

use actix_web::{HttpResponse, Responder, Result as ActixResult, web};
use tracing::{info, trace};

use crate::api::middleware::OwnerId;
use crate::services::{CreateLinkRequest, LinkService};

use super::helpers::{created_response, error_from_scanlink, success_response};
use super::types::{CreateLinkPayload, LinkResponse};

/// Create a new link for the authenticated owner
pub async fn post_link(
    owner: OwnerId,
    payload: web::Json<CreateLinkPayload>,
    link_service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    info!(
        "API: create link request - label: {}, destination: {}",
        payload.label, payload.destination
    );

    let request = CreateLinkRequest {
        label: payload.label,
        destination: payload.destination,
    };

    let response: HttpResponse = match link_service.create_link(owner.as_str(), request).await {
        Ok(link) => created_response(LinkResponse::from(link)),
        Err(e) => error_from_scanlink(&e),
    };

    Ok(response)
}

/// List the authenticated owner's links, newest first
pub async fn get_links(
    owner: OwnerId,
    link_service: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    trace!("API: list links for owner {}", owner.as_str());

    let response: HttpResponse = match link_service.list_links(owner.as_str()).await {
        Ok(links) => {
            let links: Vec<LinkResponse> = links.into_iter().map(LinkResponse::from).collect();
            success_response(links)
        }
        Err(e) => error_from_scanlink(&e),
    };

    Ok(response)
}
