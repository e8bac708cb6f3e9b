//! Link registry service
//!
//! Owns the slug -> link mapping: validates creation requests, assigns
//! slugs, and lists links per owner.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::errors::{Result, ScanlinkError};
use crate::storage::{Link, SeaOrmStorage};
use crate::utils::generate_slug;
use crate::utils::url_validator::validate_url;

/// Slug assignment makes at most this many attempts before giving up with a
/// conflict. Deliberately small and non-adaptive: at 2^32 possible slugs,
/// three collisions in a row mean the keyspace is effectively saturated and
/// a longer loop would not help.
pub const SLUG_ATTEMPTS: usize = 3;

/// Request to create a new link
#[derive(Debug, Clone)]
pub struct CreateLinkRequest {
    pub label: String,
    pub destination: String,
}

/// Service for link registry operations
pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
}

impl LinkService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Create a new link owned by `owner_id`.
    ///
    /// Validation happens before any write: the label must be non-empty and
    /// the destination a valid absolute http(s) URL. The owner must resolve
    /// to an existing user.
    pub async fn create_link(&self, owner_id: &str, req: CreateLinkRequest) -> Result<Link> {
        self.create_link_with(owner_id, req, generate_slug).await
    }

    /// Like [`create_link`], with the slug candidate source injected.
    ///
    /// [`create_link`]: Self::create_link
    pub async fn create_link_with(
        &self,
        owner_id: &str,
        req: CreateLinkRequest,
        mut next_slug: impl FnMut() -> String,
    ) -> Result<Link> {
        let label = req.label.trim();
        if label.is_empty() {
            return Err(ScanlinkError::validation("Label must not be empty"));
        }

        validate_url(&req.destination)
            .map_err(|e| ScanlinkError::validation(e.to_string()))?;

        if !self.storage.owner_exists(owner_id).await? {
            return Err(ScanlinkError::not_found(format!(
                "Owner '{}' does not exist",
                owner_id
            )));
        }

        for attempt in 1..=SLUG_ATTEMPTS {
            let candidate = next_slug();

            // Cheap pre-check; the unique index on links.slug is the source
            // of truth and catches races between the check and the insert.
            if self.storage.slug_exists(&candidate).await? {
                debug!(
                    "Slug candidate '{}' taken (attempt {}/{})",
                    candidate, attempt, SLUG_ATTEMPTS
                );
                continue;
            }

            let new_link = Link {
                id: uuid::Uuid::new_v4().to_string(),
                slug: candidate,
                label: label.to_string(),
                destination: req.destination.clone(),
                owner_id: owner_id.to_string(),
                created_at: Utc::now(),
            };

            match self.storage.insert_link(&new_link).await {
                Ok(()) => {
                    info!(
                        "LinkService: created '{}' -> '{}' for owner {}",
                        new_link.slug, new_link.destination, owner_id
                    );
                    return Ok(new_link);
                }
                // Lost a race on this candidate; costs one attempt like a
                // pre-check hit
                Err(ScanlinkError::Conflict(msg)) => {
                    debug!("{} (attempt {}/{})", msg, attempt, SLUG_ATTEMPTS);
                }
                Err(e) => return Err(e),
            }
        }

        Err(ScanlinkError::conflict(format!(
            "Could not assign a unique slug within {} attempts",
            SLUG_ATTEMPTS
        )))
    }

    /// All links owned by `owner_id`, newest first. Never returns another
    /// owner's links.
    pub async fn list_links(&self, owner_id: &str) -> Result<Vec<Link>> {
        self.storage.list_links_by_owner(owner_id).await
    }
}
