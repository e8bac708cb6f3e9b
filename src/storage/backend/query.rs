//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect};

use super::SeaOrmStorage;
use super::converters::{model_to_link, model_to_scan_event};
use crate::errors::{Result, ScanlinkError};
use crate::storage::{Link, ScanEvent};

use migration::entities::{link, scan_event, user};

impl SeaOrmStorage {
    /// Look up a link by its public slug
    pub async fn get_link_by_slug(&self, slug: &str) -> Result<Option<Link>> {
        let model = link::Entity::find()
            .filter(link::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| {
                ScanlinkError::database_operation(format!("Slug lookup failed ({}): {}", slug, e))
            })?;

        Ok(model.map(model_to_link))
    }

    /// All links owned by one user, newest first
    pub async fn list_links_by_owner(&self, owner_id: &str) -> Result<Vec<Link>> {
        let models = link::Entity::find()
            .filter(link::Column::OwnerId.eq(owner_id))
            .order_by_desc(link::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ScanlinkError::database_operation(format!("Owner listing failed: {}", e))
            })?;

        Ok(models.into_iter().map(model_to_link).collect())
    }

    /// Whether a slug is already taken.
    ///
    /// Optimization only; the unique index on `links.slug` is the source
    /// of truth.
    pub async fn slug_exists(&self, slug: &str) -> Result<bool> {
        let count = link::Entity::find()
            .filter(link::Column::Slug.eq(slug))
            .count(&self.db)
            .await
            .map_err(|e| {
                ScanlinkError::database_operation(format!("Slug existence check failed: {}", e))
            })?;

        Ok(count > 0)
    }

    /// Whether the owner id resolves to a user row
    pub async fn owner_exists(&self, owner_id: &str) -> Result<bool> {
        let count = user::Entity::find_by_id(owner_id)
            .count(&self.db)
            .await
            .map_err(|e| {
                ScanlinkError::database_operation(format!("Owner existence check failed: {}", e))
            })?;

        Ok(count > 0)
    }

    /// Most recent scan events for one link, newest first, bounded by `limit`
    pub async fn recent_scans(&self, link_id: &str, limit: u64) -> Result<Vec<ScanEvent>> {
        let models = scan_event::Entity::find()
            .filter(scan_event::Column::LinkId.eq(link_id))
            .order_by_desc(scan_event::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| {
                ScanlinkError::database_operation(format!("Recent scan query failed: {}", e))
            })?;

        Ok(models.into_iter().map(model_to_scan_event).collect())
    }

    /// Full-history scan count for one link, independent of any preview cap
    pub async fn count_scans(&self, link_id: &str) -> Result<u64> {
        scan_event::Entity::find()
            .filter(scan_event::Column::LinkId.eq(link_id))
            .count(&self.db)
            .await
            .map_err(|e| ScanlinkError::database_operation(format!("Scan count failed: {}", e)))
    }
}
