//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations. Inserts only: links
//! are immutable in current scope and scan events are append-only.

use sea_orm::{EntityTrait, SqlErr};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{link_to_active_model, scan_event_to_active_model};
use crate::errors::{Result, ScanlinkError};
use crate::storage::{Link, ScanEvent};

use migration::entities::{link, scan_event};

impl SeaOrmStorage {
    /// Insert a new link.
    ///
    /// The unique index on `links.slug` guards the insert: when two
    /// concurrent creations picked the same candidate slug, exactly one
    /// insert succeeds and the other surfaces here as `Conflict` - never as
    /// a duplicate slug.
    pub async fn insert_link(&self, new_link: &Link) -> Result<()> {
        let active_model = link_to_active_model(new_link);

        match link::Entity::insert(active_model).exec(&self.db).await {
            Ok(_) => {
                info!("Link created: {} -> {}", new_link.slug, new_link.destination);
                Ok(())
            }
            Err(e) => match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(ScanlinkError::conflict(
                    format!("Slug '{}' is already taken", new_link.slug),
                )),
                _ => Err(ScanlinkError::database_operation(format!(
                    "Failed to insert link '{}': {}",
                    new_link.slug, e
                ))),
            },
        }
    }

    /// Append one scan event.
    ///
    /// The foreign key on `scan_events.link_id` backs the service-level
    /// link-exists check against races it cannot see.
    pub async fn insert_scan_event(&self, event: &ScanEvent) -> Result<()> {
        let active_model = scan_event_to_active_model(event);

        match scan_event::Entity::insert(active_model).exec(&self.db).await {
            Ok(_) => Ok(()),
            Err(e) => match e.sql_err() {
                Some(SqlErr::ForeignKeyConstraintViolation(_)) => Err(ScanlinkError::not_found(
                    format!("Link '{}' does not exist", event.link_id),
                )),
                _ => Err(ScanlinkError::database_operation(format!(
                    "Failed to record scan for link '{}': {}",
                    event.link_id, e
                ))),
            },
        }
    }
}
