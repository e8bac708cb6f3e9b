//! Scan logger
//!
//! Pure append of scan events. No read-modify-write, no deduplication,
//! no batching.

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::errors::Result;
use crate::storage::{ScanEvent, ScanMetadata, SeaOrmStorage};

pub struct ScanLogger {
    storage: Arc<SeaOrmStorage>,
}

impl ScanLogger {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Append one scan event for `link_id`.
    ///
    /// The id and timestamp are assigned here, never by the caller. Empty
    /// metadata strings are normalized to absent so "no data" and "empty
    /// value" stay indistinguishable. Fails with `NotFound` only when
    /// `link_id` references no link.
    pub async fn log_scan(&self, link_id: &str, metadata: ScanMetadata) -> Result<ScanEvent> {
        let event = ScanEvent {
            id: uuid::Uuid::new_v4().to_string(),
            link_id: link_id.to_string(),
            created_at: Utc::now(),
            ip: normalize(metadata.ip),
            user_agent: normalize(metadata.user_agent),
            referer: normalize(metadata.referer),
        };

        self.storage.insert_scan_event(&event).await?;

        debug!("Scan recorded for link {}", link_id);
        Ok(event)
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
