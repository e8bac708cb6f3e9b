//! Owner-scoped analytics queries
//!
//! Bundles each owned link with a bounded recent-scan preview and the
//! full-history scan count.

use std::sync::Arc;

use tracing::debug;

use crate::errors::{Result, ScanlinkError};
use crate::storage::{LinkAnalytics, SeaOrmStorage};

/// Bounded preview size. The total count is always computed over the full
/// history, independent of this cap.
pub const RECENT_SCANS_LIMIT: u64 = 10;

pub struct AnalyticsService {
    storage: Arc<SeaOrmStorage>,
}

impl AnalyticsService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// One bundle per link owned by `owner_id`, newest link first.
    pub async fn get_analytics(&self, owner_id: &str) -> Result<Vec<LinkAnalytics>> {
        if !self.storage.owner_exists(owner_id).await? {
            return Err(ScanlinkError::not_found(format!(
                "Owner '{}' does not exist",
                owner_id
            )));
        }

        let links = self.storage.list_links_by_owner(owner_id).await?;
        let mut bundles = Vec::with_capacity(links.len());

        for link in links {
            let recent_scans = self
                .storage
                .recent_scans(&link.id, RECENT_SCANS_LIMIT)
                .await?;
            let total_scans = self.storage.count_scans(&link.id).await?;

            bundles.push(LinkAnalytics {
                link,
                recent_scans,
                total_scans,
            });
        }

        debug!(
            "Analytics: {} link bundles for owner {}",
            bundles.len(),
            owner_id
        );
        Ok(bundles)
    }
}
