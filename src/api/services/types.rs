//! API type definitions

use serde::{Deserialize, Serialize};

use crate::storage::{Link, LinkAnalytics, ScanEvent};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// Request body for link creation
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CreateLinkPayload {
    pub label: String,
    pub destination: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkResponse {
    pub id: String,
    pub slug: String,
    pub label: String,
    pub destination: String,
    pub owner_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            slug: link.slug,
            label: link.label,
            destination: link.destination,
            owner_id: link.owner_id,
            created_at: link.created_at,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScanEventResponse {
    pub id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

impl From<ScanEvent> for ScanEventResponse {
    fn from(event: ScanEvent) -> Self {
        Self {
            id: event.id,
            created_at: event.created_at,
            ip: event.ip,
            user_agent: event.user_agent,
            referer: event.referer,
        }
    }
}

/// Per-link analytics bundle as served to the owner
#[derive(Serialize, Clone, Debug)]
pub struct LinkAnalyticsResponse {
    pub link: LinkResponse,
    pub recent_scans: Vec<ScanEventResponse>,
    pub total_scans: u64,
}

impl From<LinkAnalytics> for LinkAnalyticsResponse {
    fn from(bundle: LinkAnalytics) -> Self {
        Self {
            link: bundle.link.into(),
            recent_scans: bundle
                .recent_scans
                .into_iter()
                .map(ScanEventResponse::from)
                .collect(),
            total_scans: bundle.total_scans,
        }
    }
}
