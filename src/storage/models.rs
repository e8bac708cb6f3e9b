use serde::{Deserialize, Serialize};

/// A short link owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    /// Public lookup key, globally unique, immutable once assigned
    pub slug: String,
    pub label: String,
    pub destination: String,
    pub owner_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// One redirect traversal. Append-only, never mutated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanEvent {
    pub id: String,
    pub link_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Request metadata captured at redirect time. Every field is optional;
/// absence never fails the scan write.
#[derive(Debug, Clone, Default)]
pub struct ScanMetadata {
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
}

/// Per-link analytics bundle: the link, a bounded recent-scan preview,
/// and the full-history scan count (not the preview size).
#[derive(Debug, Clone, Serialize)]
pub struct LinkAnalytics {
    pub link: Link,
    pub recent_scans: Vec<ScanEvent>,
    pub total_scans: u64,
}
