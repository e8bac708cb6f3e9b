//! Analytics service tests
//!
//! Preview cap, full-history counts, ordering, and owner isolation.

mod common;

use chrono::{Duration, Utc};

use scanlink::errors::ScanlinkError;
use scanlink::services::analytics_service::RECENT_SCANS_LIMIT;
use scanlink::services::{AnalyticsService, CreateLinkRequest, LinkService};
use scanlink::storage::{ScanEvent, SeaOrmStorage};

use common::{insert_user, setup_storage};

async fn create_link(storage: &std::sync::Arc<SeaOrmStorage>, owner: &str, label: &str) -> scanlink::storage::Link {
    LinkService::new(storage.clone())
        .create_link(
            owner,
            CreateLinkRequest {
                label: label.to_string(),
                destination: "https://example.com".to_string(),
            },
        )
        .await
        .expect("create failed")
}

/// Insert a scan with a controlled timestamp
async fn insert_scan(storage: &SeaOrmStorage, link_id: &str, n: i64) {
    let event = ScanEvent {
        id: format!("scan-{}-{}", link_id, n),
        link_id: link_id.to_string(),
        created_at: Utc::now() + Duration::seconds(n),
        ip: Some(format!("203.0.113.{}", (n % 250) + 1)),
        user_agent: None,
        referer: None,
    };
    storage.insert_scan_event(&event).await.expect("scan insert failed");
}

#[actix_rt::test]
async fn test_unknown_owner_is_not_found() {
    let (storage, _dir) = setup_storage().await;
    let service = AnalyticsService::new(storage.clone());

    let result = service.get_analytics("ghost").await;
    assert!(matches!(result, Err(ScanlinkError::NotFound(_))));
}

#[actix_rt::test]
async fn test_owner_with_no_links_gets_empty_bundles() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = AnalyticsService::new(storage.clone());

    let bundles = service.get_analytics("u1").await.expect("analytics failed");
    assert!(bundles.is_empty());
}

#[actix_rt::test]
async fn test_recent_scans_capped_total_is_full_history() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let link = create_link(&storage, "u1", "Busy").await;

    for n in 0..12 {
        insert_scan(&storage, &link.id, n).await;
    }

    let service = AnalyticsService::new(storage.clone());
    let bundles = service.get_analytics("u1").await.expect("analytics failed");
    assert_eq!(bundles.len(), 1);

    let bundle = &bundles[0];
    // Preview is capped, the count is not
    assert_eq!(bundle.recent_scans.len(), RECENT_SCANS_LIMIT as usize);
    assert_eq!(bundle.total_scans, 12);

    // Newest first, and the preview holds the 10 newest (n = 11..=2)
    assert_eq!(bundle.recent_scans[0].id, format!("scan-{}-11", link.id));
    assert_eq!(
        bundle.recent_scans[RECENT_SCANS_LIMIT as usize - 1].id,
        format!("scan-{}-2", link.id)
    );
    for window in bundle.recent_scans.windows(2) {
        assert!(window[0].created_at >= window[1].created_at);
    }
}

#[actix_rt::test]
async fn test_links_without_scans_count_zero() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    create_link(&storage, "u1", "Quiet").await;

    let service = AnalyticsService::new(storage.clone());
    let bundles = service.get_analytics("u1").await.expect("analytics failed");

    assert_eq!(bundles.len(), 1);
    assert_eq!(bundles[0].total_scans, 0);
    assert!(bundles[0].recent_scans.is_empty());
}

#[actix_rt::test]
async fn test_bundles_are_owner_scoped() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    insert_user(&storage, "u2", "u2@example.com").await;

    let mine = create_link(&storage, "u1", "Mine").await;
    let theirs = create_link(&storage, "u2", "Theirs").await;

    insert_scan(&storage, &mine.id, 0).await;
    insert_scan(&storage, &theirs.id, 0).await;
    insert_scan(&storage, &theirs.id, 1).await;

    let service = AnalyticsService::new(storage.clone());

    let u1_bundles = service.get_analytics("u1").await.expect("analytics failed");
    assert_eq!(u1_bundles.len(), 1);
    assert_eq!(u1_bundles[0].link.id, mine.id);
    assert_eq!(u1_bundles[0].total_scans, 1);

    let u2_bundles = service.get_analytics("u2").await.expect("analytics failed");
    assert_eq!(u2_bundles.len(), 1);
    assert_eq!(u2_bundles[0].link.id, theirs.id);
    assert_eq!(u2_bundles[0].total_scans, 2);
}

#[actix_rt::test]
async fn test_scan_counts_do_not_bleed_between_links() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;

    let first = create_link(&storage, "u1", "First").await;
    let second = create_link(&storage, "u1", "Second").await;

    for n in 0..4 {
        insert_scan(&storage, &first.id, n).await;
    }
    insert_scan(&storage, &second.id, 0).await;

    let service = AnalyticsService::new(storage.clone());
    let bundles = service.get_analytics("u1").await.expect("analytics failed");
    assert_eq!(bundles.len(), 2);

    let first_bundle = bundles.iter().find(|b| b.link.id == first.id).unwrap();
    let second_bundle = bundles.iter().find(|b| b.link.id == second.id).unwrap();
    assert_eq!(first_bundle.total_scans, 4);
    assert_eq!(second_bundle.total_scans, 1);
}
