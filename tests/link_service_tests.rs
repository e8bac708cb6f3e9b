//! Link registry tests
//!
//! Covers slug assignment, the bounded collision retry, validation
//! ordering (nothing persists on invalid input), and owner isolation.

mod common;

use std::collections::HashSet;

use chrono::{Duration, Utc};

use scanlink::errors::ScanlinkError;
use scanlink::services::link_service::SLUG_ATTEMPTS;
use scanlink::services::{CreateLinkRequest, LinkService};
use scanlink::storage::Link;
use scanlink::utils::is_valid_slug;

use common::{insert_user, setup_storage};

fn request(label: &str, destination: &str) -> CreateLinkRequest {
    CreateLinkRequest {
        label: label.to_string(),
        destination: destination.to_string(),
    }
}

#[actix_rt::test]
async fn test_create_link_assigns_hex_slug() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    let link = service
        .create_link("u1", request("Blog", "https://example.com/blog"))
        .await
        .expect("create failed");

    assert!(is_valid_slug(&link.slug), "unexpected slug: {}", link.slug);
    assert_eq!(link.destination, "https://example.com/blog");
    assert_eq!(link.label, "Blog");
    assert_eq!(link.owner_id, "u1");
    assert!(!link.id.is_empty());
}

#[actix_rt::test]
async fn test_created_slugs_are_unique() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    let mut seen = HashSet::new();
    for i in 0..20 {
        let link = service
            .create_link("u1", request(&format!("Link {}", i), "https://example.com"))
            .await
            .expect("create failed");
        assert!(seen.insert(link.slug.clone()), "duplicate slug {}", link.slug);
    }
}

#[actix_rt::test]
async fn test_invalid_destination_persists_nothing() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    let result = service.create_link("u1", request("Bad", "not-a-url")).await;
    assert!(matches!(result, Err(ScanlinkError::Validation(_))));

    let result = service
        .create_link("u1", request("Evil", "javascript:alert(1)"))
        .await;
    assert!(matches!(result, Err(ScanlinkError::Validation(_))));

    let links = service.list_links("u1").await.expect("list failed");
    assert!(links.is_empty());
}

#[actix_rt::test]
async fn test_empty_label_rejected() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    let result = service.create_link("u1", request("", "https://example.com")).await;
    assert!(matches!(result, Err(ScanlinkError::Validation(_))));

    let result = service
        .create_link("u1", request("   ", "https://example.com"))
        .await;
    assert!(matches!(result, Err(ScanlinkError::Validation(_))));
}

#[actix_rt::test]
async fn test_unknown_owner_rejected_before_write() {
    let (storage, _dir) = setup_storage().await;
    let service = LinkService::new(storage.clone());

    let result = service
        .create_link("ghost", request("Blog", "https://example.com"))
        .await;
    assert!(matches!(result, Err(ScanlinkError::NotFound(_))));
}

#[actix_rt::test]
async fn test_three_collisions_exhaust_retry_budget() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    // Occupy a slug, then force every candidate onto it
    let taken = service
        .create_link_with("u1", request("First", "https://example.com"), || {
            "aaaabbbb".to_string()
        })
        .await
        .expect("create failed");
    assert_eq!(taken.slug, "aaaabbbb");

    let mut calls = 0;
    let result = service
        .create_link_with("u1", request("Second", "https://example.com"), || {
            calls += 1;
            "aaaabbbb".to_string()
        })
        .await;

    assert!(matches!(result, Err(ScanlinkError::Conflict(_))));
    assert_eq!(calls, SLUG_ATTEMPTS, "budget is exactly {} attempts", SLUG_ATTEMPTS);

    // Nothing new was persisted
    let links = service.list_links("u1").await.expect("list failed");
    assert_eq!(links.len(), 1);
}

#[actix_rt::test]
async fn test_collision_retries_with_fresh_candidate() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    service
        .create_link_with("u1", request("First", "https://example.com"), || {
            "aaaabbbb".to_string()
        })
        .await
        .expect("create failed");

    let candidates = ["aaaabbbb", "ccccdddd"];
    let mut next = 0;
    let link = service
        .create_link_with("u1", request("Second", "https://example.com"), || {
            let candidate = candidates[next].to_string();
            next += 1;
            candidate
        })
        .await
        .expect("retry should have succeeded");

    assert_eq!(link.slug, "ccccdddd");
}

#[actix_rt::test]
async fn test_list_links_never_leaks_other_owners() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    insert_user(&storage, "u2", "u2@example.com").await;
    let service = LinkService::new(storage.clone());

    for i in 0..3 {
        service
            .create_link("u1", request(&format!("A{}", i), "https://example.com/a"))
            .await
            .expect("create failed");
    }
    for i in 0..2 {
        service
            .create_link("u2", request(&format!("B{}", i), "https://example.com/b"))
            .await
            .expect("create failed");
    }

    let u1_links = service.list_links("u1").await.expect("list failed");
    let u2_links = service.list_links("u2").await.expect("list failed");

    assert_eq!(u1_links.len(), 3);
    assert_eq!(u2_links.len(), 2);
    assert!(u1_links.iter().all(|l| l.owner_id == "u1"));
    assert!(u2_links.iter().all(|l| l.owner_id == "u2"));
}

#[actix_rt::test]
async fn test_list_links_newest_first() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;
    let service = LinkService::new(storage.clone());

    let base = Utc::now();
    for (i, slug) in ["11112222", "33334444", "55556666"].iter().enumerate() {
        let link = Link {
            id: format!("link-{}", i),
            slug: slug.to_string(),
            label: format!("Link {}", i),
            destination: "https://example.com".to_string(),
            owner_id: "u1".to_string(),
            created_at: base + Duration::minutes(i as i64),
        };
        storage.insert_link(&link).await.expect("insert failed");
    }

    let links = service.list_links("u1").await.expect("list failed");
    let slugs: Vec<&str> = links.iter().map(|l| l.slug.as_str()).collect();
    assert_eq!(slugs, vec!["55556666", "33334444", "11112222"]);
}

#[actix_rt::test]
async fn test_storage_constraint_rejects_duplicate_slug() {
    let (storage, _dir) = setup_storage().await;
    insert_user(&storage, "u1", "u1@example.com").await;

    let make = |id: &str| Link {
        id: id.to_string(),
        slug: "feedf00d".to_string(),
        label: "Dup".to_string(),
        destination: "https://example.com".to_string(),
        owner_id: "u1".to_string(),
        created_at: Utc::now(),
    };

    storage.insert_link(&make("one")).await.expect("first insert failed");

    // Same candidate slug from a racing creation: the unique index makes
    // exactly one caller win
    let result = storage.insert_link(&make("two")).await;
    assert!(matches!(result, Err(ScanlinkError::Conflict(_))));
}
