//! Shared test fixtures

use std::sync::Arc;

use sea_orm::{ActiveValue::Set, EntityTrait};
use tempfile::TempDir;

use migration::entities::user;
use scanlink::storage::SeaOrmStorage;

/// Fresh SQLite-backed storage with migrations applied.
///
/// The TempDir must be kept alive for the duration of the test.
pub async fn setup_storage() -> (Arc<SeaOrmStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("scanlink_test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite")
            .await
            .expect("Failed to create storage"),
    );

    (storage, temp_dir)
}

/// Seed a user row the way the external identity provider would
pub async fn insert_user(storage: &SeaOrmStorage, id: &str, email: &str) {
    let model = user::ActiveModel {
        id: Set(id.to_string()),
        email: Set(email.to_string()),
        password_hash: Set("$2b$10$u6sq7mCCbRm6YKTIZs1PguYT6eJS4d6Ij1s4aGBJtDpyF6dMCfj9y".to_string()),
        name: Set(Some("Test User".to_string())),
        created_at: Set(chrono::Utc::now()),
    };

    user::Entity::insert(model)
        .exec(storage.get_db())
        .await
        .expect("Failed to insert user");
}
