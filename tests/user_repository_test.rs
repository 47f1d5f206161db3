//! User repository and database tests against in-memory SQLite.

use token_auth_api::infra::{Database, UserRepository, UserStore};

async fn test_database() -> Database {
    Database::connect("sqlite::memory:", 1).await.unwrap()
}

#[tokio::test]
async fn test_create_and_find_user() {
    let db = test_database().await;
    let repo = UserStore::new(db.get_connection());

    let created = repo
        .create("alice".to_string(), "$2b$04$hash".to_string())
        .await
        .unwrap();
    assert_eq!(created.username, "alice");

    let found = repo.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(found, created);
    assert_eq!(found.hashed_password, "$2b$04$hash");
}

#[tokio::test]
async fn test_find_missing_user() {
    let db = test_database().await;
    let repo = UserStore::new(db.get_connection());

    assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    assert!(!repo.exists("nobody").await.unwrap());
}

#[tokio::test]
async fn test_exists_after_create() {
    let db = test_database().await;
    let repo = UserStore::new(db.get_connection());

    repo.create("bob".to_string(), "hash".to_string()).await.unwrap();

    assert!(repo.exists("bob").await.unwrap());
    assert!(!repo.exists("Bob").await.unwrap());
}

#[tokio::test]
async fn test_duplicate_username_rejected_by_primary_key() {
    let db = test_database().await;
    let repo = UserStore::new(db.get_connection());

    repo.create("carol".to_string(), "first".to_string()).await.unwrap();
    let second = repo.create("carol".to_string(), "second".to_string()).await;
    assert!(second.is_err());

    // The original row is untouched
    let stored = repo.find_by_username("carol").await.unwrap().unwrap();
    assert_eq!(stored.hashed_password, "first");
}

#[tokio::test]
async fn test_migrations_applied_on_connect() {
    let db = test_database().await;

    db.ping().await.unwrap();

    let status = db.migration_status().await.unwrap();
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].0, "m20240101_000001_create_users_table");
    assert!(status[0].1);
}

#[tokio::test]
async fn test_rollback_and_reapply() {
    let db = test_database().await;

    db.rollback_migration().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(!status[0].1);

    db.run_migrations().await.unwrap();
    let status = db.migration_status().await.unwrap();
    assert!(status[0].1);
}
