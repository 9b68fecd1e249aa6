//! CategoryRepository integration tests against an embedded database

use inventory_server::db::repository::{CategoryRepository, RepoError};
use shared::models::{CategoryCreate, CategoryUpdate};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

async fn setup() -> (tempfile::TempDir, CategoryRepository) {
    let tmp = tempfile::tempdir().unwrap();
    let db: Surreal<Db> = Surreal::new::<RocksDb>(tmp.path()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    (tmp, CategoryRepository::new(db))
}

fn category(name: &str) -> CategoryCreate {
    CategoryCreate {
        name: name.to_string(),
        description: None,
    }
}

#[tokio::test]
async fn create_and_list_categories() {
    let (_tmp, repo) = setup().await;

    repo.create(category("Snacks")).await.unwrap();
    repo.create(category("Drinks")).await.unwrap();

    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 2);
    // Sorted by name
    assert_eq!(all[0].name, "Drinks");
    assert_eq!(all[1].name, "Snacks");
}

#[tokio::test]
async fn duplicate_name_is_rejected() {
    let (_tmp, repo) = setup().await;

    repo.create(category("Drinks")).await.unwrap();
    let err = repo.create(category("Drinks")).await.unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // Empty name is a validation error, not a duplicate
    let err = repo.create(category("  ")).await.unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[tokio::test]
async fn find_by_id_and_name() {
    let (_tmp, repo) = setup().await;

    let created = repo.create(category("Drinks")).await.unwrap();
    let id = created.id.as_ref().unwrap().to_string();

    let by_id = repo.find_by_id(&id).await.unwrap().unwrap();
    assert_eq!(by_id.name, "Drinks");

    let by_name = repo.find_by_name("Drinks").await.unwrap().unwrap();
    assert_eq!(
        by_name.id.as_ref().unwrap().to_string(),
        id
    );

    assert!(repo.find_by_name("Food").await.unwrap().is_none());
    assert!(repo.find_by_id("category:missing").await.unwrap().is_none());
}

#[tokio::test]
async fn rename_checks_for_clashes() {
    let (_tmp, repo) = setup().await;

    repo.create(category("Drinks")).await.unwrap();
    let snacks = repo.create(category("Snacks")).await.unwrap();
    let snacks_id = snacks.id.as_ref().unwrap().to_string();

    // Renaming onto an existing name clashes
    let err = repo
        .update(
            &snacks_id,
            CategoryUpdate {
                name: Some("Drinks".to_string()),
                description: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Duplicate(_)));

    // Keeping the same name while editing the description is fine
    let updated = repo
        .update(
            &snacks_id,
            CategoryUpdate {
                name: Some("Snacks".to_string()),
                description: Some("Salty things".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Snacks");
    assert_eq!(updated.description, "Salty things");

    // A fresh name passes
    let updated = repo
        .update(
            &snacks_id,
            CategoryUpdate {
                name: Some("Treats".to_string()),
                description: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Treats");
    assert_eq!(updated.description, "Salty things");
}

#[tokio::test]
async fn delete_category() {
    let (_tmp, repo) = setup().await;

    let created = repo.create(category("Drinks")).await.unwrap();
    let id = created.id.as_ref().unwrap().to_string();

    repo.delete(&id).await.unwrap();
    assert!(repo.find_by_id(&id).await.unwrap().is_none());

    let err = repo.delete(&id).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    let err = repo.update(&id, CategoryUpdate { name: None, description: None }).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}
