//! Category repository tests.

use blog_database::Storage;
use blog_entity::category::{CategoryQuery, CreateCategory};

use crate::helpers::TestDb;

#[tokio::test]
async fn test_create_then_get() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let created = db.create_category("Tech").await;
    assert_eq!(created.id, 1);
    assert_eq!(created.title, "Tech");

    let fetched = db.storage.category().get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_search_is_case_insensitive_substring() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    db.create_category("Technology").await;
    db.create_category("Travel").await;
    db.create_category("BioTECH").await;

    let page = db
        .storage
        .category()
        .get_all(&CategoryQuery::new(1, 10).with_search("tech"))
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
    let titles: Vec<_> = page.items.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["BioTECH", "Technology"]);

    let all = db
        .storage
        .category()
        .get_all(&CategoryQuery::new(1, 10).with_search(""))
        .await
        .unwrap();
    assert_eq!(all.total_count, 3);
}

#[tokio::test]
async fn test_wildcards_in_search_match_literally() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    db.create_category("100% Rust").await;
    db.create_category("1000 Rust tips").await;

    let page = db
        .storage
        .category()
        .get_all(&CategoryQuery::new(1, 10).with_search("100%"))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].title, "100% Rust");
}

#[tokio::test]
async fn test_window_bounds() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    db.create_category("Tech").await;
    let categories = db.storage.category();

    let err = categories
        .get_all(&CategoryQuery::new(1, u64::MAX))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    let err = categories
        .get_all(&CategoryQuery::new(u64::MAX / 2, 4))
        .await
        .unwrap_err();
    assert!(err.is_validation());

    // Largest addressable limit still reads the table.
    let page = categories
        .get_all(&CategoryQuery::new(1, i64::MAX as u64))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.len(), 1);
}

#[tokio::test]
async fn test_update_overwrites_title() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let mut category = db.create_category("Tech").await;
    category.title = "Science".to_string();

    let updated = db.storage.category().update(&category).await.unwrap();
    assert_eq!(updated.title, "Science");
    assert_eq!(updated.created_at, category.created_at);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let mut category = db.create_category("Tech").await;
    category.id = 4242;

    let err = db.storage.category().update(&category).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let category = db.create_category("Tech").await;
    db.storage.category().delete(category.id).await.unwrap();

    assert!(db.storage.category().get(category.id).await.unwrap_err().is_not_found());
    assert!(db.storage.category().delete(category.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_constraint_violation_is_store_failure() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let err = db
        .storage
        .category()
        .create(&CreateCategory::new("x".repeat(500)))
        .await
        .unwrap_err();
    assert!(err.is_database());
}
