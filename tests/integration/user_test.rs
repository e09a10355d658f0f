//! User repository tests.

use blog_database::Storage;
use blog_entity::user::{Gender, UserQuery, UserRole};

use crate::helpers::{TestDb, new_user};

#[tokio::test]
async fn test_create_then_get() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let mut data = new_user("alice");
    data.gender = Some(Gender::Female);
    data.role = UserRole::SuperAdmin;

    let created = db.storage.user().create(&data).await.unwrap();
    assert_eq!(created.email, "alice@x.com");
    assert_eq!(created.gender, Some(Gender::Female));
    assert!(created.is_superadmin());

    let fetched = db.storage.user().get(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_search_by_email_fragment() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let user = db.create_user("a").await;
    db.create_user("bob").await;

    let page = db
        .storage
        .user()
        .get_all(&UserQuery::new(1, 10).with_search("a@x"))
        .await
        .unwrap();
    assert!(page.items.iter().any(|u| u.id == user.id));

    let none = db
        .storage
        .user()
        .get_all(&UserQuery::new(1, 10).with_search("nomatch"))
        .await
        .unwrap();
    assert!(none.is_empty());
    assert_eq!(none.total_count, 0);
}

#[tokio::test]
async fn test_search_matches_any_column() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    db.create_user("carol").await;
    db.create_user("dave").await;

    // "LASTCAROL" only matches last_name, case-insensitively.
    let page = db
        .storage
        .user()
        .get_all(&UserQuery::new(1, 10).with_search("LASTCAROL"))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].username, "carol");

    // Every user shares the phone number.
    let page = db
        .storage
        .user()
        .get_all(&UserQuery::new(1, 10).with_search("99890"))
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
}

#[tokio::test]
async fn test_newest_first() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let first = db.create_user("first").await;
    let second = db.create_user("second").await;

    let page = db.storage.user().get_all(&UserQuery::default()).await.unwrap();
    let ids: Vec<_> = page.items.iter().map(|u| u.id).collect();
    assert_eq!(ids, [second.id, first.id]);
}

#[tokio::test]
async fn test_find_by_email_and_username() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let user = db.create_user("erin").await;
    let users = db.storage.user_repository();

    let by_email = users.find_by_email("ERIN@X.COM").await.unwrap();
    assert_eq!(by_email.map(|u| u.id), Some(user.id));

    let by_username = users.find_by_username("Erin").await.unwrap();
    assert_eq!(by_username.map(|u| u.id), Some(user.id));

    assert!(users.find_by_email("nobody@x.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_store_failure() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    db.create_user("frank").await;
    let err = db.storage.user().create(&new_user("frank")).await.unwrap_err();
    assert!(err.is_database());
}

#[tokio::test]
async fn test_update_overwrites_every_field() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let mut user = db.create_user("grace").await;
    user.first_name = "Grace".to_string();
    user.phone_number = None;
    user.profile_image_url = Some("media/grace.png".to_string());
    user.role = UserRole::SuperAdmin;

    let updated = db.storage.user().update(&user).await.unwrap();
    assert_eq!(updated, user);

    user.id = 999;
    assert!(db.storage.user().update(&user).await.unwrap_err().is_not_found());
}
