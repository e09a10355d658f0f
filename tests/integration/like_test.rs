//! Like repository tests.

use blog_core::types::FilterMode;
use blog_database::Storage;
use blog_entity::like::{CreateLike, LikeQuery};

use crate::helpers::TestDb;

fn like(post_id: i64, user_id: i64, status: &str) -> CreateLike {
    CreateLike {
        post_id,
        user_id,
        status: status.to_string(),
    }
}

#[tokio::test]
async fn test_ordering_and_duplicates() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let user = db.create_user("fan").await;
    let category = db.create_category("Tech").await;
    let older = db.create_post(user.id, category.id, "Older").await;
    let newer = db.create_post(user.id, category.id, "Newer").await;

    let likes = db.storage.like();
    let a = likes.create(&like(older.id, user.id, "like")).await.unwrap();
    let b = likes.create(&like(newer.id, user.id, "like")).await.unwrap();
    // No uniqueness on (post, user).
    let c = likes.create(&like(older.id, user.id, "dislike")).await.unwrap();

    let page = likes.get_all(&LikeQuery::default()).await.unwrap();
    let ids: Vec<_> = page.items.iter().map(|l| l.id).collect();
    assert_eq!(ids, [b.id, c.id, a.id]);
    assert_eq!(page.total_count, 3);
}

#[tokio::test]
async fn test_filters() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let alice = db.create_user("alice").await;
    let bob = db.create_user("bob").await;
    let category = db.create_category("Tech").await;
    let post = db.create_post(alice.id, category.id, "Liked").await;
    let other = db.create_post(alice.id, category.id, "Ignored").await;

    let likes = db.storage.like();
    likes.create(&like(post.id, alice.id, "like")).await.unwrap();
    likes.create(&like(post.id, bob.id, "like")).await.unwrap();
    likes.create(&like(other.id, bob.id, "like")).await.unwrap();

    let on_post = likes.get_all(&LikeQuery::new(1, 10).on_post(post.id)).await.unwrap();
    assert_eq!(on_post.total_count, 2);

    let both = LikeQuery::new(1, 10)
        .on_post(other.id)
        .by_user(bob.id)
        .with_mode(FilterMode::All);
    assert_eq!(likes.get_all(&both).await.unwrap().total_count, 1);

    let either = LikeQuery::new(1, 10).on_post(other.id).by_user(alice.id);
    assert_eq!(likes.get_all(&either).await.unwrap().total_count, 2);
}

#[tokio::test]
async fn test_update_and_delete() {
    let Some(db) = TestDb::connect().await else {
        return;
    };

    let user = db.create_user("fan").await;
    let category = db.create_category("Tech").await;
    let post = db.create_post(user.id, category.id, "Liked").await;

    let likes = db.storage.like();
    let mut created = likes.create(&like(post.id, user.id, "like")).await.unwrap();
    created.status = "dislike".to_string();

    let updated = likes.update(&created).await.unwrap();
    assert_eq!(updated, created);

    likes.delete(created.id).await.unwrap();
    assert!(likes.get(created.id).await.unwrap_err().is_not_found());
}
