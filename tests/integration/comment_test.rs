//! Comment repository tests.

use blog_core::types::FilterMode;
use blog_database::Storage;
use blog_entity::comment::{CommentQuery, CreateComment};
use blog_entity::post::Post;
use blog_entity::user::User;

use crate::helpers::TestDb;

struct Fixture {
    db: TestDb,
    alice: User,
    bob: User,
    first: Post,
    second: Post,
}

async fn fixture() -> Option<Fixture> {
    let db = TestDb::connect().await?;
    let alice = db.create_user("alice").await;
    let bob = db.create_user("bob").await;
    let category = db.create_category("Tech").await;
    let first = db.create_post(alice.id, category.id, "First").await;
    let second = db.create_post(alice.id, category.id, "Second").await;

    // alice on first, bob on first, bob on second
    for (post, user) in [(&first, &alice), (&first, &bob), (&second, &bob)] {
        db.storage
            .comment()
            .create(&CreateComment {
                post_id: post.id,
                user_id: user.id,
                description: format!("{} on {}", user.username, post.title),
            })
            .await
            .unwrap();
    }

    Some(Fixture {
        db,
        alice,
        bob,
        first,
        second,
    })
}

#[tokio::test]
async fn test_filter_by_post() {
    let Some(f) = fixture().await else {
        return;
    };

    let page = f
        .db
        .storage
        .comment()
        .get_all(&CommentQuery::new(1, 10).on_post(f.first.id))
        .await
        .unwrap();
    assert_eq!(page.total_count, 2);
    assert!(page.items.iter().all(|c| c.post_id == f.first.id));

    let page = f
        .db
        .storage
        .comment()
        .get_all(&CommentQuery::new(1, 10).by_user(f.alice.id))
        .await
        .unwrap();
    assert_eq!(page.total_count, 1);
}

#[tokio::test]
async fn test_any_versus_all() {
    let Some(f) = fixture().await else {
        return;
    };

    let either = CommentQuery::new(1, 10).on_post(f.second.id).by_user(f.alice.id);
    let page = f.db.storage.comment().get_all(&either).await.unwrap();
    assert_eq!(page.total_count, 2);

    let both = CommentQuery::new(1, 10)
        .on_post(f.first.id)
        .by_user(f.bob.id)
        .with_mode(FilterMode::All);
    let page = f.db.storage.comment().get_all(&both).await.unwrap();
    assert_eq!(page.total_count, 1);
    assert_eq!(page.items[0].description, "bob on First");
}

#[tokio::test]
async fn test_zero_ids_do_not_filter() {
    let Some(f) = fixture().await else {
        return;
    };

    let page = f
        .db
        .storage
        .comment()
        .get_all(&CommentQuery::new(1, 10).on_post(0).by_user(-3))
        .await
        .unwrap();
    assert_eq!(page.total_count, 3);
    assert_eq!(page.items[0].description, "bob on Second");
}

#[tokio::test]
async fn test_update() {
    let Some(f) = fixture().await else {
        return;
    };

    let comments = f.db.storage.comment();
    let mut comment = comments
        .get_all(&CommentQuery::new(1, 1).by_user(f.alice.id))
        .await
        .unwrap()
        .items
        .remove(0);

    comment.description = "edited".to_string();
    let updated = comments.update(&comment).await.unwrap();
    assert_eq!(updated.description, "edited");
    assert!(updated.updated_at.is_some());

    comment.id = 500;
    assert!(comments.update(&comment).await.unwrap_err().is_not_found());
    assert!(comments.delete(500).await.unwrap_err().is_not_found());
}
