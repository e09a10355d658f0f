//! Store-backed integration tests.
//!
//! These run against the PostgreSQL database named by
//! `BLOG_TEST_DATABASE_URL` and are skipped when it is unset. Every test
//! truncates the blog tables, so tests are serialized on a shared lock.

mod helpers;

mod category_test;
mod comment_test;
mod like_test;
mod user_test;
