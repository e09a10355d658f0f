//! # blog-entity
//!
//! Domain entity models for the blog backend. Every struct in this crate
//! represents a database table row, the caller-supplied payload used to
//! create one, or the query descriptor used to list them. Stored entities
//! derive `sqlx::FromRow`; relationships are plain foreign-key integers.

pub mod category;
pub mod comment;
pub mod like;
pub mod post;
pub mod user;
