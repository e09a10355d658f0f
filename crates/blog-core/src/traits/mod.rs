//! Core traits defined in `blog-core` and implemented by other crates.

pub mod repository;

pub use repository::{QueryDescriptor, Repository};
