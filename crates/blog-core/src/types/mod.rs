//! Core type definitions used across the blog workspace.

pub mod filter;
pub mod pagination;

pub use filter::{FilterField, FilterGroup, FilterMode, FilterOp, FilterValue};
pub use pagination::{PageRequest, PageResponse, Window};
