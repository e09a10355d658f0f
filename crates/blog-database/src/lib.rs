//! # blog-database
//!
//! PostgreSQL connection management, migrations, the generic table
//! repository, and the storage facade that exposes one repository per
//! blog entity.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod storage;
pub mod table;

pub use connection::DatabasePool;
pub use storage::{PgStorage, Storage};
pub use table::{Table, TableRepository};
