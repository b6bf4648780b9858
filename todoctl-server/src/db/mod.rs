//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - One injected pool, created at startup and closed at shutdown
//! - Connections are scoped to a single repository call (RAII release)
//! - Multi-step operations run in a transaction

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::run_migrations;
