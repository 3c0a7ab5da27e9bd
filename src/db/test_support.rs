// src/db/test_support.rs
//
// Shared test helpers (compiled for tests only)

use std::sync::Arc;

use tempfile::TempDir;

use super::connection::{create_connection_pool_at, get_connection, ConnectionPool};
use super::migrations::initialize_database;

/// File-backed pool over a fresh, fully migrated database.
/// The TempDir must stay alive as long as the pool is used.
pub(crate) fn create_test_pool() -> (TempDir, Arc<ConnectionPool>) {
    let dir = TempDir::new().expect("temp dir");
    let pool = create_connection_pool_at(&dir.path().join("test.db")).expect("pool");
    let conn = get_connection(&pool).expect("connection");
    initialize_database(&conn).expect("schema");
    (dir, Arc::new(pool))
}
