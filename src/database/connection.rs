use anyhow::{Context, Result};
use r2d2_sqlite::SqliteConnectionManager;

pub type DbPool = r2d2::Pool<SqliteConnectionManager>;
pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

/// Database path that selects a private in-memory database.
pub const MEMORY_PATH: &str = ":memory:";

pub fn create_pool(database_path: &str) -> Result<DbPool> {
    let manager = build_manager(database_path);
    // Every in-memory connection is its own database, so keep exactly one.
    let max_size = if database_path == MEMORY_PATH { 1 } else { 10 };
    build_pool(manager, max_size)
}

fn build_manager(path: &str) -> SqliteConnectionManager {
    let manager = if path == MEMORY_PATH {
        SqliteConnectionManager::memory()
    } else {
        SqliteConnectionManager::file(path)
    };
    manager.with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"))
}

fn build_pool(manager: SqliteConnectionManager, max_size: u32) -> Result<DbPool> {
    r2d2::Pool::builder()
        .max_size(max_size)
        .build(manager)
        .context("Failed to create database connection pool")
}

pub fn get_connection(pool: &DbPool) -> Result<DbConn> {
    pool.get()
        .context("Failed to get database connection from pool")
}

#[cfg(test)]
pub(crate) fn test_pool() -> DbPool {
    let pool = create_pool(MEMORY_PATH).unwrap();
    let conn = get_connection(&pool).unwrap();
    super::setup::ensure_schema(&conn).unwrap();
    drop(conn);
    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pool_shares_one_database() {
        let pool = test_pool();

        let conn = get_connection(&pool).unwrap();
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'games'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(tables, 1);
    }

    #[test]
    fn test_foreign_keys_enabled() {
        let pool = test_pool();
        let conn = get_connection(&pool).unwrap();

        let enabled: i64 = conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0)).unwrap();

        assert_eq!(enabled, 1);
    }
}
