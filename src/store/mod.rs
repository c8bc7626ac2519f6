//! Persistence for employees and their leave intervals.

pub mod employee;
pub mod leave;

pub use leave::LeaveFilter;

use sqlx::SqlitePool;

/// Owns the database handle. Cloning is cheap and shares the pool.
#[derive(Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
pub(crate) async fn test_store() -> Store {
    Store::new(crate::db::test_pool().await)
}
