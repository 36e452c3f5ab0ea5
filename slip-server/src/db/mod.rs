//! Database service
//!
//! SQLite-backed storage. The service owns the connection pool and runs
//! embedded migrations on startup.

pub mod repository;

use std::path::Path;

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};

/// Database service managing the SQLite connection pool
#[derive(Debug, Clone)]
pub struct DbService {
    pool: SqlitePool,
}

impl DbService {
    /// Open (or create) the database file under `data_dir` and run migrations.
    pub async fn new(data_dir: &str) -> anyhow::Result<Self> {
        let db_path = Path::new(data_dir).join("slips.db");

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        tracing::info!(path = %db_path.display(), "database ready");

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// In-memory pool with migrations applied, for repository tests.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    pool
}
