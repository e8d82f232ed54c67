//! Connection handling for the external climate store.
//!
//! The store is a SQLite file owned and populated elsewhere. This module only
//! opens a pool over it and verifies at startup that the relations the rest
//! of the crate reads are present; nothing is ever created, migrated, or
//! written.

mod error;

pub use error::DbError;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Sqlite, SqlitePool};

const REQUIRED_RELATIONS: [&str; 2] = ["station", "measurement"];

/// A clone-cheap handle to the climate store.
///
/// Wraps a [`SqlitePool`]; cloning shares the pool. Obtained via
/// [`Database::connect`], which also reflects the schema.
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens a pool over the SQLite store at `url` and reflects the schema.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connect`] when the store cannot be opened and
    /// [`DbError::MissingRelation`] when either the `station` or the
    /// `measurement` relation is absent.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use climastat::{Database, DbError};
    /// # async fn run() -> Result<(), DbError> {
    /// let database = Database::connect("sqlite://resources/climate.sqlite").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self, DbError> {
        let pool = SqlitePoolOptions::new()
            .connect(url)
            .await
            .map_err(|e| DbError::Connect(url.to_string(), e))?;

        let database = Self { pool };
        database.reflect().await?;
        log::info!("Connected to climate store at {url}");
        Ok(database)
    }

    /// Verifies the required relations exist in the store.
    async fn reflect(&self) -> Result<(), DbError> {
        for relation in REQUIRED_RELATIONS {
            let found: Option<String> = sqlx::query_scalar(
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name = ?1",
            )
            .bind(relation)
            .fetch_optional(&self.pool)
            .await
            .map_err(DbError::Inspect)?;

            if found.is_none() {
                return Err(DbError::MissingRelation(relation));
            }
        }
        Ok(())
    }

    /// Checks out one connection from the pool. Dropping the guard returns it
    /// on every exit path, error paths included.
    pub(crate) async fn acquire(&self) -> Result<PoolConnection<Sqlite>, DbError> {
        self.pool.acquire().await.map_err(DbError::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_connect_reflects_seeded_store() {
        let store = crate::test_support::seeded_store(&["S1"], &[]).await;
        // A second connect against the same file must also pass reflection.
        let reconnect = Database::connect(&store.url).await;
        assert!(reconnect.is_ok());
    }

    #[tokio::test]
    async fn test_connect_fails_without_measurement_relation() {
        let file = NamedTempFile::new().expect("create temp database file");
        let url = format!("sqlite://{}", file.path().display());

        let pool = SqlitePoolOptions::new()
            .connect(&url)
            .await
            .expect("open temp database");
        sqlx::query("CREATE TABLE station (station_id TEXT PRIMARY KEY)")
            .execute(&pool)
            .await
            .expect("create station relation");
        pool.close().await;

        let err = Database::connect(&url).await.unwrap_err();
        assert!(matches!(err, DbError::MissingRelation("measurement")));
    }

    #[tokio::test]
    async fn test_connect_fails_for_missing_file() {
        let err = Database::connect("sqlite:///nonexistent/climate.sqlite")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Connect(_, _)));
    }
}
