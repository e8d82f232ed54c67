//! Shared fixtures for tests: temporary SQLite stores standing in for the
//! externally-owned climate database.

use crate::db::Database;
use sqlx::sqlite::SqlitePoolOptions;
use tempfile::NamedTempFile;

/// A seeded store plus the handles keeping it alive for the test's duration.
pub(crate) struct SeededStore {
    pub db: Database,
    pub url: String,
    _file: NamedTempFile,
}

/// Creates a temporary SQLite file with the `station` and `measurement`
/// relations, inserts the given rows in order, and connects a [`Database`]
/// over it. Measurement tuples are `(station_id, date, precipitation,
/// temperature_observation)`.
pub(crate) async fn seeded_store(
    stations: &[&str],
    measurements: &[(&str, &str, Option<f64>, f64)],
) -> SeededStore {
    let file = NamedTempFile::new().expect("create temp database file");
    let url = format!("sqlite://{}", file.path().display());

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("open temp database");

    sqlx::query(
        "CREATE TABLE station (
            station_id TEXT,
            name TEXT,
            latitude REAL,
            longitude REAL,
            elevation REAL
        )",
    )
    .execute(&pool)
    .await
    .expect("create station relation");

    sqlx::query(
        "CREATE TABLE measurement (
            station_id TEXT,
            date TEXT,
            precipitation REAL,
            temperature_observation REAL
        )",
    )
    .execute(&pool)
    .await
    .expect("create measurement relation");

    for station_id in stations {
        sqlx::query("INSERT INTO station (station_id) VALUES (?1)")
            .bind(station_id)
            .execute(&pool)
            .await
            .expect("insert station row");
    }

    for (station_id, date, precipitation, temperature) in measurements {
        sqlx::query(
            "INSERT INTO measurement (station_id, date, precipitation, temperature_observation) \
             VALUES (?1, ?2, ?3, ?4)",
        )
        .bind(station_id)
        .bind(date)
        .bind(precipitation)
        .bind(temperature)
        .execute(&pool)
        .await
        .expect("insert measurement row");
    }

    pool.close().await;

    let db = Database::connect(&url).await.expect("connect to seeded store");
    SeededStore { db, url, _file: file }
}
