//! The query service: four fixed read patterns over the climate store.
//!
//! Every operation is a pure read. Each public operation checks out one
//! pooled connection for its whole lifetime; the guard returns it on every
//! exit path, so no state leaks between calls and repeated calls over
//! unchanged data yield identical results.

mod error;

pub use error::QueryError;

use crate::db::Database;
use crate::types::measurement::{PrecipitationRecord, TemperatureObservation};
use crate::types::stats::TemperatureStats;
use bon::bon;
use chrono::{Duration, NaiveDate};
use sqlx::SqliteConnection;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The main entry point for querying the climate store.
///
/// Constructed from a [`Database`] handle rather than any process-wide
/// global, so tests can point it at a temporary store. Cloning is cheap and
/// shares the underlying pool.
///
/// # Examples
///
/// ```no_run
/// # use climastat::{Climastat, ClimastatError, Database};
/// # async fn run() -> Result<(), ClimastatError> {
/// let database = Database::connect("sqlite://resources/climate.sqlite").await?;
/// let service = Climastat::new(database);
///
/// let stations = service.list_stations().await?;
/// println!("{} stations on record", stations.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Climastat {
    db: Database,
}

#[bon]
impl Climastat {
    /// Creates a query service over the given store handle.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Returns the most recent measurement date in the store, as the stored
    /// `YYYY-MM-DD` string.
    ///
    /// Anchors the rolling 12-month window used by
    /// [`precipitation_last_year`](Self::precipitation_last_year) and
    /// [`most_active_station_observations`](Self::most_active_station_observations).
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyMeasurementSet`] when the measurement
    /// relation holds no rows.
    pub async fn latest_date(&self) -> Result<String, QueryError> {
        let mut conn = self.db.acquire().await?;
        latest_measurement_date(&mut conn).await
    }

    /// Returns every `(date, precipitation)` row from the trailing year.
    ///
    /// The window starts exactly 365 calendar days before the latest
    /// measurement date and the comparison is inclusive, so rows dated on the
    /// window start itself are returned. Rows come back in store order, one
    /// record per row; dates repeat when several stations report the same
    /// day, and missing precipitation values stay `None`.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyMeasurementSet`] when the store holds no
    /// measurements to anchor the window on.
    pub async fn precipitation_last_year(&self) -> Result<Vec<PrecipitationRecord>, QueryError> {
        let mut conn = self.db.acquire().await?;

        let latest = latest_measurement_date(&mut conn).await?;
        let window_start = window_start(&latest)?;
        log::debug!("Precipitation window starts at {window_start}");

        let records = sqlx::query_as::<_, PrecipitationRecord>(
            "SELECT date, precipitation FROM measurement WHERE date >= ?1",
        )
        .bind(&window_start)
        .fetch_all(&mut *conn)
        .await?;

        Ok(records)
    }

    /// Returns all station identifiers in the store's natural row order.
    ///
    /// No sort and no deduplication are applied; the result mirrors the
    /// station relation exactly.
    pub async fn list_stations(&self) -> Result<Vec<String>, QueryError> {
        let mut conn = self.db.acquire().await?;

        let stations = sqlx::query_scalar::<_, String>("SELECT station_id FROM station")
            .fetch_all(&mut *conn)
            .await?;

        Ok(stations)
    }

    /// Returns the trailing year of temperature observations for the station
    /// with the most measurement rows.
    ///
    /// The station is picked by grouping measurements per station, ordering
    /// by row count descending, and taking the first row; at equal counts the
    /// store's own ordering decides. The window is anchored on the global
    /// latest date, not the chosen station's own latest date.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::EmptyMeasurementSet`] when there are no
    /// measurements at all.
    pub async fn most_active_station_observations(
        &self,
    ) -> Result<Vec<TemperatureObservation>, QueryError> {
        let mut conn = self.db.acquire().await?;

        let station: String = sqlx::query_scalar(
            "SELECT station_id FROM measurement \
             GROUP BY station_id \
             ORDER BY COUNT(station_id) DESC",
        )
        .fetch_optional(&mut *conn)
        .await?
        .ok_or(QueryError::EmptyMeasurementSet)?;
        log::debug!("Most active station is {station}");

        let latest = latest_measurement_date(&mut conn).await?;
        let window_start = window_start(&latest)?;

        let observations = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, temperature_observation AS temperature FROM measurement \
             WHERE station_id = ?1 AND date >= ?2",
        )
        .bind(&station)
        .bind(&window_start)
        .fetch_all(&mut *conn)
        .await?;

        Ok(observations)
    }

    /// Computes min/avg/max temperature over measurements dated `start` or
    /// later, optionally capped at `end` (both inclusive).
    ///
    /// This method uses a builder pattern: `.start(..)` is required, `.end(..)`
    /// (or `.maybe_end(..)`) is optional, and `.call().await` executes.
    ///
    /// The bounds are never parsed or validated; they take part in plain
    /// string comparison against the stored ISO dates. A malformed bound
    /// therefore degrades to an empty match, which surfaces as a result with
    /// all fields `None` rather than an error.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use climastat::{Climastat, ClimastatError, Database};
    /// # async fn run() -> Result<(), ClimastatError> {
    /// # let service = Climastat::new(Database::connect("sqlite://resources/climate.sqlite").await?);
    /// // Everything from 2017-01-01 onwards.
    /// let open_ended = service.temperature_stats().start("2017-01-01").call().await?;
    ///
    /// // A bounded range.
    /// let january = service
    ///     .temperature_stats()
    ///     .start("2017-01-01")
    ///     .end("2017-01-31")
    ///     .call()
    ///     .await?;
    /// println!("TMAX for January: {:?}", january.max);
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn temperature_stats(
        &self,
        start: &str,
        end: Option<&str>,
    ) -> Result<TemperatureStats, QueryError> {
        let mut conn = self.db.acquire().await?;

        let row: (Option<f64>, Option<f64>, Option<f64>) = match end {
            Some(end) => {
                sqlx::query_as(
                    "SELECT MIN(temperature_observation), AVG(temperature_observation), \
                     MAX(temperature_observation) FROM measurement \
                     WHERE date >= ?1 AND date <= ?2",
                )
                .bind(start)
                .bind(end)
                .fetch_one(&mut *conn)
                .await?
            }
            None => {
                sqlx::query_as(
                    "SELECT MIN(temperature_observation), AVG(temperature_observation), \
                     MAX(temperature_observation) FROM measurement \
                     WHERE date >= ?1",
                )
                .bind(start)
                .fetch_one(&mut *conn)
                .await?
            }
        };

        Ok(TemperatureStats {
            min: row.0,
            avg: row.1,
            max: row.2,
        })
    }
}

/// Maximum stored date, on an already-acquired connection so operations that
/// need it alongside other statements reuse their own connection.
async fn latest_measurement_date(conn: &mut SqliteConnection) -> Result<String, QueryError> {
    let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
        .fetch_one(&mut *conn)
        .await?;
    latest.ok_or(QueryError::EmptyMeasurementSet)
}

/// Start of the rolling window: exactly 365 calendar days before `latest`,
/// re-formatted as `YYYY-MM-DD`.
fn window_start(latest: &str) -> Result<String, QueryError> {
    let anchor = NaiveDate::parse_from_str(latest, DATE_FORMAT)
        .map_err(|e| QueryError::DateParse(latest.to_string(), e))?;
    let start = anchor - Duration::days(365);
    Ok(start.format(DATE_FORMAT).to_string())
}
