//! Row-level result types for measurement queries.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One `(date, precipitation)` row from the measurement relation.
///
/// The query keeps one record per stored row, so dates repeat when several
/// stations report the same day. Precipitation is `None` when no rainfall
/// value was recorded for that day; the absence is passed through untouched,
/// never coerced to zero.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct PrecipitationRecord {
    pub date: String,
    pub precipitation: Option<f64>,
}

/// One temperature observation for a station on a given day.
///
/// Serializes as `{"date": .., "temperature": ..}`, the element shape of the
/// `/api/v1.0/tobs` response.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct TemperatureObservation {
    pub date: String,
    /// Observed temperature in degrees Fahrenheit.
    pub temperature: f64,
}
