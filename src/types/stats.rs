use serde::{Deserialize, Serialize};

/// Aggregate temperature statistics over a date-filtered measurement set.
///
/// Serializes as `{"TMIN": .., "TAVG": .., "TMAX": ..}`. All fields are
/// `None` when the filter matched no rows: the SQL aggregates return no value
/// over an empty set, and that absence surfaces as JSON null rather than an
/// error or zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureStats {
    #[serde(rename = "TMIN")]
    pub min: Option<f64>,
    #[serde(rename = "TAVG")]
    pub avg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub max: Option<f64>,
}
