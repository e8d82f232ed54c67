//! Route handlers: one thin adapter per API path, mapping a query service
//! call onto its JSON response shape.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::{Map, Value};

use crate::query::{Climastat, QueryError};
use crate::types::measurement::TemperatureObservation;
use crate::types::stats::TemperatureStats;

const ROUTE_INDEX: &str = concat!(
    "Available Routes:<br/>",
    "/api/v1.0/precipitation<br/>",
    "/api/v1.0/stations<br/>",
    "/api/v1.0/tobs<br/>",
    "/api/v1.0/&lt;start&gt;<br/>",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;"
);

/// `GET /`: static listing of the API paths; runs no query.
pub(crate) async fn index() -> Html<&'static str> {
    Html(ROUTE_INDEX)
}

/// `GET /api/v1.0/precipitation`: trailing year of precipitation as a
/// date-keyed JSON object.
pub(crate) async fn precipitation(
    State(service): State<Climastat>,
) -> Result<Json<Value>, RouteError> {
    let records = service.precipitation_last_year().await?;

    // Rows fold into a key-unique map in store order; when two stations share
    // a date, the later row wins.
    let mut by_date = Map::with_capacity(records.len());
    for record in records {
        let value = match record.precipitation {
            Some(inches) => Value::from(inches),
            None => Value::Null,
        };
        by_date.insert(record.date, value);
    }

    Ok(Json(Value::Object(by_date)))
}

/// `GET /api/v1.0/stations`: station identifiers as a JSON array.
pub(crate) async fn stations(
    State(service): State<Climastat>,
) -> Result<Json<Vec<String>>, RouteError> {
    Ok(Json(service.list_stations().await?))
}

/// `GET /api/v1.0/tobs`: trailing year of observations for the most active
/// station.
pub(crate) async fn tobs(
    State(service): State<Climastat>,
) -> Result<Json<Vec<TemperatureObservation>>, RouteError> {
    Ok(Json(service.most_active_station_observations().await?))
}

/// `GET /api/v1.0/{start}`: open-ended temperature statistics.
pub(crate) async fn temperature_stats_open(
    State(service): State<Climastat>,
    Path(start): Path<String>,
) -> Result<Json<TemperatureStats>, RouteError> {
    let stats = service.temperature_stats().start(&start).call().await?;
    Ok(Json(stats))
}

/// `GET /api/v1.0/{start}/{end}`: bounded temperature statistics.
pub(crate) async fn temperature_stats_range(
    State(service): State<Climastat>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TemperatureStats>, RouteError> {
    let stats = service
        .temperature_stats()
        .start(&start)
        .end(&end)
        .call()
        .await?;
    Ok(Json(stats))
}

/// Any error escaping a handler: logged, then surfaced as an opaque 500 with
/// an empty body. The API defines no structured error responses.
pub(crate) struct RouteError(QueryError);

impl From<QueryError> for RouteError {
    fn from(err: QueryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        log::error!("Request failed: {}", self.0);
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
