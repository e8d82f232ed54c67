use axum::routing::get;
use axum::Router;

use super::handlers;
use crate::query::Climastat;

/// Builds the full routing table over a query service.
///
/// The five bindings live in this single table; static segments take
/// precedence over the `{start}` captures, so `/api/v1.0/stations` never
/// reaches the statistics handlers.
pub fn router(service: Climastat) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/v1.0/precipitation", get(handlers::precipitation))
        .route("/api/v1.0/stations", get(handlers::stations))
        .route("/api/v1.0/tobs", get(handlers::tobs))
        .route("/api/v1.0/{start}", get(handlers::temperature_stats_open))
        .route(
            "/api/v1.0/{start}/{end}",
            get(handlers::temperature_stats_range),
        )
        .with_state(service)
}
