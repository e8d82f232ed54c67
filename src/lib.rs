//! Read-only HTTP API over a historical weather station dataset.
//!
//! The crate wraps a pre-existing SQLite store holding two relations,
//! `station` and `measurement`, and answers four fixed query shapes:
//! precipitation history for the trailing year, the station list, temperature
//! observations for the most active station, and min/avg/max temperature
//! statistics over a date range. The store is reflected at startup and never
//! written to.
//!
//! [`Climastat`] is the query entry point; [`HttpServer`] binds the five API
//! routes on top of it. Both are usable independently, so embedders can run
//! queries without serving HTTP.

mod config;
mod db;
mod error;
mod query;
mod server;
#[cfg(test)]
mod test_support;
mod types;

pub use config::{get_configuration, DatabaseSettings, HttpSettings, Settings};
pub use db::{Database, DbError};
pub use error::ClimastatError;
pub use query::{Climastat, QueryError};
pub use server::{router, HttpServer, ServerError};
pub use types::measurement::*;
pub use types::stats::*;
