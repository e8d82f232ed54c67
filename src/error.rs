use crate::db::DbError;
use crate::query::QueryError;
use crate::server::ServerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClimastatError {
    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error(transparent)]
    Server(#[from] ServerError),

    #[error("Failed to load configuration")]
    Config(#[from] config::ConfigError),
}
