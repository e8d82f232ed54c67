use crate::db::DbError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("No measurements found in the climate store")]
    EmptyMeasurementSet,

    #[error("Failed to parse stored date '{0}'")]
    DateParse(String, #[source] chrono::ParseError),

    #[error(transparent)]
    Db(#[from] DbError),

    #[error("Query execution failed")]
    Sql(#[from] sqlx::Error),
}
