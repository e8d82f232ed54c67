use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Failed to open climate store '{0}'")]
    Connect(String, #[source] sqlx::Error),

    #[error("Failed to inspect the climate store schema")]
    Inspect(#[source] sqlx::Error),

    #[error("Relation '{0}' not found in the climate store")]
    MissingRelation(&'static str),

    #[error("Failed to acquire a store connection")]
    Acquire(#[source] sqlx::Error),
}
