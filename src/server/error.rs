use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind HTTP listener on {0}")]
    Bind(String, #[source] std::io::Error),

    #[error("HTTP server terminated unexpectedly")]
    Serve(#[source] std::io::Error),
}
