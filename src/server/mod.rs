//! HTTP surface: five routes over the query service.
//!
//! Handlers do no work of their own beyond serialization; every response is
//! 200 on success and any failure that escapes a handler becomes an opaque
//! 500 with an empty body.

mod error;
mod handlers;
mod routes;

pub use error::ServerError;
pub use routes::router;

use crate::query::Climastat;

/// The HTTP server for the climate API.
///
/// # Examples
///
/// ```no_run
/// # use climastat::{Climastat, ClimastatError, Database, HttpServer};
/// # async fn run() -> Result<(), ClimastatError> {
/// let database = Database::connect("sqlite://resources/climate.sqlite").await?;
/// let service = Climastat::new(database);
///
/// HttpServer::new(service, "127.0.0.1:5000").run().await?;
/// # Ok(())
/// # }
/// ```
pub struct HttpServer {
    service: Climastat,
    bind_address: String,
}

impl HttpServer {
    /// Creates a server binding the routing table over `service`.
    pub fn new(service: Climastat, bind_address: impl Into<String>) -> Self {
        Self {
            service,
            bind_address: bind_address.into(),
        }
    }

    /// Binds the listener and serves until the process is stopped.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Bind`] when the address cannot be bound and
    /// [`ServerError::Serve`] when the accept loop fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let listener = tokio::net::TcpListener::bind(&self.bind_address)
            .await
            .map_err(|e| ServerError::Bind(self.bind_address.clone(), e))?;
        log::info!("Serving climate API on http://{}", self.bind_address);

        axum::serve(listener, router(self.service))
            .await
            .map_err(ServerError::Serve)
    }
}
