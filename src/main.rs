use climastat::{get_configuration, Climastat, ClimastatError, Database, HttpServer};

#[tokio::main]
async fn main() -> Result<(), ClimastatError> {
    env_logger::init();

    let settings = get_configuration()?;
    let database = Database::connect(&settings.database.url).await?;
    let service = Climastat::new(database);

    HttpServer::new(service, settings.http.bind).run().await?;

    Ok(())
}
