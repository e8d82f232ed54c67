//! Process configuration: listen address and store location.

use config::{Config, ConfigError, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub http: HttpSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// Address the HTTP listener binds to, e.g. `127.0.0.1:5000`.
    pub bind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite URL of the climate store, e.g. `sqlite://resources/climate.sqlite`.
    pub url: String,
}

/// Loads [`Settings`] from three layered sources: built-in defaults, an
/// optional `configuration/climastat` file (any format the `config` crate
/// understands), and `APP_`-prefixed environment variables, later sources
/// overriding earlier ones.
///
/// # Examples
///
/// ```no_run
/// # fn main() -> Result<(), config::ConfigError> {
/// // APP_HTTP_BIND=0.0.0.0:8080 overrides the listen address.
/// let settings = climastat::get_configuration()?;
/// println!("binding {}", settings.http.bind);
/// # Ok(())
/// # }
/// ```
pub fn get_configuration() -> Result<Settings, ConfigError> {
    Config::builder()
        .set_default("http.bind", "127.0.0.1:5000")?
        .set_default("database.url", "sqlite://resources/climate.sqlite")?
        .add_source(File::with_name("configuration/climastat").required(false))
        .add_source(config::Environment::with_prefix("APP").separator("_"))
        .build()?
        .try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_parse() -> Result<(), ConfigError> {
        let settings = get_configuration()?;
        assert!(!settings.http.bind.is_empty());
        assert!(settings.database.url.starts_with("sqlite://"));
        Ok(())
    }
}
