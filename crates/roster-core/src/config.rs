use anyhow::Result;
use config::{Config, Map};
use serde::Deserialize;

/// Read directly, since the `_` separator would split it into nested keys.
const MAX_CONNECTIONS_VAR: &str = "DATABASE_MAX_CONNECTIONS";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u8,
}

impl DatabaseConfig {
    /// ## Summary
    /// Builds the `PostgreSQL` connection URL from the individual options.
    /// The user and password are percent-encoded.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.user),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        )
    }
}

// Keeps the password out of the startup log line.
impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `.env` file and environment variables into a `Settings`.
    /// Environment variables take precedence over `config.toml` values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Loads settings with `env` standing in for the process environment when given.
    fn load_from(env: Option<Map<String, String>>) -> Result<Self> {
        let max_connections = match &env {
            Some(vars) => vars.get(MAX_CONNECTIONS_VAR).cloned(),
            None => std::env::var(MAX_CONNECTIONS_VAR).ok(),
        }
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.trim().parse::<i64>())
        .transpose()?;

        Ok(Config::builder()
            .set_default("database.host", "db")?
            .set_default("database.port", 5432)?
            .set_default("database.name", "care_roster")?
            .set_default("database.user", "postgres")?
            .set_default("database.password", "postgres")?
            .set_default("database.max_connections", 4)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env file
            .add_source(
                config::Environment::default()
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true)
                    .source(env),
            )
            .set_override_option("database.max_connections", max_connections)?
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
