use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_radius_km")]
    pub default_radius_km: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_km: default_radius_km(),
        }
    }
}

fn default_radius_km() -> f64 {
    10.0
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Configuration file (config/default.toml)
    /// 2. Local overrides (config/local.toml)
    /// 3. Environment variables (prefixed with DONORLINK_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with DONORLINK_)
            // e.g., DONORLINK_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DONORLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DONORLINK")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the DATABASE_URL convenience override.
///
/// DATABASE_URL wins over DONORLINK_DATABASE__URL, which wins over the file.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let database_url = env::var("DATABASE_URL")
        .or_else(|_| env::var("DONORLINK_DATABASE__URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = database_url {
        builder = builder.set_override("database.url", url)?;
    }

    builder.build()
}
