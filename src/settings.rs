use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub debug: bool,
    pub port: u16,
    pub enable_swagger: bool,
    pub static_dir: String,
    /// When true, signup on a full activity fails with 400 instead of
    /// overfilling it. Off by default to match the original behavior.
    pub enforce_capacity: bool,
    /// Optional JSON file to seed the activity catalog from instead of the
    /// built-in defaults.
    pub activities_file: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let config = Config::builder()
            // Load from environment variables with APP_ prefix. No nesting
            // separator: the settings are flat, so APP_ENFORCE_CAPACITY must
            // map to the `enforce_capacity` key rather than a nested table.
            .add_source(Environment::with_prefix("APP"))
            .set_default("debug", false)?
            .set_default("port", 8080)?
            .set_default("enable_swagger", true)?
            .set_default("static_dir", "static")?
            .set_default("enforce_capacity", false)?
            .build()?;

        config.try_deserialize()
    }
}
