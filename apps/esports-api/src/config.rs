use axum::http::HeaderValue;
use core_config::{AppInfo, ConfigError, FromEnv, app_info, env_first, server::ServerConfig};

use database::mongodb::{DATABASE_VARS, MongoConfig, URL_VARS};

pub use core_config::Environment;

/// Application configuration, composed from the shared config components
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when the database variables are missing; the API then runs degraded
    pub mongodb: Option<MongoConfig>,
    pub server: ServerConfig,
    pub environment: Environment,
    pub database_url_set: bool,
    pub database_name_set: bool,
    /// Empty means permissive CORS
    pub cors_allowed_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;

        let mongodb = match MongoConfig::from_env() {
            Ok(config) if config.app_name.is_some() => Some(config),
            Ok(config) => Some(config.with_app_name(app.name)),
            Err(ConfigError::MissingEnvVar(_)) => None,
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            app,
            mongodb,
            server,
            environment,
            database_url_set: env_first(&URL_VARS).is_some(),
            database_name_set: env_first(&DATABASE_VARS).is_some(),
            cors_allowed_origins: cors_origins_from_env()?,
        })
    }
}

/// Parse `CORS_ALLOWED_ORIGIN` as a comma-separated origin list.
fn cors_origins_from_env() -> Result<Vec<HeaderValue>, ConfigError> {
    let Ok(raw) = std::env::var("CORS_ALLOWED_ORIGIN") else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: format!("{origin}: {e}"),
            })
        })
        .collect()
}
