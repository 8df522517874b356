use mongodb::{Client, bson::doc, options::ClientOptions};
use std::time::Duration;
use tracing::{info, instrument};

use super::MongoConfig;
use crate::common::{DatabaseError, DatabaseResult, RetryPolicy, retry, retry_with_backoff};

/// Driver options built from `config`.
pub async fn client_options(config: &MongoConfig) -> DatabaseResult<ClientOptions> {
    let mut options = ClientOptions::parse(&config.url)
        .await
        .map_err(|e| DatabaseError::ConfigError(e.to_string()))?;

    options.max_pool_size = Some(config.max_pool_size);
    options.min_pool_size = Some(config.min_pool_size);
    options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
    options.server_selection_timeout =
        Some(Duration::from_secs(config.server_selection_timeout_secs));
    if let Some(app_name) = &config.app_name {
        options.app_name = Some(app_name.clone());
    }

    Ok(options)
}

/// Create a client and verify the server answers a `ping` on the configured database.
///
/// The driver connects lazily, so without the ping an unreachable server would
/// only surface on the first query.
#[instrument(skip(config), fields(url = %config.redacted_url(), database = %config.database))]
pub async fn connect_from_config(config: &MongoConfig) -> DatabaseResult<Client> {
    let client = Client::with_options(client_options(config).await?)?;

    client
        .database(&config.database)
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

    info!("Connected to MongoDB");
    Ok(client)
}

/// [`connect_from_config`] with exponential backoff.
///
/// `None` uses [`RetryPolicy::default`].
pub async fn connect_from_config_with_retry(
    config: &MongoConfig,
    policy: Option<RetryPolicy>,
) -> DatabaseResult<Client> {
    match policy {
        Some(policy) => retry_with_backoff(|| connect_from_config(config), policy).await,
        None => retry(|| connect_from_config(config)).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_client_options_apply_config() {
        let config = MongoConfig {
            max_pool_size: 12,
            min_pool_size: 2,
            connect_timeout_secs: 3,
            server_selection_timeout_secs: 4,
            ..MongoConfig::with_database("mongodb://localhost:27017", "esports")
        }
        .with_app_name("esports_api");

        let options = client_options(&config).await.unwrap();
        assert_eq!(options.max_pool_size, Some(12));
        assert_eq!(options.min_pool_size, Some(2));
        assert_eq!(options.connect_timeout, Some(Duration::from_secs(3)));
        assert_eq!(options.server_selection_timeout, Some(Duration::from_secs(4)));
        assert_eq!(options.app_name.as_deref(), Some("esports_api"));
    }

    #[tokio::test]
    async fn test_client_options_reject_malformed_url() {
        let config = MongoConfig::with_database("postgres://localhost:5432", "esports");
        let err = client_options(&config).await.unwrap_err();
        assert!(matches!(err, DatabaseError::ConfigError(_)));
    }

    #[tokio::test]
    async fn test_connect_fails_fast_against_closed_port() {
        let config = MongoConfig {
            connect_timeout_secs: 1,
            server_selection_timeout_secs: 1,
            ..MongoConfig::with_database("mongodb://127.0.0.1:1", "esports")
        };

        let err = connect_from_config_with_retry(&config, Some(RetryPolicy::new().with_max_retries(0)))
            .await
            .unwrap_err();
        assert!(matches!(err, DatabaseError::ConnectionFailed(_)));
    }
}
