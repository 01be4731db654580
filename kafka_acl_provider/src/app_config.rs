use anyhow::Context;
use config::Config;
use kafka_acl::connection_settings::{ConnectionSettings, DEFAULT_API_HOSTNAME};
use serde::Deserialize;
use std::fmt::{Debug, Formatter};
use std::time::Duration;
use tracing::info;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Deserialize)]
pub struct AppConfig {
    pub api_hostname: String,
    pub username: String,
    pub api_key: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn build() -> Result<Self, anyhow::Error> {
        let config = Config::builder()
            .set_default("api_hostname", DEFAULT_API_HOSTNAME)
            .context("While setting default api hostname")?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)
            .context("While setting default request timeout")?
            .add_source(config::File::with_name("providersettings").required(false))
            .add_source(
                config::Environment::with_prefix("INSTACLUSTR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("While building config")?;

        let deserialized_config = config
            .try_deserialize::<AppConfig>()
            .context("While deserializing config")?;

        info!("App config: {deserialized_config:?}");

        Ok(deserialized_config)
    }

    pub fn connection_settings(&self) -> ConnectionSettings {
        ConnectionSettings {
            api_hostname: self.api_hostname.clone(),
            username: self.username.clone(),
            api_key: self.api_key.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

impl Debug for AppConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_hostname", &self.api_hostname)
            .field("username", &self.username)
            .field("api_key", &"***")
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}
