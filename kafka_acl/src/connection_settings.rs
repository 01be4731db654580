use anyhow::bail;
use std::fmt::{Debug, Formatter};
use std::time::Duration;

pub const DEFAULT_API_HOSTNAME: &str = "https://api.instaclustr.com";

pub struct ConnectionSettings {
    pub api_hostname: String,
    pub username: String,
    pub api_key: String,
    pub request_timeout: Duration,
}

impl ConnectionSettings {
    pub fn base_url(&self) -> Result<&str, anyhow::Error> {
        let hostname = self.api_hostname.trim_end_matches('/');
        if hostname.is_empty() {
            bail!("No api hostname specified")
        }

        Ok(hostname)
    }
}

impl Debug for ConnectionSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("api_hostname", &self.api_hostname)
            .field("username", &self.username)
            .field("api_key", &"***")
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
