//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::client::http::DEFAULT_API_BASE_URL;

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    /// Base URL of the lead REST backend.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    pub templates_dir: String,
    /// Signing key for flash message cookies; at least 64 bytes.
    pub secret: String,
    /// Upper bound accepted for the headcount field; unbounded when unset.
    #[serde(default)]
    pub headcount_max: Option<i64>,
}
