//! Client configuration read from the environment.

use std::time::Duration;

/// Namespace used when `NAMESPACE` is unset.
const DEFAULT_NAMESPACE: &str = "default";

/// Default sleep bounds between samples, in seconds (inclusive).
const DEFAULT_MIN_SLEEP_SECS: u64 = 1;
const DEFAULT_MAX_SLEEP_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    pub min_sleep: Duration,
    pub max_sleep: Duration,
}

impl ClientConfig {
    /// | Env Var               | Default                                   |
    /// |-----------------------|-------------------------------------------|
    /// | `API_BASE_URL`        | derived from `NAMESPACE`, see [`service_url`] |
    /// | `NAMESPACE`           | `default`                                 |
    /// | `POLL_MIN_SLEEP_SECS` | `1`                                       |
    /// | `POLL_MAX_SLEEP_SECS` | `5`                                       |
    pub fn from_env() -> Self {
        let base_url = std::env::var("API_BASE_URL").unwrap_or_else(|_| {
            let namespace =
                std::env::var("NAMESPACE").unwrap_or_else(|_| DEFAULT_NAMESPACE.into());
            service_url(&namespace)
        });

        let min_secs = env_secs("POLL_MIN_SLEEP_SECS", DEFAULT_MIN_SLEEP_SECS);
        let max_secs = env_secs("POLL_MAX_SLEEP_SECS", DEFAULT_MAX_SLEEP_SECS).max(min_secs);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            min_sleep: Duration::from_secs(min_secs),
            max_sleep: Duration::from_secs(max_secs),
        }
    }
}

/// In-cluster URL of the API service for a namespace.
pub fn service_url(namespace: &str) -> String {
    format!("http://devspace-example-python-simple.{namespace}.svc.cluster.local")
}

fn env_secs(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
