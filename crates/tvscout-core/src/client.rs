//! HTTP plumbing for the TVMaze API.

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::url::BASE_URL;

const USER_AGENT: &str = concat!("tvscout/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root the client talks to (default: the public TVMaze API)
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
        }
    }
}

/// Thin wrapper around `reqwest::Client` bound to one API root.
///
/// Issues exactly one GET per call: no retries, no timeout, no rate
/// limiting. A failed request is terminal for that interaction and is
/// surfaced to the caller unchanged.
pub struct TvMazeClient {
    client: reqwest::Client,
    base_url: String,
}

impl TvMazeClient {
    /// Create a new client against the production API.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// GET `path` relative to the configured root and decode the JSON body.
    ///
    /// Non-2xx statuses and undecodable payloads both surface as
    /// [`TvMazeError::Http`](crate::TvMazeError::Http).
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_production() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.tvmaze.com");
    }

    #[test]
    fn client_builds() {
        assert!(TvMazeClient::new().is_ok());
    }

    #[test]
    fn client_accepts_a_custom_root() {
        let config = ClientConfig {
            base_url: "http://127.0.0.1:9".to_string(),
        };
        assert!(TvMazeClient::with_config(config).is_ok());
    }
}
