//! HTTP registry backend

use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use crate::error::{GraftError, Result};

use super::{INDEX_FILE, RegistrySource};

/// Per-request timeout
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Registry served over HTTP(S) from a base URL
pub struct RemoteRegistry {
    base: String,
    client: Client,
}

impl RemoteRegistry {
    pub fn new(base: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("graft/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| GraftError::RegistryFetchFailed {
                location: base.to_string(),
                reason: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            base: base.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Absolute URL of a registry path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches("./"))
    }

    fn get(&self, url: &str) -> Result<String> {
        debug!(url, "GET");
        let fetch_error = |reason: String| GraftError::RegistryFetchFailed {
            location: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("HTTP {status}")));
        }

        response.text().map_err(|e| fetch_error(e.to_string()))
    }
}

impl RegistrySource for RemoteRegistry {
    fn location(&self) -> String {
        self.base.clone()
    }

    fn read_index(&self) -> Result<String> {
        self.get(&self.url_for(INDEX_FILE))
    }

    fn read_file(&self, path: &str) -> Result<String> {
        self.get(&self.url_for(path))
    }
}
