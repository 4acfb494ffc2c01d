//! Fetching JSON payloads from a remote endpoint.
//!
//! Every failure surfaces as a [`FetchError`] carrying the fixed message
//! [`FETCH_ERROR_MESSAGE`] and the underlying [`FetchFailure`]. Nothing is
//! retried.

mod config;
mod error;

pub use config::{FetchConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use error::{FetchError, FetchFailure, FETCH_ERROR_MESSAGE};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Fetch and parse the JSON payload at [`DEFAULT_ENDPOINT`].
pub async fn fetch_remote_data() -> Result<Value, FetchError> {
    DataFetcher::new(&FetchConfig::default())?.fetch().await
}

/// A client bound to a single endpoint.
#[derive(Debug, Clone)]
pub struct DataFetcher {
    client: reqwest::Client,
    endpoint: Url,
}

impl DataFetcher {
    /// Create a new fetcher from `config`.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let endpoint =
            Url::parse(&config.endpoint).map_err(|source| FetchFailure::InvalidEndpoint {
                endpoint: config.endpoint.clone(),
                source,
            })?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(FetchFailure::Client)?;

        Ok(Self { client, endpoint })
    }

    /// The endpoint this fetcher reads from.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// `GET` the endpoint and parse the response body as JSON.
    ///
    /// Non-success statuses count as failures.
    pub async fn fetch<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        debug!(endpoint = %self.endpoint, "fetching remote data");
        let res = self.request().await;
        if let Err(err) = &res {
            warn!(endpoint = %self.endpoint, reason = %err.reason(), "remote fetch failed");
        }
        res
    }

    async fn request<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(FetchFailure::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status).into());
        }

        let payload = response.json().await.map_err(FetchFailure::Decode)?;
        Ok(payload)
    }
}
