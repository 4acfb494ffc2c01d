use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The endpoint [`fetch_remote_data`][super::fetch_remote_data] reads from.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Request timeout used unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `User-Agent` header sent with every request unless configured otherwise.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Settings for a [`DataFetcher`][super::DataFetcher].
///
/// Every field is optional when deserializing; missing fields take their
/// default.
///
/// ```
/// use settle_utils::fetch::FetchConfig;
///
/// let config: FetchConfig = serde_json::from_str(r#"{ "timeout_secs": 5 }"#).unwrap();
/// assert_eq!(config.endpoint, settle_utils::fetch::DEFAULT_ENDPOINT);
/// assert_eq!(config.timeout_secs, 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Absolute URL to `GET`.
    pub endpoint: String,
    /// Whole-request timeout in seconds. `0` disables the timeout.
    pub timeout_secs: u64,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from(DEFAULT_ENDPOINT),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: String::from(DEFAULT_USER_AGENT),
        }
    }
}

impl FetchConfig {
    /// Replace the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Replace the timeout, rounded down to whole seconds.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    /// Replace the `User-Agent` header value.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}
