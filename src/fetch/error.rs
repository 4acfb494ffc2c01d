use thiserror::Error;

/// The message every [`FetchError`] carries.
pub const FETCH_ERROR_MESSAGE: &str = "An Error Occurred";

/// A failed remote fetch.
///
/// Displays as [`FETCH_ERROR_MESSAGE`]; the underlying [`FetchFailure`] is
/// available through [`reason`][FetchError::reason] and as the error source.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct FetchError {
    #[source]
    reason: FetchFailure,
    message: &'static str,
}

impl FetchError {
    /// Wrap `reason` with the fixed message.
    pub fn new(reason: FetchFailure) -> Self {
        Self {
            reason,
            message: FETCH_ERROR_MESSAGE,
        }
    }

    /// What went wrong.
    pub fn reason(&self) -> &FetchFailure {
        &self.reason
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        self.message
    }

    /// Unwrap into the underlying reason.
    pub fn into_reason(self) -> FetchFailure {
        self.reason
    }
}

impl From<FetchFailure> for FetchError {
    fn from(reason: FetchFailure) -> Self {
        Self::new(reason)
    }
}

/// The reason a remote fetch failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchFailure {
    /// The configured endpoint isn't an absolute URL.
    #[error("invalid endpoint `{endpoint}`")]
    InvalidEndpoint {
        /// The rejected endpoint.
        endpoint: String,
        /// Why it was rejected.
        #[source]
        source: url::ParseError,
    },
    /// The HTTP client couldn't be constructed.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    /// The request didn't complete.
    #[error("request failed")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server responded with status {0}")]
    Status(reqwest::StatusCode),
    /// The response body wasn't the expected JSON.
    #[error("response body could not be decoded")]
    Decode(#[source] reqwest::Error),
}
