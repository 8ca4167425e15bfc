use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Failure to obtain page markup.
///
/// Robots probe failures never become a `FetchError`; only the page request
/// itself is surfaced.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    Url(String),
    #[error("failed to build HTTP session: {0}")]
    Build(String),
    #[error("failed to fetch page: no response from {url} within {}s", .timeout.as_secs())]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to fetch page: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to fetch page: server returned {status} for {url}")]
    Status { status: StatusCode, url: String },
}

impl FetchError {
    pub(crate) fn from_reqwest(url: &str, timeout: Duration, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
                timeout,
                source,
            }
        } else {
            Self::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    /// HTTP status of the failed page request, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
