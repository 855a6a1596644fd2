//! Scrape failure classification
//!
//! The upstream scraper collapsed every failure into one absent result,
//! which left callers unable to tell "site unreachable" from "this page
//! has no data". These variants keep that distinction; the interactive
//! front end still prints a single failure message for all of them.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP status {status}")]
    Status { url: String, status: StatusCode },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no recognizable cigar attributes found at {url}")]
    NoAttributes { url: String },

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ScrapeError {
    /// True when retrying later could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_timeout() || source.is_connect(),
            Self::Status { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            Self::Body { .. } => true,
            Self::NoAttributes { .. } => false,
            Self::Client(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_errors_are_transient() {
        let err = ScrapeError::Status {
            url: "https://example.com/p".to_string(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.is_transient());
    }

    #[test]
    fn client_errors_are_not_transient() {
        let err = ScrapeError::Status {
            url: "https://example.com/p".to_string(),
            status: StatusCode::NOT_FOUND,
        };
        assert!(!err.is_transient());
    }

    #[test]
    fn attribute_free_pages_are_not_transient() {
        let err = ScrapeError::NoAttributes {
            url: "https://example.com/p".to_string(),
        };
        assert!(!err.is_transient());
        assert_eq!(
            err.to_string(),
            "no recognizable cigar attributes found at https://example.com/p"
        );
    }
}
