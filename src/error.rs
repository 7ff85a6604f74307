//! Error types for the relay.
//!
//! `SearchError` is the request-fatal side: the backend query failed or the
//! enrichment fan-out could not be set up at all. `FetchFailure` is the
//! absorbed side: a single enrichment fetch went wrong, which only costs
//! that URL its `raw_content` entry and never fails the request.

/// Errors that fail a search request as a whole.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// SearXNG answered with a non-200 status.
    #[error("backend returned status {0}")]
    BackendStatus(u16),

    /// The SearXNG request hit its timeout.
    #[error("backend request timed out")]
    BackendTimeout,

    /// Transport or decode failure talking to SearXNG.
    #[error("backend request failed: {0}")]
    Backend(String),

    /// The enrichment HTTP client could not be constructed, so no fetch
    /// task was ever launched.
    #[error("could not build scrape client: {0}")]
    ScrapeClient(String),
}

impl SearchError {
    /// Classify a reqwest error from the backend call.
    pub fn from_backend(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SearchError::BackendTimeout
        } else {
            SearchError::Backend(err.to_string())
        }
    }
}

/// Why a single enrichment fetch produced no content. Absorbed inside the
/// fan-out: callers only ever observe the missing map key.
#[derive(Debug, thiserror::Error)]
pub enum FetchFailure {
    /// The fetch exceeded the configured per-fetch timeout.
    #[error("fetch timed out")]
    Timeout,

    /// The page answered with a non-200 status.
    #[error("fetch returned status {0}")]
    Status(u16),

    /// Connection, TLS, redirect or body-read failure.
    #[error("fetch failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchFailure::Timeout
        } else {
            FetchFailure::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_backend_status() {
        let err = SearchError::BackendStatus(502);
        assert_eq!(err.to_string(), "backend returned status 502");
    }

    #[test]
    fn test_display_backend_timeout() {
        let err = SearchError::BackendTimeout;
        assert_eq!(err.to_string(), "backend request timed out");
    }

    #[test]
    fn test_display_backend_transport() {
        let err = SearchError::Backend("connection refused".into());
        assert_eq!(err.to_string(), "backend request failed: connection refused");
    }

    #[test]
    fn test_display_scrape_client() {
        let err = SearchError::ScrapeClient("invalid user agent".into());
        assert_eq!(
            err.to_string(),
            "could not build scrape client: invalid user agent"
        );
    }

    #[test]
    fn test_display_fetch_failure_status() {
        let err = FetchFailure::Status(500);
        assert_eq!(err.to_string(), "fetch returned status 500");
    }

    #[test]
    fn test_errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SearchError>();
        assert_send_sync::<FetchFailure>();
    }
}
