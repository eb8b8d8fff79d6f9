use std::sync::Arc;

use thiserror::Error;

/// Failure of a single fetch attempt against one catalog source.
///
/// Every variant is treated as transient by the retry policy; none of them
/// escapes [`crate::service::CatalogService::catalog`] directly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {url}: {source}")]
    Deserialize {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Terminal failure of a fetch sequence: the primary and the fallback both
/// exhausted their attempt budgets.
///
/// Cloneable so one coalesced outcome can fan out to every concurrent
/// waiter; the final per-source causes are shared, not duplicated.
#[derive(Debug, Clone, Error)]
#[error("catalog unavailable: primary failed ({primary}); fallback failed ({fallback})")]
pub struct CatalogUnavailable {
    /// Final error from the primary source after all of its attempts.
    #[source]
    pub primary: Arc<FetchError>,
    /// Final error from the fallback source after all of its attempts.
    pub fallback: Arc<FetchError>,
}
