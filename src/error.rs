// Errors raised while fetching a metrics snapshot

use thiserror::Error;

/// A poll cycle failed to produce a snapshot. Every variant is treated the same
/// way by the poller: logged, then the next tick tries again.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, timeout, TLS failure and similar.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}
