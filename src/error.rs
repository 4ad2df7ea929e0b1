//! Error type for upstream content fetches.

use thiserror::Error;

/// Failure of a single content-API fetch.
///
/// Each data source fails independently; the sitemap builder absorbs these
/// and keeps assembling the document from whatever sources did answer.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, timeout, or body decode failure from the HTTP client.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },
}
