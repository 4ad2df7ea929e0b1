//! Content API client.
//!
//! The backend is an external collaborator; this module pins down the two
//! endpoint shapes the sitemap needs and provides the `reqwest` client used
//! in production. The trait seam exists so the builder can be exercised
//! against scripted sources.

use crate::error::FetchError;
use crate::model::{ArticleRef, VolumeRef};
use async_trait::async_trait;
use reqwest::header::CACHE_CONTROL;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Default bound on each content fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Staleness the transport layer may serve without revalidating, in seconds.
/// A tolerance hint, not a correctness requirement.
pub const REVALIDATE_SECS: u64 = 3600;

/// Listing operations the sitemap builder needs from the backend.
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Published articles in upstream order, capped at `limit`.
    async fn published_articles(&self, limit: usize) -> Result<Vec<ArticleRef>, FetchError>;

    /// All volumes in upstream order.
    async fn volumes(&self) -> Result<Vec<VolumeRef>, FetchError>;
}

/// Envelope the article listing arrives in.
#[derive(Debug, Deserialize)]
struct ArticleListing {
    #[serde(default)]
    articles: Vec<ArticleRef>,
}

/// `reqwest`-backed client against a configured API origin.
pub struct HttpContentApi {
    client: reqwest::Client,
    origin: String,
    timeout: Duration,
}

impl HttpContentApi {
    /// Client for an origin already normalized by [`crate::config::SiteConfig`]
    /// (no `/api/v1` suffix, no trailing slash).
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            origin: origin.into(),
            timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Same client with a different per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn articles_url(&self, limit: usize) -> String {
        format!("{}/api/v1/articles/published?limit={limit}", self.origin)
    }

    fn volumes_url(&self) -> String {
        format!("{}/api/v1/volumes", self.origin)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .header(CACHE_CONTROL, format!("max-age={REVALIDATE_SECS}"))
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ContentApi for HttpContentApi {
    async fn published_articles(&self, limit: usize) -> Result<Vec<ArticleRef>, FetchError> {
        let listing: ArticleListing = self.get_json(&self.articles_url(limit)).await?;
        Ok(listing.articles)
    }

    async fn volumes(&self) -> Result<Vec<VolumeRef>, FetchError> {
        self.get_json(&self.volumes_url()).await
    }
}
