//! Sitemap assembly.
//!
//! Merges three groups in a fixed order: the static page seed, published
//! articles, and volumes. The two remote groups are fetched independently and
//! each failure degrades to zero entries from that source. Every step after
//! the fetches is total, so the builder always returns a usable sequence and
//! the endpoint serving it never has a reason to answer 5xx.

use crate::api::ContentApi;
use crate::config::SiteConfig;
use crate::model::{ArticleRef, VolumeRef};
use crate::urls;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

/// Cap on the published-article listing requested from the backend.
pub const ARTICLE_FETCH_LIMIT: usize = 1000;

/// How often crawlers should expect a page to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    /// The token used in sitemap XML.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// One sitemap record. Constructed fresh on every build, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
}

/// Fixed pages seeded ahead of remote content, with hand-assigned change
/// frequency and priority. Home ranks highest, the masthead lowest.
pub const STATIC_PAGES: &[(&str, ChangeFrequency, f32)] = &[
    ("/", ChangeFrequency::Daily, 1.0),
    ("/articles", ChangeFrequency::Daily, 0.9),
    ("/vol", ChangeFrequency::Weekly, 0.8),
    ("/about", ChangeFrequency::Monthly, 0.6),
    ("/contact", ChangeFrequency::Monthly, 0.5),
    ("/guidelines", ChangeFrequency::Monthly, 0.6),
    ("/editorial-board", ChangeFrequency::Monthly, 0.4),
    ("/masthead", ChangeFrequency::Yearly, 0.3),
];

/// Build the sitemap: static entries, then articles, then volumes, each group
/// in upstream order.
///
/// The two fetches run concurrently but land in that fixed order. A failed
/// fetch is logged and accepted as final for this build; there is no retry.
pub async fn build(config: &SiteConfig, api: &dyn ContentApi) -> Vec<SitemapEntry> {
    let generated_at = Utc::now();
    let mut entries = static_entries(&config.site_url, generated_at);

    let (articles, volumes) = tokio::join!(
        api.published_articles(ARTICLE_FETCH_LIMIT),
        api.volumes(),
    );

    match articles {
        Ok(articles) => {
            entries.extend(article_entries(&config.site_url, &articles, generated_at));
        }
        Err(e) => warn!("article listing unavailable, sitemap continues without it: {e}"),
    }

    match volumes {
        Ok(volumes) => {
            entries.extend(volume_entries(&config.site_url, &volumes, generated_at));
        }
        Err(e) => warn!("volume listing unavailable, sitemap continues without it: {e}"),
    }

    entries
}

fn static_entries(base_url: &str, generated_at: DateTime<Utc>) -> Vec<SitemapEntry> {
    STATIC_PAGES
        .iter()
        .map(|&(path, change_frequency, priority)| SitemapEntry {
            url: format!("{base_url}{path}"),
            last_modified: generated_at,
            change_frequency,
            priority,
        })
        .collect()
}

fn article_entries(
    base_url: &str,
    articles: &[ArticleRef],
    generated_at: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    articles
        .iter()
        .enumerate()
        .map(|(index, article)| {
            let volume = urls::resolve_volume_number(article.volume.as_ref());
            // An empty display number is as good as a missing one.
            let number = article
                .article_number
                .as_deref()
                .filter(|number| !number.is_empty())
                .map(str::to_owned)
                .unwrap_or_else(|| urls::format_article_number(index));
            SitemapEntry {
                url: format!("{base_url}{}", urls::article_path(volume, &number)),
                last_modified: article.updated_at.or(article.published_at).unwrap_or(generated_at),
                change_frequency: ChangeFrequency::Monthly,
                priority: 0.8,
            }
        })
        .collect()
}

fn volume_entries(
    base_url: &str,
    volumes: &[VolumeRef],
    generated_at: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    volumes
        .iter()
        .map(|volume| SitemapEntry {
            url: format!("{base_url}{}", urls::volume_path(volume.number)),
            last_modified: volume.updated_at.or(volume.published_at).unwrap_or(generated_at),
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.7,
        })
        .collect()
}
