//! Deployment configuration: the public site origin and the content-API origin.
//!
//! Both are plain strings read from the environment. The only massaging is
//! trailing-slash trimming on the site URL and stripping a versioned `/api/v1`
//! suffix from the API URL, so one configured origin works for every endpoint
//! the client derives from it. Neither value is validated beyond that; the
//! builders interpolate whatever is configured.

use url::Url;

/// Environment variable holding the public site origin.
pub const SITE_URL_VAR: &str = "FOLIO_SITE_URL";
/// Environment variable holding the content-API origin.
pub const API_URL_VAR: &str = "FOLIO_API_URL";

const DEFAULT_SITE_URL: &str = "http://localhost:3000";
const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Resolved origins for one deployment.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Public origin pages are addressed under, without a trailing slash.
    pub site_url: String,
    /// Content-API origin with any `/api/v1` suffix already stripped.
    pub api_url: String,
}

impl SiteConfig {
    pub fn new(site_url: &str, api_url: &str) -> Self {
        Self {
            site_url: normalize_site_url(site_url),
            api_url: normalize_api_url(api_url),
        }
    }

    /// Read configuration from `FOLIO_SITE_URL` / `FOLIO_API_URL`, falling
    /// back to local-development defaults.
    pub fn from_env() -> Self {
        let site = std::env::var(SITE_URL_VAR).unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
        let api = std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::new(&site, &api)
    }

    /// Whether both configured origins parse as absolute URLs.
    ///
    /// Advisory only. A deployment behind an exotic proxy may configure
    /// something `url` rejects, and the documents still render with it.
    pub fn is_well_formed(&self) -> bool {
        Url::parse(&self.site_url).is_ok() && Url::parse(&self.api_url).is_ok()
    }
}

fn normalize_site_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

fn normalize_api_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let stripped = trimmed.strip_suffix("/api/v1").unwrap_or(trimmed);
    stripped.trim_end_matches('/').to_string()
}
