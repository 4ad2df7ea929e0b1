//! Discoverability core for the Folio journal platform: canonical article and
//! volume URLs, public/protected route classification, crawler policy, and a
//! sitemap assembled on demand from live backend data.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod robots;
pub mod routes;
pub mod server;
pub mod sitemap;
pub mod urls;

pub use api::{ContentApi, HttpContentApi};
pub use config::SiteConfig;
pub use error::FetchError;
pub use model::{ArticleRef, VolumeRef, VolumeSource};
pub use routes::RouteClass;
pub use sitemap::{ChangeFrequency, SitemapEntry};
