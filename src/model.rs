//! Wire data model for the content API.
//!
//! Field names follow the backend's camelCase JSON. Volume attribution on an
//! article arrives either as a bare number or as an embedded volume object,
//! so it is modeled as an explicit union rather than shape-sniffed at every
//! use site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article as returned by the published-articles listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRef {
    #[serde(default)]
    pub id: String,
    /// Bare volume number or embedded volume object. Absent on degenerate
    /// upstream records.
    #[serde(default)]
    pub volume: Option<VolumeSource>,
    /// Display number as the backend stores it, usually zero-padded. Opaque
    /// here: it is interpolated into URLs, never parsed.
    #[serde(default)]
    pub article_number: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// A volume as returned by the volumes listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeRef {
    #[serde(default)]
    pub id: String,
    pub number: u32,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Volume attribution as it appears on an article: the bare number, or an
/// object carrying it under `volume` or `number`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VolumeSource {
    Raw(u32),
    Embedded(EmbeddedVolume),
}

/// The slice of an embedded volume object needed for URL resolution. Both
/// fields are optional because upstream emits either spelling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedVolume {
    #[serde(default)]
    pub volume: Option<u32>,
    #[serde(default)]
    pub number: Option<u32>,
}
