//! Canonical URL scheme for articles and volumes.
//!
//! One path shape is authoritative everywhere: `/vol/{volume}` for volumes
//! and `/vol/{volume}/article{number}` for articles. Generation and parsing
//! both live here so the two can never drift; external indexes depend on
//! these strings byte for byte.

use crate::model::VolumeSource;
use regex::Regex;
use std::sync::LazyLock;

/// Volume used when a record carries no usable volume attribution.
pub const DEFAULT_VOLUME: u32 = 1;

static ARTICLE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/vol/(\d+)/article(.+)$").unwrap());

/// Canonical path for an article.
///
/// `article_number` is interpolated verbatim. Callers that need the path to
/// round-trip through [`parse_article_path`] must not pass slashes in it.
pub fn article_path(volume: u32, article_number: &str) -> String {
    format!("/vol/{volume}/article{article_number}")
}

/// Canonical path for a volume.
pub fn volume_path(volume: u32) -> String {
    format!("/vol/{volume}")
}

/// Parse a canonical article path back into its volume and article number.
///
/// `None` is the normal outcome for every other route on the site, not an
/// error. The article-number capture runs greedily to the end of the string,
/// so a number containing `/` comes back whole. A digit run too large for
/// `u32` is treated as no match.
pub fn parse_article_path(path: &str) -> Option<(u32, String)> {
    let caps = ARTICLE_PATH_RE.captures(path)?;
    let volume = caps[1].parse().ok()?;
    Some((volume, caps[2].to_string()))
}

/// Zero-padded display number for the article at `index` within a listing,
/// used when a record carries no explicit number: `0 -> "001"`, `9 -> "010"`.
/// Past three digits the field widens rather than truncating.
pub fn format_article_number(index: usize) -> String {
    format!("{:03}", index + 1)
}

/// Numeric volume from whatever attribution upstream provided.
///
/// A bare number wins as-is; an embedded object is read `volume` first, then
/// `number`. Anything else resolves to [`DEFAULT_VOLUME`].
pub fn resolve_volume_number(source: Option<&VolumeSource>) -> u32 {
    match source {
        Some(VolumeSource::Raw(number)) => *number,
        Some(VolumeSource::Embedded(embedded)) => {
            embedded.volume.or(embedded.number).unwrap_or(DEFAULT_VOLUME)
        }
        None => DEFAULT_VOLUME,
    }
}
