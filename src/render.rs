//! Renderers for the two discovery documents.
//!
//! Sitemap XML follows the sitemaps.org urlset schema; robots.txt follows the
//! plain REP text format. Both render from already-built values and cannot
//! fail.

use crate::robots::{CrawlerRuleSet, UserAgents};
use crate::sitemap::SitemapEntry;
use chrono::SecondsFormat;
use std::borrow::Cow;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Render entries as a sitemaps.org urlset document.
pub fn sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(128 + entries.len() * 192);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.url));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true));
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(entry.change_frequency.as_str());
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(&format!("{:.1}", entry.priority));
        xml.push_str("</priority>\n  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Render the policy as robots.txt text: rule groups in order, blank line
/// between groups, sitemap pointer last.
pub fn robots_txt(policy: &CrawlerRuleSet) -> String {
    let mut txt = String::with_capacity(512);

    for rule in &policy.rules {
        match &rule.user_agents {
            UserAgents::Any => txt.push_str("User-agent: *\n"),
            UserAgents::One(agent) => {
                txt.push_str("User-agent: ");
                txt.push_str(agent);
                txt.push('\n');
            }
            UserAgents::Many(agents) => {
                for agent in *agents {
                    txt.push_str("User-agent: ");
                    txt.push_str(agent);
                    txt.push('\n');
                }
            }
        }
        for path in rule.allow {
            txt.push_str("Allow: ");
            txt.push_str(path);
            txt.push('\n');
        }
        for path in rule.disallow {
            txt.push_str("Disallow: ");
            txt.push_str(path);
            txt.push('\n');
        }
        txt.push('\n');
    }

    txt.push_str("Sitemap: ");
    txt.push_str(&policy.sitemap);
    txt.push('\n');
    txt
}

/// Escape the five XML-significant characters, borrowing when there is
/// nothing to do.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
