//! Public/protected route classification.
//!
//! Runs at the edge before any session state exists, so it is a pure function
//! of the path and never rejects anything itself. The contract is one-sided:
//! a public path must never classify as `Protected` (that would hide it from
//! anonymous readers and crawlers), while an unlisted private path coming out
//! `Public` is tolerated because the session guard downstream still enforces
//! access.

/// Whether a path is reachable without a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    Protected,
}

/// Route prefixes reachable anonymously: auth flows, the article and volume
/// browse surfaces, and the static informational pages. The home page is
/// matched exactly; as a prefix it would swallow every path on the site.
pub const PUBLIC_ROUTE_PREFIXES: &[&str] = &[
    "/auth",
    "/articles",
    "/vol",
    "/about",
    "/contact",
    "/guidelines",
    "/editorial-board",
    "/masthead",
];

/// Classify a request path. Matching is by prefix, so `/articles/99` and
/// `/vol/3/article007` fall under their section rules.
pub fn classify(path: &str) -> RouteClass {
    if path == "/" || PUBLIC_ROUTE_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        RouteClass::Public
    } else {
        RouteClass::Protected
    }
}
