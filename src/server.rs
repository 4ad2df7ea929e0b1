//! HTTP surface for the discovery documents.
//!
//! `/sitemap.xml` and `/robots.txt` always answer 200 with a syntactically
//! valid document; upstream degradation shows up as missing entries, never as
//! a 5xx. A lightweight middleware tags every request with its [`RouteClass`]
//! so the session-aware guard fronting the rest of the platform can act on
//! it. Classification alone never rejects.

use crate::api::ContentApi;
use crate::config::SiteConfig;
use crate::render;
use crate::robots;
use crate::routes::{self, RouteClass};
use crate::sitemap;
use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::header;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub api: Arc<dyn ContentApi>,
}

/// Assemble the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/sitemap.xml", get(serve_sitemap))
        .route("/robots.txt", get(serve_robots))
        .route("/healthz", get(healthz))
        .layer(middleware::from_fn(classify_request))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server exited with an error")
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}

async fn serve_sitemap(State(state): State<AppState>) -> impl IntoResponse {
    let entries = sitemap::build(&state.config, state.api.as_ref()).await;
    debug!(entries = entries.len(), "serving sitemap");
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render::sitemap_xml(&entries),
    )
}

async fn serve_robots(State(state): State<AppState>) -> impl IntoResponse {
    let policy = robots::build_policy(&state.config.site_url);
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        render::robots_txt(&policy),
    )
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Tag the request with its route class for downstream guards. Advisory: the
/// request proceeds either way.
async fn classify_request(mut request: Request, next: Next) -> Response {
    let class = routes::classify(request.uri().path());
    if class == RouteClass::Protected {
        debug!(path = %request.uri().path(), "protected path, deferring to the session guard");
    }
    request.extensions_mut().insert(class);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Extension;

    async fn echo_route_class(Extension(class): Extension<RouteClass>) -> &'static str {
        match class {
            RouteClass::Public => "public",
            RouteClass::Protected => "protected",
        }
    }

    async fn spawn_classifier_app() -> SocketAddr {
        let app = Router::new()
            .route("/articles", get(echo_route_class))
            .route("/dashboard/:rest", get(echo_route_class))
            .layer(middleware::from_fn(classify_request));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        addr
    }

    #[tokio::test]
    async fn test_requests_are_tagged_with_their_route_class() {
        let addr = spawn_classifier_app().await;

        // The handler only answers if the middleware inserted the extension.
        let response = reqwest::get(format!("http://{addr}/articles")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "public");

        let response = reqwest::get(format!("http://{addr}/dashboard/jobs")).await.unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(response.text().await.unwrap(), "protected");
    }
}
