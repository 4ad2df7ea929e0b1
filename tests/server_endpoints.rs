//! The discovery endpoints exercised over real HTTP.

use folio_seo::api::HttpContentApi;
use folio_seo::config::SiteConfig;
use folio_seo::server::{router, AppState};
use folio_seo::sitemap::STATIC_PAGES;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASE: &str = "https://journal.example.org";

async fn spawn_app(api_origin: &str) -> SocketAddr {
    let config = SiteConfig::new(BASE, api_origin);
    let state = AppState {
        api: Arc::new(
            HttpContentApi::new(config.api_url.clone()).with_timeout(Duration::from_millis(500)),
        ),
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn test_robots_txt_endpoint() {
    let addr = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("http://{addr}/robots.txt")).await.unwrap();
    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/plain"));

    let body = response.text().await.unwrap();
    assert!(body.starts_with("User-agent: *\n"));
    assert!(body.contains("Disallow: /dashboard/*\n"));
    assert!(body.contains("User-agent: SemanticScholarBot\n"));
    assert!(body.ends_with(&format!("Sitemap: {BASE}/sitemap.xml\n")));
}

#[tokio::test]
async fn test_sitemap_endpoint_with_live_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/articles/published"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "articles": [
                {"id": "a1", "volume": 2, "articleNumber": "003", "updatedAt": "2026-04-02T08:30:00Z"}
            ]
        })))
        .mount(&backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": "v2", "number": 2}
        ])))
        .mount(&backend)
        .await;

    let addr = spawn_app(&backend.uri()).await;
    let response = reqwest::get(format!("http://{addr}/sitemap.xml")).await.unwrap();

    assert_eq!(response.status(), 200);
    assert!(response
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let body = response.text().await.unwrap();
    assert!(body.contains(&format!("<loc>{BASE}/vol/2/article003</loc>")));
    assert!(body.contains(&format!("<loc>{BASE}/vol/2</loc>")));
    assert!(body.contains("<lastmod>2026-04-02T08:30:00Z</lastmod>"));
}

#[tokio::test]
async fn test_sitemap_endpoint_degrades_without_a_backend() {
    // No backend at all: the endpoint still answers 200 with the static seed.
    let addr = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("http://{addr}/sitemap.xml")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body = response.text().await.unwrap();
    assert_eq!(body.matches("<url>").count(), STATIC_PAGES.len());
    assert!(body.contains(&format!("<loc>{BASE}/</loc>")));
    assert!(body.contains(&format!("<loc>{BASE}/masthead</loc>")));
}

#[tokio::test]
async fn test_healthz() {
    let addr = spawn_app("http://127.0.0.1:9").await;

    let response = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}
