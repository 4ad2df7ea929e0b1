//! folio-seo binary: serve the discovery documents over HTTP, or emit either
//! one to stdout for static deployments.

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_seo::api::HttpContentApi;
use folio_seo::config::SiteConfig;
use folio_seo::server::{self, AppState};
use folio_seo::{render, robots, sitemap};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "folio-seo", version, about = "Discoverability service for the Folio journal platform")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serve /sitemap.xml, /robots.txt, and /healthz.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1:8091")]
        addr: SocketAddr,
    },
    /// Build the sitemap once and print the XML.
    Sitemap,
    /// Print robots.txt for the configured site URL.
    Robots,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = SiteConfig::from_env();

    match cli.command {
        Command::Serve { addr } => {
            if !config.is_well_formed() {
                warn!(
                    site_url = %config.site_url,
                    api_url = %config.api_url,
                    "configured origin does not parse as an absolute URL, documents will carry it verbatim"
                );
            }
            info!("starting folio-seo v{}", env!("CARGO_PKG_VERSION"));
            let state = AppState {
                api: Arc::new(HttpContentApi::new(config.api_url.clone())),
                config: Arc::new(config),
            };
            server::serve(addr, state).await
        }
        Command::Sitemap => {
            let api = HttpContentApi::new(config.api_url.clone());
            let entries = sitemap::build(&config, &api).await;
            print!("{}", render::sitemap_xml(&entries));
            Ok(())
        }
        Command::Robots => {
            let policy = robots::build_policy(&config.site_url);
            print!("{}", render::robots_txt(&policy));
            Ok(())
        }
    }
}

/// Environment variable selecting JSON log output, for deployments that ship
/// logs to a structured collector.
const LOG_JSON_VAR: &str = "FOLIO_LOG_JSON";

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive("folio_seo=info".parse().unwrap());
    if wants_json_logs(std::env::var(LOG_JSON_VAR).ok().as_deref()) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn wants_json_logs(value: Option<&str>) -> bool {
    matches!(value, Some(v) if v == "1" || v.eq_ignore_ascii_case("true"))
}
