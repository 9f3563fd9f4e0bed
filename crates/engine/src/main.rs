//! osrelay Engine - Main entry point.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use osrelay_engine::api;
use osrelay_engine::infrastructure::{
    catfact::CatFactClient, config::EngineConfig, hiscores::HiscoresClient,
    templeosrs::TempleClient, upstream::build_http_client,
};
use osrelay_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may be run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "osrelay_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting osrelay Engine");

    let config = EngineConfig::from_env()?;
    tracing::info!(
        hiscores = %config.hiscores_base_url,
        temple = %config.temple_base_url,
        catfact = %config.catfact_base_url,
        timeout_secs = config.upstream_timeout.as_secs(),
        default_player = ?config.default_player.as_ref().map(|p| p.as_str()),
        "Upstreams configured"
    );

    // One client, one connection pool, shared by every relay
    let http = build_http_client(config.upstream_timeout)?;

    let app = Arc::new(App::new(
        Arc::new(HiscoresClient::new(http.clone(), &config.hiscores_base_url)),
        Arc::new(TempleClient::new(http.clone(), &config.temple_base_url)),
        Arc::new(CatFactClient::new(http, &config.catfact_base_url)),
        config.default_player.clone(),
    ));

    let router = api::router(app, &config);

    // Start server
    let addr = config.bind_addr()?;
    tracing::info!(static_dir = %config.static_dir.display(), "Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
