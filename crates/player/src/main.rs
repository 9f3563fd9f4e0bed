//! osrelay Player - look up a player from the terminal.
//!
//! Usage: `osrelay-player <player name>` (words are joined with spaces).

use std::process::ExitCode;
use std::time::Duration;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use osrelay_player::{PlayerClient, DEFAULT_ENGINE_URL};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "osrelay_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let name = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let engine_url =
        std::env::var("OSRELAY_ENGINE_URL").unwrap_or_else(|_| DEFAULT_ENGINE_URL.to_string());

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;
    let client = PlayerClient::new(http, &engine_url);

    match client.search(&name).await {
        Ok(report) => {
            for line in report.lines() {
                println!("{line}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
