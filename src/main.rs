//! MATCHCAST — Football Over/Under Betting Predictions
//!
//! Entry point. Loads configuration, initialises structured logging,
//! wires the fixture statistics provider into the prediction engine, and
//! serves the web front end with graceful shutdown.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use matchcast::config::AppConfig;
use matchcast::data::{FixtureProvider, StatsProvider};
use matchcast::model::PredictionEngine;
use matchcast::server;
use matchcast::server::routes::ServerState;
use matchcast::types::MatchInput;

const BANNER: &str = r#"
 __  __    _  _____ ____ _   _  ____    _    ____ _____
|  \/  |  / \|_   _/ ___| | | |/ ___|  / \  / ___|_   _|
| |\/| | / _ \ | || |   | |_| | |     / _ \ \___ \ | |
| |  | |/ ___ \| || |___|  _  | |___ / ___ \ ___) || |
|_|  |_/_/   \_\_| \____|_| |_|\____/_/   \_\____/ |_|

  Football Over/Under Betting Predictions
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    // Load configuration from TOML, falling back to built-in fixtures
    let cfg = AppConfig::load_or_default("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(
        port = cfg.server.port,
        default_team_a = %cfg.defaults.team_a,
        default_team_b = %cfg.defaults.team_b,
        "MATCHCAST starting up"
    );

    // Fail fast on a config file carrying out-of-domain statistics.
    let provider = FixtureProvider::new(cfg.statistics.clone());
    let probe = MatchInput::new(cfg.defaults.team_a.clone(), cfg.defaults.team_b.clone());
    provider
        .stats_for(&probe)
        .check_domain()
        .context("config.toml statistics outside the supported domain")?;

    let engine = PredictionEngine::new(Box::new(provider));

    let state = Arc::new(ServerState {
        engine,
        defaults: cfg.defaults.clone(),
    });
    let app = server::build_router(state);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], cfg.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind port {}", cfg.server.port))?;
    info!("Listening on http://localhost:{}", cfg.server.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received.");
        })
        .await
        .context("Server error")?;

    info!("MATCHCAST shut down cleanly.");
    Ok(())
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("matchcast=info"));

    let json_logging = std::env::var("MATCHCAST_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
