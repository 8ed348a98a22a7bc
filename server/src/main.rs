//! AgroChain Server
//!
//! Serves the role dashboards and the customer journey tracker with an
//! Axum backend and Askama/HTMX pages.

use clap::Parser;
use tracing::{info, instrument};

mod config;
mod diagnostics;
mod routes;
mod state;
mod templates;

use config::Config;
use state::AppState;

/// AgroChain Server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Server address to bind to (overrides configuration)
    #[arg(short, long)]
    addr: Option<String>,

    /// Path to configuration file
    #[arg(short, long, env = "AGROCHAIN_CONFIG")]
    config: Option<String>,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,server=debug,agrochain_core=debug".into());

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
#[instrument]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Parse CLI args
    let args = Args::parse();

    // Load configuration
    let mut config = Config::load(args.config.as_deref())?;
    if let Some(addr) = args.addr {
        config.bind_addr = addr;
    }
    info!(
        addr = %config.bind_addr,
        static_dir = %config.static_dir,
        "Starting AgroChain server"
    );

    let addr = config.bind_addr.clone();
    let state = AppState::new(config);

    // Build Axum router
    let app = routes::app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Server listening");

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
