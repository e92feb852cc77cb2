//! metrica server
//!
//! - Config: `$METRICA_CONFIG` or `metrica.yaml` (defaults when absent)
//! - Logging: `RUST_LOG` wins over `server.log_level`
//! - Routes: `POST /update/:kind/:name/:value`
//! - Graceful shutdown on SIGINT/SIGTERM/SIGQUIT

use tokio::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

use metrica_core::error::Result;
use metrica_server::{app_state, config, router, server};

const DEFAULT_CONFIG_PATH: &str = "metrica.yaml";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("metrica-server: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = std::env::var("METRICA_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let cfg = config::load_or_default(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.server.log_level));
    fmt().with_env_filter(filter).init();

    let state = app_state::AppState::new(cfg);
    let listen = state.cfg().server.listen.clone();
    let grace = Duration::from_millis(state.cfg().server.shutdown_timeout_ms);
    let app = router::build_router(state);

    let listener = server::bind(&listen).await?;
    tracing::info!(%listen, config = %path, "metrica-server starting");

    server::serve(listener, app, server::shutdown_signal(), grace).await?;
    tracing::info!("metrica-server stopped");
    Ok(())
}
