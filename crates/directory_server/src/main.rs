// Файл: crates/directory_server/src/main.rs
use std::net::SocketAddr;

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use directory_server::config::ServerConfig;
use directory_server::http_api::{router, AppState};
use directory_server::preflight;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = ServerConfig::from_env();
    match preflight(&cfg).await {
        Ok(report) => tracing::info!(
            path = %cfg.data_path,
            companies = report.companies.len(),
            dropped = report.dropped.len(),
            "dataset checked"
        ),
        // не фатально: файл может появиться позже
        Err(err) => tracing::warn!(path = %cfg.data_path, error = %err, "dataset check failed"),
    }

    let addr: SocketAddr = cfg.addr.parse()?;
    let app = router(AppState { cfg });

    tracing::info!(address = %addr, "directory server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
