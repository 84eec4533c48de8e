pub mod config;
pub mod http_api;

use directory_core::{normalize_with_report, NormalizeReport};

/// Reads and normalizes the dataset once at startup so problems show up in
/// the log before the first client asks for it.
pub async fn preflight(cfg: &config::ServerConfig) -> anyhow::Result<NormalizeReport> {
    let data = tokio::fs::read(&cfg.data_path).await?;
    let raw: serde_json::Value = serde_json::from_slice(&data)?;
    let report = normalize_with_report(&raw)?;
    Ok(report)
}
