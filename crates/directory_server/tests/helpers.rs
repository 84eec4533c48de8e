// path: crates/directory_server/tests/helpers.rs
use axum::Router;
use directory_server::config::ServerConfig;
use directory_server::http_api::{router, AppState};
use std::path::Path;

pub fn make_router_for(data_path: &Path) -> Router {
    let cfg = ServerConfig {
        data_path: data_path.to_string_lossy().into_owned(),
        ..ServerConfig::default()
    };
    router(AppState { cfg })
}
