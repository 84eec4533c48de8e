use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub cfg: ServerConfig,
}

pub fn router(state: AppState) -> Router {
    Router::<AppState>::new()
        .route("/api/companies", get(companies))
        .route("/static/companies.json", get(companies))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// The dataset as stored on disk. No filtering happens here.
pub async fn companies(
    State(st): State<AppState>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let data = tokio::fs::read(&st.cfg.data_path).await.map_err(|e| {
        tracing::error!(path = %st.cfg.data_path, error = %e, "cannot read dataset");
        internal(e)
    })?;
    let v: Value = serde_json::from_slice(&data).map_err(|e| {
        tracing::error!(path = %st.cfg.data_path, error = %e, "dataset is not valid JSON");
        internal(e)
    })?;
    Ok(Json(v))
}

pub async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

fn internal<E: ToString>(e: E) -> (StatusCode, String) {
    (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
}
