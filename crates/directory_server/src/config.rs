// path: crates/directory_server/src/config.rs
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_addr")]
    pub addr: String,
    /// Путь к companies.json (файл перечитывается на каждый запрос)
    #[serde(default = "default_data_path")]
    pub data_path: String,
}

fn default_addr() -> String {
    "0.0.0.0:5000".into()
}
fn default_data_path() -> String {
    "static/companies.json".into()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: default_addr(),
            data_path: default_data_path(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let addr = std::env::var("CM_ADDR").unwrap_or_else(|_| default_addr());
        let data_path = std::env::var("CM_DATA").unwrap_or_else(|_| default_data_path());
        Self { addr, data_path }
    }
}
