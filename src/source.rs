use async_trait::async_trait;
use directory_core::LoadError;
use serde_json::Value;
use std::path::PathBuf;

/// Where the static dataset comes from. Fetched once at startup.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self) -> Result<Value, LoadError>;
    fn describe(&self) -> String;
}

#[derive(Debug, Clone)]
pub struct FileSource {
    pub path: PathBuf,
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        let data = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Fetch(format!("{}: {e}", self.path.display())))?;
        parse_body(&data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// `GET <url>` against the dataset host (`/static/companies.json`).
#[derive(Debug, Clone)]
pub struct HttpSource {
    pub url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Fetch(format!("HTTP {status}")));
        }
        // обрыв при чтении тела — это Fetch, а не Parse
        let body = resp
            .bytes()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;
        parse_body(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

fn parse_body(body: &[u8]) -> Result<Value, LoadError> {
    serde_json::from_slice(body).map_err(|e| LoadError::Parse(e.to_string()))
}

/// Уже разобранный JSON (тесты, REPL-перезагрузка).
#[derive(Debug, Clone)]
pub struct StaticSource(pub Value);

#[async_trait]
impl DatasetSource for StaticSource {
    async fn fetch(&self) -> Result<Value, LoadError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "<inline>".into()
    }
}
