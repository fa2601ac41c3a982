use crate::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use anyhow::{bail, Context, Result};
use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("data_path", &self.data_path)
            .field("static_dir", &self.static_dir)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let api_key = get("GEMINI_API_KEY").unwrap_or_default();
        if api_key.trim().is_empty() {
            bail!("GEMINI_API_KEY is not set");
        }

        let port = match get("PORT") {
            Some(s) => s.parse().with_context(|| format!("invalid PORT: {s}"))?,
            None => 8080,
        };
        let timeout_secs: u64 = match get("SUMMARIZE_TIMEOUT_SECS") {
            Some(s) => s
                .parse()
                .with_context(|| format!("invalid SUMMARIZE_TIMEOUT_SECS: {s}"))?,
            None => 120,
        };

        Ok(Self {
            api_key,
            model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: get("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
            data_path: get("NEWS_DATA_PATH").unwrap_or_else(|| "sample.json".into()).into(),
            static_dir: get("STATIC_DIR").unwrap_or_else(|| "static".into()).into(),
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .context("invalid HOST/PORT")
    }
}
