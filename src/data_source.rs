use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Request;

use crate::http_client::http_client;

/// Where raw stat files come from. Paths are the relative `data/...` keys
/// built by `Selection`.
pub trait DataSource: Sync {
    fn fetch_text(&self, path: &str) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl DataSource for LocalSource {
    fn fetch_text(&self, path: &str) -> Result<String> {
        let full = self.root.join(path);
        let bytes = fs::read(&full).with_context(|| format!("read {}", full.display()))?;
        // Club exports are not always UTF-8 (cp1252 names); decode lossily.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn build_request(&self, path: &str) -> Result<Request> {
        let url = self.url_for(path);
        http_client()?
            .get(&url)
            .timeout(self.timeout)
            .build()
            .with_context(|| format!("build request: {url}"))
    }
}

impl DataSource for HttpSource {
    fn fetch_text(&self, path: &str) -> Result<String> {
        let request = self.build_request(path)?;
        let url = request.url().to_string();
        let resp = http_client()?
            .execute(request)
            .with_context(|| format!("request failed: {url}"))?;
        let status = resp.status();
        let body = resp.text().context("failed reading body")?;
        if !status.is_success() {
            return Err(anyhow!("http {} for {}", status, url));
        }
        Ok(body)
    }
}
