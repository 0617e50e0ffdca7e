use crate::config::Settings;
use crate::landing::types::{LandingContent, Product};
use crate::landing::LandingSource;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 10;
const LANDING_PATH: &str = "/api/v1/landing";
const PRODUCTS_PATH: &str = "/api/v1/products/";

/// Marketing API client. One attempt per call; callers decide what a failure
/// means (the landing page falls back to static text).
#[derive(Debug, Clone)]
pub struct HttpLandingClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpLandingClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let base_url = settings.require_landing_api_base_url()?.to_string();

        let timeout_secs = std::env::var("LANDING_API_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::new(base_url, Duration::from_secs(timeout_secs))
    }

    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build landing api http client")?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };

        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// GETs `path` and decodes the body. `Ok(None)` on 404.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let url = self.url(path);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("landing api request failed: {url}"))?;

        let status = res.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let text = res
            .text()
            .await
            .context("failed to read landing api response")?;
        if !status.is_success() {
            anyhow::bail!("landing api HTTP {status}: {text}");
        }

        let parsed = serde_json::from_str::<T>(&text)
            .with_context(|| format!("landing api response has unexpected shape: {text}"))?;
        Ok(Some(parsed))
    }
}

#[async_trait::async_trait]
impl LandingSource for HttpLandingClient {
    fn source_name(&self) -> &'static str {
        "landing_http"
    }

    async fn fetch_landing(&self) -> Result<LandingContent> {
        self.get_json(LANDING_PATH)
            .await?
            .context("landing api returned 404 for landing content")
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        Ok(self.get_json(PRODUCTS_PATH).await?.unwrap_or_default())
    }

    async fn fetch_product(&self, id: u64) -> Result<Option<Product>> {
        self.get_json(&format!("{PRODUCTS_PATH}{id}")).await
    }
}
