// SPDX-License-Identifier: PMPL-1.0-or-later
//! Remote-scan adapter (WAVE API).
//!
//! # Security considerations
//!
//! The API key is read from configuration or the `WAVE_API_KEY`
//! environment variable and sent only as a request parameter. It is
//! never logged or included in error messages.

use crate::config::AuditConfig;
use crate::engines::WaveReport;
use crate::error::{AuditError, Result};
use crate::report::Engine;
use crate::resolver;
use chrono::Utc;
use reqwest::Client;
use tracing::info;
use url::Url;

const DEFAULT_API_URL: &str = "https://wave.webaim.org/api/request";

/// HTTP client for the WAVE scanning API
#[derive(Debug, Clone)]
pub struct WaveAdapter {
    client: Client,
    api_url: String,
}

impl Default for WaveAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveAdapter {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            api_url: std::env::var("WAVE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        }
    }

    /// With an explicit API endpoint, for tests
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self { client: Client::new(), api_url: api_url.into() }
    }

    /// Run a remote scan and return the engine's native report
    pub async fn audit(&self, url_or_path: &str, config: &AuditConfig) -> Result<WaveReport> {
        let target = resolver::resolve(url_or_path).await?;

        // The remote scanner can only fetch over HTTP; local files are
        // reachable through the resolver's ephemeral server, but file://
        // URLs are not.
        if !target.url.starts_with("http://") && !target.url.starts_with("https://") {
            return Err(AuditError::InvalidInput(
                "WAVE only supports HTTP/HTTPS URLs; local files must be served".to_string(),
            ));
        }

        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("WAVE_API_KEY").ok())
            .ok_or_else(|| {
                AuditError::InvalidInput(
                    "WAVE API key is required; set WAVE_API_KEY or pass apiKey".to_string(),
                )
            })?;

        let mut request_url = Url::parse(&self.api_url)?;
        request_url
            .query_pairs_mut()
            .append_pair("key", &api_key)
            .append_pair("url", &target.url)
            .append_pair("format", "json");

        let response = self
            .client
            .get(request_url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AuditError::engine(
                Engine::Wave,
                format!("API request failed: {}", response.status()),
            ));
        }

        let mut report: WaveReport = response.json().await?;
        report.url = target.url.clone();
        report.timestamp = Utc::now().to_rfc3339();
        info!(
            "wave scan of {} finished: {} error item(s), {} alert item(s)",
            target.url,
            report.categories.error.len(),
            report.categories.alert.len()
        );
        Ok(report)
    }
}
