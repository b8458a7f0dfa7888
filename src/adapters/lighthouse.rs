// SPDX-License-Identifier: PMPL-1.0-or-later
//! Page-quality engine adapter (Lighthouse CLI).

use crate::config::{AuditConfig, DEFAULT_LIGHTHOUSE_TIMEOUT_MS};
use crate::engines::LighthouseReport;
use crate::error::Result;
use crate::report::Engine;
use crate::resolver;
use tokio::process::Command;
use tracing::info;

const CHROME_FLAGS: &str = "--headless --no-sandbox";

/// Invokes the Lighthouse CLI with JSON output
#[derive(Debug, Clone)]
pub struct LighthouseAdapter {
    program: String,
}

impl Default for LighthouseAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl LighthouseAdapter {
    pub fn new() -> Self {
        Self { program: "lighthouse".to_string() }
    }

    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Run an audit and return the engine's native report (the LHR)
    pub async fn audit(&self, url_or_path: &str, config: &AuditConfig) -> Result<LighthouseReport> {
        let target = resolver::resolve(url_or_path).await?;
        let timeout_ms = config.timeout_or(DEFAULT_LIGHTHOUSE_TIMEOUT_MS);

        let mut command = Command::new(&self.program);
        command
            .arg(&target.url)
            .arg("--output=json")
            .arg("--output-path=stdout")
            .arg("--quiet")
            .arg(format!("--chrome-flags={}", CHROME_FLAGS))
            .arg(format!("--max-wait-for-load={}", timeout_ms));

        if let Some(categories) = config.effective_categories() {
            if !categories.is_empty() {
                command.arg(format!("--only-categories={}", categories.join(",")));
            }
        }
        if let Some(skip) = &config.skip_audits {
            if !skip.is_empty() {
                command.arg(format!("--skip-audits={}", skip.join(",")));
            }
        }

        let stdout = super::run_engine_command(command, Engine::Lighthouse, timeout_ms).await?;
        let mut report: LighthouseReport = serde_json::from_slice(&stdout)?;
        if report.url.is_empty() {
            report.url = target.url.clone();
        }
        info!(
            "lighthouse audit of {} finished: {} audit(s), {} categorie(s)",
            target.url,
            report.audits.len(),
            report.categories.len()
        );
        Ok(report)
    }
}
