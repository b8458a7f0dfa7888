// SPDX-License-Identifier: PMPL-1.0-or-later
//! DOM-rule engine adapter (axe-core CLI).
//!
//! Drives the `axe` command-line runner against the resolved address and
//! parses its JSON output. The CLI emits one result object per audited
//! page as a JSON array; a single-URL run yields exactly one element.

use crate::config::{AuditConfig, Browser, DEFAULT_TIMEOUT_MS};
use crate::engines::AxeReport;
use crate::error::{AuditError, Result};
use crate::report::Engine;
use crate::resolver;
use tokio::process::Command;
use tracing::{info, warn};

/// Invokes the axe-core CLI
#[derive(Debug, Clone)]
pub struct AxeAdapter {
    /// Binary name or path; "axe" on PATH by default
    program: String,
}

impl Default for AxeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AxeAdapter {
    pub fn new() -> Self {
        Self { program: "axe".to_string() }
    }

    /// With an explicit binary path, for tests or packaged installs
    pub fn with_program(program: impl Into<String>) -> Self {
        Self { program: program.into() }
    }

    /// Run an audit and return the engine's native report
    pub async fn audit(&self, url_or_path: &str, config: &AuditConfig) -> Result<AxeReport> {
        let target = resolver::resolve(url_or_path).await?;
        let timeout_ms = config.timeout_or(DEFAULT_TIMEOUT_MS);

        if matches!(config.browser, Some(Browser::Firefox) | Some(Browser::Webkit)) {
            warn!("axe CLI drives Chrome; ignoring requested browser");
        }

        let mut command = Command::new(&self.program);
        command.arg(&target.url).arg("--stdout");
        // CLI takes seconds, rounded up
        command.arg("--timeout").arg(timeout_ms.div_ceil(1000).to_string());

        if let Some(tags) = &config.tags {
            if !tags.is_empty() {
                command.arg("--tags").arg(tags.join(","));
            }
        }
        if let Some(rules) = &config.rules {
            let enabled: Vec<&str> = rules
                .iter()
                .filter(|(_, toggle)| toggle.enabled)
                .map(|(id, _)| id.as_str())
                .collect();
            let disabled: Vec<&str> = rules
                .iter()
                .filter(|(_, toggle)| !toggle.enabled)
                .map(|(id, _)| id.as_str())
                .collect();
            if !enabled.is_empty() {
                command.arg("--rules").arg(enabled.join(","));
            }
            if !disabled.is_empty() {
                command.arg("--disable").arg(disabled.join(","));
            }
        }

        // target must outlive the engine run: it may be backing an
        // ephemeral server for a local file
        let stdout = super::run_engine_command(command, Engine::Axe, timeout_ms).await?;
        let mut report = parse_output(&stdout)?;
        report.url = target.url.clone();
        info!(
            "axe audit of {} finished: {} violation group(s)",
            target.url,
            report.violations.len()
        );
        Ok(report)
    }
}

fn parse_output(stdout: &[u8]) -> Result<AxeReport> {
    // Either a bare result object or a one-element array of them
    let value: serde_json::Value = serde_json::from_slice(stdout)?;
    let object = match value {
        serde_json::Value::Array(mut pages) if !pages.is_empty() => pages.remove(0),
        object @ serde_json::Value::Object(_) => object,
        _ => {
            return Err(AuditError::engine(
                Engine::Axe,
                "Engine output is not a result object",
            ))
        }
    };
    Ok(serde_json::from_value(object)?)
}
