// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit Orchestrator - one adapter per engine, constructed once,
//! reused across calls.
//!
//! The executor validates the URL argument, forwards the recognized
//! configuration subset to the right adapter, and pipes the adapter's
//! native report untouched into the normalizer. It never inspects the
//! report itself. Each call resolves its own target and spawns its own
//! engine invocation, so one executor may serve concurrent callers.

use crate::adapters::{AxeAdapter, LighthouseAdapter, WaveAdapter};
use crate::config::AuditConfig;
use crate::error::{AuditError, Result};
use crate::normalise::Normaliser;
use crate::report::{AuditReport, Engine};

/// Owns the three engine adapters and the normalizer
#[derive(Debug, Default)]
pub struct AuditExecutor {
    axe: AxeAdapter,
    lighthouse: LighthouseAdapter,
    wave: WaveAdapter,
    normaliser: Normaliser,
}

impl AuditExecutor {
    pub fn new() -> Self {
        Self {
            axe: AxeAdapter::new(),
            lighthouse: LighthouseAdapter::new(),
            wave: WaveAdapter::new(),
            normaliser: Normaliser::new(),
        }
    }

    /// Dispatch to the adapter for the given engine
    pub async fn run(&self, engine: Engine, url: &str, config: &AuditConfig) -> Result<AuditReport> {
        match engine {
            Engine::Axe => self.run_axe(url, config).await,
            Engine::Lighthouse => self.run_lighthouse(url, config).await,
            Engine::Wave => self.run_wave(url, config).await,
        }
    }

    /// Run the DOM-rule engine and normalize its report
    pub async fn run_axe(&self, url: &str, config: &AuditConfig) -> Result<AuditReport> {
        validate_url(url)?;
        let report = self.axe.audit(url, config).await?;
        Ok(self.normaliser.normalise_axe(&report))
    }

    /// Run the page-quality engine and normalize its report
    pub async fn run_lighthouse(&self, url: &str, config: &AuditConfig) -> Result<AuditReport> {
        validate_url(url)?;
        let report = self.lighthouse.audit(url, config).await?;
        Ok(self.normaliser.normalise_lighthouse(&report))
    }

    /// Run the remote scanner and normalize its report
    pub async fn run_wave(&self, url: &str, config: &AuditConfig) -> Result<AuditReport> {
        validate_url(url)?;
        let report = self.wave.audit(url, config).await?;
        Ok(self.normaliser.normalise_wave(&report))
    }
}

fn validate_url(url: &str) -> Result<()> {
    if url.trim().is_empty() {
        return Err(AuditError::InvalidInput("URL is required".to_string()));
    }
    Ok(())
}
