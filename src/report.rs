// SPDX-License-Identifier: PMPL-1.0-or-later
//! Normalized audit result schema.
//!
//! Every engine-specific report is reduced to this single shape: a flat
//! list of [`NormalisedResult`]s keyed by WCAG references, wrapped in an
//! [`AuditReport`] carrying derived summary statistics. The summary is
//! always recomputed from the result list, never stored independently.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a normalized finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Blocks core functionality for affected users
    Critical,
    /// Serious barrier, must be addressed
    Serious,
    /// Noticeable barrier
    Moderate,
    /// Minor inconvenience
    Minor,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Critical => write!(f, "critical"),
            Severity::Serious => write!(f, "serious"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Minor => write!(f, "minor"),
        }
    }
}

/// How certain the normalization is in the assigned outcome and severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Coarse classification of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Conclusively passing
    Pass,
    /// Conclusively failing
    Fail,
    /// Indeterminate - see `reason_code`
    Unknown,
}

/// The three wrapped audit engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    /// DOM-rule engine (axe-core)
    Axe,
    /// Page-quality engine (Lighthouse)
    Lighthouse,
    /// Remote scanning API (WAVE)
    Wave,
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Engine::Axe => write!(f, "axe"),
            Engine::Lighthouse => write!(f, "lighthouse"),
            Engine::Wave => write!(f, "wave"),
        }
    }
}

impl std::str::FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "axe" => Ok(Engine::Axe),
            "lighthouse" => Ok(Engine::Lighthouse),
            "wave" => Ok(Engine::Wave),
            other => Err(format!("Unknown engine: {}", other)),
        }
    }
}

/// One normalized finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalisedResult {
    /// Rule/check identifier in the source engine's namespace
    pub rule_id: String,
    /// WCAG success-criterion references, never empty (mapping fallback)
    pub wcag_ref: Vec<String>,
    pub severity: Severity,
    pub confidence: Confidence,
    pub outcome: Outcome,
    /// CSS selector path, empty when the engine provided none
    pub selector: String,
    /// Truncated HTML snippet, empty when the engine provided none
    pub dom_context: String,
    /// Human-readable explanation from the engine
    pub message: String,
    /// Present only when the outcome is ambiguous or heuristic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,
}

/// Per-severity result counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub serious: usize,
    pub moderate: usize,
    pub minor: usize,
}

/// Aggregate counts over a result list, always derived
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub unknown: usize,
    pub by_severity: SeverityCounts,
}

impl Summary {
    /// Recompute all counts from a result list
    pub fn from_results(results: &[NormalisedResult]) -> Self {
        let count_outcome =
            |o: Outcome| results.iter().filter(|r| r.outcome == o).count();
        let count_severity =
            |s: Severity| results.iter().filter(|r| r.severity == s).count();

        Self {
            total: results.len(),
            pass: count_outcome(Outcome::Pass),
            fail: count_outcome(Outcome::Fail),
            unknown: count_outcome(Outcome::Unknown),
            by_severity: SeverityCounts {
                critical: count_severity(Severity::Critical),
                serious: count_severity(Severity::Serious),
                moderate: count_severity(Severity::Moderate),
                minor: count_severity(Severity::Minor),
            },
        }
    }
}

/// One normalized audit for a (url, engine) pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub url: String,
    pub tool: Engine,
    /// ISO-8601, generated at normalization time
    pub timestamp: DateTime<Utc>,
    /// Discovery order, not sorted
    pub results: Vec<NormalisedResult>,
    pub summary: Summary,
}

impl AuditReport {
    /// Build a report with a freshly derived summary
    pub fn new(url: impl Into<String>, tool: Engine, results: Vec<NormalisedResult>) -> Self {
        let summary = Summary::from_results(&results);
        Self {
            url: url.into(),
            tool,
            timestamp: Utc::now(),
            results,
            summary,
        }
    }

    /// Whether any result failed conclusively
    pub fn has_failures(&self) -> bool {
        self.summary.fail > 0
    }
}
