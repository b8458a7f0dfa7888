// SPDX-License-Identifier: PMPL-1.0-or-later
//! Audit configuration.
//!
//! Every recognized option is enumerated explicitly with a documented
//! default; the orchestrator forwards only the subset each engine
//! understands. Tool-call payloads use camelCase keys, accepted here via
//! serde aliases.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Default per-audit timeout for browser-driven engines
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Lighthouse runs a full page load pipeline and gets a longer default
pub const DEFAULT_LIGHTHOUSE_TIMEOUT_MS: u64 = 60_000;

/// Browser used by the DOM-rule engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

/// Per-rule enable/disable toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleToggle {
    pub enabled: bool,
}

/// Recognized audit options, all optional, each defaulting per engine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    /// Timeout in milliseconds; engine-specific default when unset
    #[serde(alias = "timeout", skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    /// Browser for the DOM-rule engine (default chromium)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub browser: Option<Browser>,
    /// WCAG tag filter for the DOM-rule engine (e.g. "wcag2a", "wcag2aa")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Per-rule toggles for the DOM-rule engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<HashMap<String, RuleToggle>>,
    /// Category filter for the page-quality engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    /// Strict category filter; wins over `categories` when both are set
    #[serde(alias = "onlyCategories", skip_serializing_if = "Option::is_none")]
    pub only_categories: Option<Vec<String>>,
    /// Audits to skip in the page-quality engine
    #[serde(alias = "skipAudits", skip_serializing_if = "Option::is_none")]
    pub skip_audits: Option<Vec<String>>,
    /// Remote-scan API key; falls back to the WAVE_API_KEY environment
    /// variable when unset
    #[serde(alias = "apiKey", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl AuditConfig {
    /// Effective timeout given an engine-specific default
    pub fn timeout_or(&self, default_ms: u64) -> u64 {
        self.timeout_ms.unwrap_or(default_ms)
    }

    /// Category filter the page-quality engine should honor
    pub fn effective_categories(&self) -> Option<&[String]> {
        self.only_categories
            .as_deref()
            .or(self.categories.as_deref())
    }
}
