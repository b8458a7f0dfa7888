// SPDX-License-Identifier: PMPL-1.0-or-later
//! Lighthouse native report shape (the LHR).
//!
//! Named audits keyed by id, grouped under named categories that list
//! their member audits by reference with a weight. Scores are 0.0-1.0
//! or null.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Category id whose member audits carry accessibility signal
pub const ACCESSIBILITY_CATEGORY: &str = "accessibility";

/// A full Lighthouse run result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LighthouseReport {
    #[serde(default, alias = "finalUrl")]
    pub url: String,
    #[serde(default, rename = "fetchTime")]
    pub fetch_time: String,
    #[serde(default)]
    pub audits: HashMap<String, LighthouseAudit>,
    #[serde(default)]
    pub categories: HashMap<String, LighthouseCategory>,
}

impl LighthouseReport {
    /// The accessibility category, when the run included it
    pub fn accessibility_category(&self) -> Option<&LighthouseCategory> {
        self.categories.get(ACCESSIBILITY_CATEGORY)
    }
}

/// One named audit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LighthouseAudit {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 0.0-1.0 or null when the audit could not be scored
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, rename = "scoreDisplayMode")]
    pub score_display_mode: String,
    #[serde(default, rename = "displayValue", skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<LighthouseAuditDetails>,
}

impl LighthouseAudit {
    /// Whether this audit carries no accessibility signal
    pub fn is_skippable(&self) -> bool {
        self.score_display_mode == "notApplicable" || self.score_display_mode == "error"
    }
}

/// Itemized detail attached to an audit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LighthouseAuditDetails {
    #[serde(default, rename = "type")]
    pub detail_type: String,
    /// Offending DOM nodes, when the audit itemizes them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nodes: Option<Vec<LighthouseNode>>,
}

/// One offending DOM node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LighthouseNode {
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub snippet: String,
}

/// One named category and its member audits
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LighthouseCategory {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default, rename = "auditRefs")]
    pub audit_refs: Vec<AuditRef>,
}

/// Reference from a category to a member audit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuditRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub weight: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}
