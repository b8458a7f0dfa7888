// SPDX-License-Identifier: PMPL-1.0-or-later
//! axe-core native report shape.
//!
//! Findings are grouped into violation/pass/incomplete/inapplicable rule
//! groups, each group matching zero or more DOM nodes. Impact is the
//! engine's own severity vocabulary and may be null.

use crate::report::Severity;
use crate::selectors::Target;
use serde::{Deserialize, Serialize};

/// A full axe-core analysis result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxeReport {
    #[serde(default)]
    pub violations: Vec<AxeRule>,
    #[serde(default)]
    pub passes: Vec<AxeRule>,
    #[serde(default)]
    pub incomplete: Vec<AxeRule>,
    /// Rules that did not apply to this page; carry no findings
    #[serde(default)]
    pub inapplicable: Vec<AxeRule>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: String,
}

/// One rule group with its matched nodes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxeRule {
    #[serde(default)]
    pub id: String,
    /// Native impact level; null for most passes
    #[serde(default)]
    pub impact: Option<Severity>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub help: String,
    #[serde(default, rename = "helpUrl")]
    pub help_url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<AxeNode>,
}

/// One matched DOM node
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxeNode {
    #[serde(default)]
    pub html: String,
    /// Selector path; a list represents a frame-nesting chain
    #[serde(default)]
    pub target: Target,
}
