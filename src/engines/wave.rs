// SPDX-License-Identifier: PMPL-1.0-or-later
//! WAVE API native report shape.
//!
//! A category breakdown of errors, contrast issues, advisory alerts,
//! features, structural notes, and ARIA notes. Items carry a code, count,
//! and description but no DOM node targeting. Contrast items additionally
//! carry a ratio sub-record, which normalization does not consume.

use serde::{Deserialize, Serialize};

/// A full WAVE scan result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveReport {
    #[serde(default)]
    pub statsummary: WaveStatSummary,
    #[serde(default)]
    pub categories: WaveCategories,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub timestamp: String,
}

/// Per-category item counts as reported by the API
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WaveStatSummary {
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub error: u32,
    #[serde(default)]
    pub contrast: u32,
    #[serde(default)]
    pub alert: u32,
    #[serde(default)]
    pub feature: u32,
    #[serde(default)]
    pub structure: u32,
    #[serde(default)]
    pub aria: u32,
}

/// Item lists per category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveCategories {
    #[serde(default)]
    pub error: Vec<WaveItem>,
    #[serde(default)]
    pub contrast: Vec<WaveItem>,
    #[serde(default)]
    pub alert: Vec<WaveItem>,
    #[serde(default)]
    pub feature: Vec<WaveItem>,
    #[serde(default)]
    pub structure: Vec<WaveItem>,
    #[serde(default)]
    pub aria: Vec<WaveItem>,
}

/// One categorized item
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveItem {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub description: String,
    /// Present on contrast items only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contrast: Option<WaveContrastDetail>,
}

/// Contrast ratio detail on contrast items
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveContrastDetail {
    #[serde(default)]
    pub ratio: String,
    #[serde(default)]
    pub large: bool,
    #[serde(default)]
    pub expected: String,
}
