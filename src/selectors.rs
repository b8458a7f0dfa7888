// SPDX-License-Identifier: PMPL-1.0-or-later
//! Selector and DOM-context extraction helpers.

use serde::{Deserialize, Serialize};

/// Separator between frames in a nested selector chain
const FRAME_SEPARATOR: &str = " > ";

/// Truncation marker appended to over-length DOM context
const ELLIPSIS: &str = "...";

/// Default bound on DOM context length, in characters
pub const DEFAULT_CONTEXT_LENGTH: usize = 200;

/// A node target: a single selector or a frame-nesting chain of selectors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    One(String),
    Chain(Vec<String>),
}

impl Default for Target {
    fn default() -> Self {
        Target::One(String::new())
    }
}

/// Flatten a target into a single human-readable selector string
pub fn normalise_selector(target: &Target) -> String {
    match target {
        Target::One(selector) => selector.clone(),
        Target::Chain(selectors) => selectors.join(FRAME_SEPARATOR),
    }
}

/// Trim an HTML snippet and bound it to `max_length` characters,
/// appending a truncation marker when cut
pub fn extract_dom_context(html: &str, max_length: usize) -> String {
    let trimmed = html.trim();
    if trimmed.chars().count() <= max_length {
        return trimmed.to_string();
    }
    let mut out: String = trimmed.chars().take(max_length).collect();
    out.push_str(ELLIPSIS);
    out
}
