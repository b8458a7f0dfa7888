// SPDX-License-Identifier: PMPL-1.0-or-later
//! Guideline Mapper - rule identifier to WCAG reference lookup.
//!
//! Three disjoint static tables, one per engine. The same rule identifier
//! may map differently depending on which engine reported it, so lookups
//! are always engine-scoped. Unknown rules fall back to [`default_mapping`],
//! which guarantees the never-empty `wcag_ref` invariant.

use crate::report::{Confidence, Engine, Severity};

/// A rule's WCAG references and baseline severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    pub wcag_refs: &'static [&'static str],
    pub severity: Severity,
}

const fn m(wcag_refs: &'static [&'static str], severity: Severity) -> Mapping {
    Mapping { wcag_refs, severity }
}

/// Look up a rule identifier in the given engine's table
pub fn lookup(rule_id: &str, engine: Engine) -> Option<Mapping> {
    match engine {
        Engine::Axe => lookup_axe(rule_id),
        Engine::Lighthouse => lookup_lighthouse(rule_id),
        Engine::Wave => lookup_wave(rule_id),
    }
}

/// Look up a rule, falling back to the generic mapping when absent
pub fn lookup_or_default(rule_id: &str, engine: Engine) -> Mapping {
    lookup(rule_id, engine).unwrap_or_else(default_mapping)
}

/// Generic fallback: one name/role/value reference, moderate severity
pub fn default_mapping() -> Mapping {
    m(&["WCAG2.1:4.1.2"], Severity::Moderate)
}

/// Map an engine's native impact onto the severity enum (absent -> moderate)
pub fn severity_from_impact(impact: Option<Severity>) -> Severity {
    impact.unwrap_or(Severity::Moderate)
}

/// Derive confidence from a DOM-rule engine impact level
pub fn confidence_from_impact(impact: Option<Severity>) -> Confidence {
    match impact {
        Some(Severity::Critical) | Some(Severity::Serious) => Confidence::High,
        Some(Severity::Moderate) => Confidence::Medium,
        _ => Confidence::Low,
    }
}

fn lookup_axe(rule_id: &str) -> Option<Mapping> {
    use Severity::{Critical, Moderate, Serious};
    let mapping = match rule_id {
        "aria-allowed-attr" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-hidden-focus" => m(&["WCAG2.1:2.1.1", "WCAG2.1:4.1.2"], Serious),
        "aria-required-attr" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-required-children" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-required-parent" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-roles" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-valid-attr-value" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-valid-attr" => m(&["WCAG2.1:4.1.2"], Serious),
        "button-name" => m(&["WCAG2.1:4.1.2"], Critical),
        "color-contrast" => m(&["WCAG2.1:1.4.3", "WCAG2.1:1.4.6"], Serious),
        "document-title" => m(&["WCAG2.1:2.4.2"], Moderate),
        "html-has-lang" => m(&["WCAG2.1:3.1.1"], Serious),
        "image-alt" => m(&["WCAG2.1:1.1.1"], Critical),
        "input-button-name" => m(&["WCAG2.1:4.1.2"], Critical),
        "label" => m(&["WCAG2.1:1.3.1", "WCAG2.1:3.3.2", "WCAG2.1:4.1.2"], Serious),
        "link-name" => m(&["WCAG2.1:2.4.4", "WCAG2.1:4.1.2"], Serious),
        "list" => m(&["WCAG2.1:1.3.1"], Moderate),
        "listitem" => m(&["WCAG2.1:1.3.1"], Moderate),
        "meta-refresh" => m(&["WCAG2.1:2.2.1", "WCAG2.1:2.2.4"], Serious),
        "object-alt" => m(&["WCAG2.1:1.1.1"], Serious),
        "role-img-alt" => m(&["WCAG2.1:1.1.1"], Serious),
        "tabindex" => m(&["WCAG2.1:2.1.1"], Serious),
        "table-fake-caption" => m(&["WCAG2.1:1.3.1"], Moderate),
        "td-headers-attr" => m(&["WCAG2.1:1.3.1"], Moderate),
        "th-has-data-cells" => m(&["WCAG2.1:1.3.1"], Moderate),
        "valid-lang" => m(&["WCAG2.1:3.1.2"], Moderate),
        "video-caption" => m(&["WCAG2.1:1.2.2"], Serious),
        _ => return None,
    };
    Some(mapping)
}

fn lookup_lighthouse(rule_id: &str) -> Option<Mapping> {
    use Severity::{Critical, Moderate, Serious};
    let mapping = match rule_id {
        "accessibility" => m(
            &[
                "WCAG2.1:1.1.1",
                "WCAG2.1:1.3.1",
                "WCAG2.1:1.4.3",
                "WCAG2.1:2.1.1",
                "WCAG2.1:2.4.2",
                "WCAG2.1:4.1.2",
            ],
            Serious,
        ),
        "aria-allowed-attr" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-hidden-body" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-hidden-focus" => m(&["WCAG2.1:2.1.1", "WCAG2.1:4.1.2"], Serious),
        "aria-input-field-name" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-required-attr" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-roles" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-valid-attr-value" => m(&["WCAG2.1:4.1.2"], Serious),
        "aria-valid-attr" => m(&["WCAG2.1:4.1.2"], Serious),
        "button-name" => m(&["WCAG2.1:4.1.2"], Critical),
        "color-contrast" => m(&["WCAG2.1:1.4.3", "WCAG2.1:1.4.6"], Serious),
        "document-title" => m(&["WCAG2.1:2.4.2"], Moderate),
        "html-has-lang" => m(&["WCAG2.1:3.1.1"], Serious),
        "html-lang-valid" => m(&["WCAG2.1:3.1.1"], Serious),
        "image-alt" => m(&["WCAG2.1:1.1.1"], Critical),
        "input-image-alt" => m(&["WCAG2.1:1.1.1"], Critical),
        "label" => m(&["WCAG2.1:1.3.1", "WCAG2.1:3.3.2", "WCAG2.1:4.1.2"], Serious),
        "link-name" => m(&["WCAG2.1:2.4.4", "WCAG2.1:4.1.2"], Serious),
        "list" => m(&["WCAG2.1:1.3.1"], Moderate),
        "listitem" => m(&["WCAG2.1:1.3.1"], Moderate),
        "meta-refresh" => m(&["WCAG2.1:2.2.1", "WCAG2.1:2.2.4"], Serious),
        "object-alt" => m(&["WCAG2.1:1.1.1"], Serious),
        "tabindex" => m(&["WCAG2.1:2.1.1"], Serious),
        "td-headers-attr" => m(&["WCAG2.1:1.3.1"], Moderate),
        "th-has-data-cells" => m(&["WCAG2.1:1.3.1"], Moderate),
        "valid-lang" => m(&["WCAG2.1:3.1.2"], Moderate),
        "video-caption" => m(&["WCAG2.1:1.2.2"], Serious),
        "video-description" => m(&["WCAG2.1:1.2.3"], Moderate),
        _ => return None,
    };
    Some(mapping)
}

fn lookup_wave(rule_id: &str) -> Option<Mapping> {
    use Severity::{Critical, Moderate, Serious};
    let mapping = match rule_id {
        "error_alt_missing" => m(&["WCAG2.1:1.1.1"], Critical),
        "error_alt_link" => m(&["WCAG2.1:1.1.1"], Serious),
        "error_alt_spacer" => m(&["WCAG2.1:1.1.1"], Moderate),
        "error_button_empty" => m(&["WCAG2.1:4.1.2"], Critical),
        "error_heading_empty" => m(&["WCAG2.1:1.3.1"], Serious),
        "error_label_empty" => m(&["WCAG2.1:1.3.1", "WCAG2.1:3.3.2"], Serious),
        "error_link_empty" => m(&["WCAG2.1:2.4.4", "WCAG2.1:4.1.2"], Serious),
        "error_missing_form_label" => m(&["WCAG2.1:1.3.1", "WCAG2.1:3.3.2"], Serious),
        "contrast" => m(&["WCAG2.1:1.4.3", "WCAG2.1:1.4.6"], Serious),
        _ => return None,
    };
    Some(mapping)
}
