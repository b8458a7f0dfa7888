// SPDX-License-Identifier: PMPL-1.0-or-later
//! Result Normalizer - reduces each engine's native report into the
//! common result schema.
//!
//! Three explicit paths, one per engine, because the outcome derivation
//! rules differ materially: axe classifies by group kind, Lighthouse by
//! score threshold, WAVE by category kind. All three share the summary
//! construction in [`AuditReport::new`].
//!
//! The normalizer is stateless and pure: no I/O, no retained input, safe
//! to call concurrently.

use crate::engines::{AxeReport, LighthouseReport, WaveReport};
use crate::engines::axe::AxeRule;
use crate::mapping;
use crate::report::{AuditReport, Confidence, Engine, NormalisedResult, Outcome, Severity};
use crate::selectors::{self, DEFAULT_CONTEXT_LENGTH};

/// Reason code for an axe check that could not be conclusively evaluated
pub const REASON_INCOMPLETE_CHECK: &str = "INCOMPLETE_CHECK";
/// Reason code for a Lighthouse score in the ambiguous range (or null)
pub const REASON_SCORE_AMBIGUOUS: &str = "SCORE_AMBIGUOUS";
/// Reason code for a WAVE advisory alert
pub const REASON_WAVE_ALERT: &str = "WAVE_ALERT";

/// Lighthouse's own pass bar: scores at or above this pass
const LIGHTHOUSE_PASS_THRESHOLD: f64 = 0.9;

/// Stateless normalizer for the three engine report shapes
#[derive(Debug, Clone, Copy, Default)]
pub struct Normaliser;

impl Normaliser {
    pub fn new() -> Self {
        Self
    }

    /// Normalize a DOM-rule engine (axe-core) report
    pub fn normalise_axe(&self, report: &AxeReport) -> AuditReport {
        let mut results = Vec::new();

        for violation in &report.violations {
            self.expand_axe_group(violation, Outcome::Fail, &mut results);
        }
        for pass in &report.passes {
            self.expand_axe_group(pass, Outcome::Pass, &mut results);
        }
        for incomplete in &report.incomplete {
            self.expand_axe_group(incomplete, Outcome::Unknown, &mut results);
        }
        // Inapplicable groups mean the rule did not apply to this page at
        // all; they are not findings and contribute nothing.

        AuditReport::new(&report.url, Engine::Axe, results)
    }

    /// Emit one result per matched node of an axe rule group.
    ///
    /// The guideline lookup happens once per group, in the engine's own
    /// rule namespace. Severity comes from the group's native impact, not
    /// the table. Incomplete groups force low confidence and carry
    /// `INCOMPLETE_CHECK` whenever the group has a help message.
    fn expand_axe_group(
        &self,
        group: &AxeRule,
        outcome: Outcome,
        results: &mut Vec<NormalisedResult>,
    ) {
        let mapping = mapping::lookup_or_default(&group.id, Engine::Axe);
        let severity = mapping::severity_from_impact(group.impact);
        let confidence = match outcome {
            Outcome::Unknown => Confidence::Low,
            _ => mapping::confidence_from_impact(group.impact),
        };
        let reason_code = match outcome {
            Outcome::Unknown if !group.help.is_empty() => {
                Some(REASON_INCOMPLETE_CHECK.to_string())
            }
            _ => None,
        };

        for node in &group.nodes {
            results.push(NormalisedResult {
                rule_id: group.id.clone(),
                wcag_ref: wcag_refs(&mapping),
                severity,
                confidence,
                outcome,
                selector: selectors::normalise_selector(&node.target),
                dom_context: selectors::extract_dom_context(&node.html, DEFAULT_CONTEXT_LENGTH),
                message: group.help.clone(),
                reason_code: reason_code.clone(),
            });
        }
    }

    /// Normalize a page-quality engine (Lighthouse) report.
    ///
    /// Only the accessibility category's member audits are processed; a
    /// run without that category yields an empty but valid report.
    pub fn normalise_lighthouse(&self, report: &LighthouseReport) -> AuditReport {
        let mut results = Vec::new();

        let Some(category) = report.accessibility_category() else {
            return AuditReport::new(&report.url, Engine::Lighthouse, results);
        };

        for audit_ref in &category.audit_refs {
            let Some(audit) = report.audits.get(&audit_ref.id) else {
                continue;
            };
            if audit.is_skippable() {
                continue;
            }

            let mapping = mapping::lookup_or_default(&audit.id, Engine::Lighthouse);
            let outcome = score_outcome(audit.score);
            let confidence = match outcome {
                Outcome::Unknown => Confidence::Medium,
                _ => Confidence::High,
            };

            let nodes = audit.details.as_ref().and_then(|d| d.nodes.as_ref());
            if let Some(nodes) = nodes {
                for node in nodes {
                    results.push(NormalisedResult {
                        rule_id: audit.id.clone(),
                        wcag_ref: wcag_refs(&mapping),
                        severity: mapping.severity,
                        confidence,
                        outcome,
                        selector: node.selector.clone(),
                        dom_context: node.snippet.clone(),
                        message: audit.description.clone(),
                        reason_code: (outcome == Outcome::Unknown)
                            .then(|| REASON_SCORE_AMBIGUOUS.to_string()),
                    });
                }
            } else {
                results.push(NormalisedResult {
                    rule_id: audit.id.clone(),
                    wcag_ref: wcag_refs(&mapping),
                    severity: mapping.severity,
                    confidence,
                    outcome,
                    selector: String::new(),
                    dom_context: String::new(),
                    message: audit.description.clone(),
                    reason_code: None,
                });
                // The single-result path builds the result before the
                // outcome-gated fields are known; the reason code is
                // attached after emission.
                if outcome == Outcome::Unknown {
                    if let Some(last) = results.last_mut() {
                        last.reason_code = Some(REASON_SCORE_AMBIGUOUS.to_string());
                    }
                }
            }
        }

        AuditReport::new(&report.url, Engine::Lighthouse, results)
    }

    /// Normalize a remote-scan (WAVE) report.
    ///
    /// Errors and contrast issues are conclusive failures; alerts are
    /// advisory and land in `unknown` with forced moderate severity.
    /// Feature, structure, and ARIA categories are informational only.
    /// WAVE provides no DOM node targeting, so selector and context are
    /// always empty.
    pub fn normalise_wave(&self, report: &WaveReport) -> AuditReport {
        let mut results = Vec::new();

        for error in &report.categories.error {
            let mapping = mapping::lookup_or_default(&error.code, Engine::Wave);
            results.push(NormalisedResult {
                rule_id: error.code.clone(),
                wcag_ref: wcag_refs(&mapping),
                severity: mapping.severity,
                confidence: Confidence::High,
                outcome: Outcome::Fail,
                selector: String::new(),
                dom_context: String::new(),
                message: error.description.clone(),
                reason_code: None,
            });
        }

        // Contrast items carry a ratio sub-record, but it does not feed
        // outcome derivation; they are treated like errors.
        for contrast in &report.categories.contrast {
            let mapping = mapping::lookup_or_default(&contrast.code, Engine::Wave);
            results.push(NormalisedResult {
                rule_id: contrast.code.clone(),
                wcag_ref: wcag_refs(&mapping),
                severity: mapping.severity,
                confidence: Confidence::High,
                outcome: Outcome::Fail,
                selector: String::new(),
                dom_context: String::new(),
                message: contrast.description.clone(),
                reason_code: None,
            });
        }

        for alert in &report.categories.alert {
            let mapping = mapping::lookup_or_default(&alert.code, Engine::Wave);
            results.push(NormalisedResult {
                rule_id: alert.code.clone(),
                wcag_ref: wcag_refs(&mapping),
                severity: Severity::Moderate,
                confidence: Confidence::Medium,
                outcome: Outcome::Unknown,
                selector: String::new(),
                dom_context: String::new(),
                message: alert.description.clone(),
                reason_code: Some(REASON_WAVE_ALERT.to_string()),
            });
        }

        AuditReport::new(&report.url, Engine::Wave, results)
    }
}

/// Map a Lighthouse score to an outcome.
///
/// Scores strictly between 0 and the pass threshold are indeterminate,
/// not failing; this mirrors the engine's own convention for partial
/// credit and is preserved as observed.
fn score_outcome(score: Option<f64>) -> Outcome {
    match score {
        None => Outcome::Unknown,
        Some(s) if s >= LIGHTHOUSE_PASS_THRESHOLD => Outcome::Pass,
        Some(s) if s == 0.0 => Outcome::Fail,
        Some(_) => Outcome::Unknown,
    }
}

fn wcag_refs(mapping: &mapping::Mapping) -> Vec<String> {
    mapping.wcag_refs.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::axe::AxeNode;
    use crate::selectors::Target;

    fn axe_group(id: &str, impact: Option<Severity>, help: &str, nodes: usize) -> AxeRule {
        AxeRule {
            id: id.to_string(),
            impact,
            help: help.to_string(),
            nodes: (0..nodes)
                .map(|i| AxeNode {
                    html: format!("<img id=\"n{}\">", i),
                    target: Target::One(format!("#n{}", i)),
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_score_outcome_ladder() {
        assert_eq!(score_outcome(Some(0.95)), Outcome::Pass);
        assert_eq!(score_outcome(Some(0.9)), Outcome::Pass);
        assert_eq!(score_outcome(Some(0.0)), Outcome::Fail);
        assert_eq!(score_outcome(Some(0.5)), Outcome::Unknown);
        // Partial credit stays indeterminate even near zero
        assert_eq!(score_outcome(Some(0.1)), Outcome::Unknown);
        assert_eq!(score_outcome(None), Outcome::Unknown);
    }

    #[test]
    fn test_axe_violation_expands_per_node() {
        let report = AxeReport {
            violations: vec![axe_group("image-alt", Some(Severity::Critical), "Images must have alternate text", 3)],
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        let audit = Normaliser::new().normalise_axe(&report);
        assert_eq!(audit.results.len(), 3);
        for r in &audit.results {
            assert_eq!(r.outcome, Outcome::Fail);
            assert_eq!(r.severity, Severity::Critical);
            assert_eq!(r.confidence, Confidence::High);
            assert!(!r.wcag_ref.is_empty());
            assert!(r.reason_code.is_none());
        }
        assert_eq!(audit.summary.fail, 3);
    }

    #[test]
    fn test_axe_incomplete_semantics() {
        let report = AxeReport {
            incomplete: vec![axe_group("color-contrast", Some(Severity::Serious), "Check contrast manually", 1)],
            ..Default::default()
        };
        let audit = Normaliser::new().normalise_axe(&report);
        assert_eq!(audit.results.len(), 1);
        let r = &audit.results[0];
        assert_eq!(r.outcome, Outcome::Unknown);
        // Low regardless of the serious impact
        assert_eq!(r.confidence, Confidence::Low);
        assert_eq!(r.reason_code.as_deref(), Some(REASON_INCOMPLETE_CHECK));
    }

    #[test]
    fn test_axe_incomplete_without_help_has_no_reason_code() {
        let report = AxeReport {
            incomplete: vec![axe_group("color-contrast", None, "", 1)],
            ..Default::default()
        };
        let audit = Normaliser::new().normalise_axe(&report);
        assert!(audit.results[0].reason_code.is_none());
    }

    #[test]
    fn test_axe_inapplicable_produces_nothing() {
        let report = AxeReport {
            inapplicable: vec![axe_group("video-caption", None, "Video elements need captions", 2)],
            ..Default::default()
        };
        let audit = Normaliser::new().normalise_axe(&report);
        assert!(audit.results.is_empty());
        assert_eq!(audit.summary.total, 0);
    }

    #[test]
    fn test_axe_absent_impact_defaults_moderate() {
        let report = AxeReport {
            passes: vec![axe_group("label", None, "Form elements must have labels", 1)],
            ..Default::default()
        };
        let audit = Normaliser::new().normalise_axe(&report);
        let r = &audit.results[0];
        assert_eq!(r.outcome, Outcome::Pass);
        assert_eq!(r.severity, Severity::Moderate);
        assert_eq!(r.confidence, Confidence::Low);
    }

    #[test]
    fn test_axe_idempotent_modulo_timestamp() {
        let report = AxeReport {
            violations: vec![axe_group("image-alt", Some(Severity::Critical), "Images must have alternate text", 2)],
            ..Default::default()
        };
        let normaliser = Normaliser::new();
        let a = normaliser.normalise_axe(&report);
        let b = normaliser.normalise_axe(&report);
        assert_eq!(a.results, b.results);
        assert_eq!(a.summary, b.summary);
    }

    #[test]
    fn test_wave_alert_semantics() {
        let report: WaveReport = serde_json::from_str(
            r#"{"categories":{"alert":[{"code":"alt_suspicious","count":1,
                "description":"Suspicious alternative text"}]}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_wave(&report);
        assert_eq!(audit.results.len(), 1);
        let r = &audit.results[0];
        assert_eq!(r.outcome, Outcome::Unknown);
        assert_eq!(r.severity, Severity::Moderate);
        assert_eq!(r.confidence, Confidence::Medium);
        assert_eq!(r.reason_code.as_deref(), Some(REASON_WAVE_ALERT));
    }

    #[test]
    fn test_wave_alert_severity_overrides_table() {
        // "contrast" maps to serious in the table; an alert carrying that
        // code must still come out moderate.
        let report: WaveReport = serde_json::from_str(
            r#"{"categories":{"alert":[{"code":"contrast","description":"Possible low contrast"}]}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_wave(&report);
        assert_eq!(audit.results[0].severity, Severity::Moderate);
    }

    #[test]
    fn test_wave_informational_categories_produce_nothing() {
        let report: WaveReport = serde_json::from_str(
            r#"{"categories":{
                "feature":[{"code":"alt","description":"Alternative text present"}],
                "structure":[{"code":"h1","description":"Heading level 1"}],
                "aria":[{"code":"aria_label","description":"ARIA label"}]}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_wave(&report);
        assert!(audit.results.is_empty());
    }

    #[test]
    fn test_wave_contrast_treated_as_error() {
        let report: WaveReport = serde_json::from_str(
            r#"{"categories":{"contrast":[{"code":"contrast","count":3,
                "description":"Very low contrast",
                "contrast":{"ratio":"2.1:1","large":false,"expected":"4.5:1"}}]}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_wave(&report);
        let r = &audit.results[0];
        assert_eq!(r.outcome, Outcome::Fail);
        assert_eq!(r.confidence, Confidence::High);
        assert_eq!(r.severity, Severity::Serious);
        assert!(r.selector.is_empty());
        assert!(r.dom_context.is_empty());
    }

    #[test]
    fn test_lighthouse_missing_category_is_empty_not_error() {
        let report: LighthouseReport =
            serde_json::from_str(r#"{"finalUrl":"https://example.com","audits":{},"categories":{}}"#)
                .unwrap();
        let audit = Normaliser::new().normalise_lighthouse(&report);
        assert!(audit.results.is_empty());
        assert_eq!(audit.summary.total, 0);
        assert_eq!(audit.url, "https://example.com");
    }

    #[test]
    fn test_lighthouse_ambiguous_score_single_result() {
        let report: LighthouseReport = serde_json::from_str(
            r#"{"finalUrl":"https://example.com",
                "audits":{"color-contrast":{"id":"color-contrast",
                    "description":"Background and foreground colors have sufficient contrast",
                    "score":0.5,"scoreDisplayMode":"numeric"}},
                "categories":{"accessibility":{"id":"accessibility",
                    "auditRefs":[{"id":"color-contrast","weight":7}]}}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_lighthouse(&report);
        assert_eq!(audit.results.len(), 1);
        let r = &audit.results[0];
        assert_eq!(r.outcome, Outcome::Unknown);
        assert_eq!(r.confidence, Confidence::Medium);
        assert_eq!(r.reason_code.as_deref(), Some(REASON_SCORE_AMBIGUOUS));
        assert!(r.selector.is_empty());
    }

    #[test]
    fn test_lighthouse_null_score_is_ambiguous() {
        let report: LighthouseReport = serde_json::from_str(
            r#"{"audits":{"image-alt":{"id":"image-alt","description":"Image elements have alt attributes",
                    "score":null,"scoreDisplayMode":"informative"}},
                "categories":{"accessibility":{"auditRefs":[{"id":"image-alt","weight":10}]}}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_lighthouse(&report);
        let r = &audit.results[0];
        assert_eq!(r.outcome, Outcome::Unknown);
        assert_eq!(r.reason_code.as_deref(), Some(REASON_SCORE_AMBIGUOUS));
    }

    #[test]
    fn test_lighthouse_itemized_nodes_expand() {
        let report: LighthouseReport = serde_json::from_str(
            r#"{"audits":{"image-alt":{"id":"image-alt","description":"Image elements have alt attributes",
                    "score":0,"scoreDisplayMode":"binary",
                    "details":{"type":"table","nodes":[
                        {"path":"1,HTML","selector":"img.hero","snippet":"<img class=\"hero\">"},
                        {"path":"2,HTML","selector":"img.logo","snippet":"<img class=\"logo\">"}]}}},
                "categories":{"accessibility":{"auditRefs":[{"id":"image-alt","weight":10}]}}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_lighthouse(&report);
        assert_eq!(audit.results.len(), 2);
        assert_eq!(audit.results[0].outcome, Outcome::Fail);
        assert_eq!(audit.results[0].confidence, Confidence::High);
        assert_eq!(audit.results[0].selector, "img.hero");
        assert_eq!(audit.results[1].dom_context, "<img class=\"logo\">");
    }

    #[test]
    fn test_lighthouse_not_applicable_and_error_skipped() {
        let report: LighthouseReport = serde_json::from_str(
            r#"{"audits":{
                "video-caption":{"id":"video-caption","score":null,"scoreDisplayMode":"notApplicable"},
                "tabindex":{"id":"tabindex","score":null,"scoreDisplayMode":"error"}},
                "categories":{"accessibility":{"auditRefs":[
                    {"id":"video-caption","weight":0},{"id":"tabindex","weight":7},
                    {"id":"missing-audit","weight":1}]}}}"#,
        )
        .unwrap();
        let audit = Normaliser::new().normalise_lighthouse(&report);
        assert!(audit.results.is_empty());
    }
}
