// SPDX-License-Identifier: PMPL-1.0-or-later
//! Fixture-driven integration tests for the normalization layer.

use auditbot::engines::{AxeReport, LighthouseReport, WaveReport};
use auditbot::normalise::Normaliser;
use auditbot::report::{AuditReport, Confidence, Engine, Outcome, Severity};

fn load<T: serde::de::DeserializeOwned>(name: &str) -> T {
    let path = format!("tests/fixtures/{}", name);
    let raw = std::fs::read_to_string(&path).expect("fixture exists");
    serde_json::from_str(&raw).expect("fixture parses")
}

/// Invariants every normalized report must hold, regardless of engine
fn assert_invariants(report: &AuditReport) {
    for result in &report.results {
        assert!(!result.wcag_ref.is_empty(), "wcag_ref must never be empty");
        for wcag_ref in &result.wcag_ref {
            assert!(wcag_ref.starts_with("WCAG2.1:"), "unexpected ref {}", wcag_ref);
        }
    }
    let summary = &report.summary;
    assert_eq!(summary.total, report.results.len());
    assert_eq!(summary.pass + summary.fail + summary.unknown, summary.total);
    assert_eq!(
        summary.by_severity.critical
            + summary.by_severity.serious
            + summary.by_severity.moderate
            + summary.by_severity.minor,
        summary.total
    );
}

#[test]
fn axe_fixture_normalises() {
    let fixture: AxeReport = load("axe-result.json");
    let report = Normaliser::new().normalise_axe(&fixture);

    assert_eq!(report.tool, Engine::Axe);
    assert_eq!(report.url, "https://example.com");
    assert_invariants(&report);

    // One violation node plus one incomplete node; the inapplicable
    // group contributes nothing
    assert_eq!(report.results.len(), 2);

    let violation = &report.results[0];
    assert_eq!(violation.rule_id, "image-alt");
    assert_eq!(violation.outcome, Outcome::Fail);
    assert_eq!(violation.severity, Severity::Critical);
    assert_eq!(violation.confidence, Confidence::High);
    assert!(violation.wcag_ref.contains(&"WCAG2.1:1.1.1".to_string()));
    assert_eq!(violation.selector, "#content > img");
    assert_eq!(violation.dom_context, "<img src=\"hero.png\">");
    assert_eq!(violation.message, "Images must have alternate text");

    let incomplete = &report.results[1];
    assert_eq!(incomplete.rule_id, "color-contrast");
    assert_eq!(incomplete.outcome, Outcome::Unknown);
    assert_eq!(incomplete.confidence, Confidence::Low);
    assert_eq!(incomplete.reason_code.as_deref(), Some("INCOMPLETE_CHECK"));

    assert_eq!(report.summary.fail, 1);
    assert_eq!(report.summary.unknown, 1);
    assert_eq!(report.summary.by_severity.critical, 1);
    assert_eq!(report.summary.by_severity.serious, 1);
}

#[test]
fn lighthouse_fixture_normalises() {
    let fixture: LighthouseReport = load("lighthouse-result.json");
    let report = Normaliser::new().normalise_lighthouse(&fixture);

    assert_eq!(report.tool, Engine::Lighthouse);
    assert_eq!(report.url, "https://example.com");
    assert_invariants(&report);

    // image-alt expands its one node, document-title and color-contrast
    // each emit one result, video-caption is notApplicable, and the
    // performance category is never visited
    assert_eq!(report.results.len(), 3);
    assert!(report.results.iter().all(|r| r.rule_id != "first-contentful-paint"));
    assert!(report.results.iter().all(|r| r.rule_id != "video-caption"));

    let image_alt = report
        .results
        .iter()
        .find(|r| r.rule_id == "image-alt")
        .expect("image-alt present");
    assert_eq!(image_alt.outcome, Outcome::Fail);
    assert_eq!(image_alt.confidence, Confidence::High);
    assert_eq!(image_alt.selector, "body > img");
    assert_eq!(image_alt.dom_context, "<img src=\"hero.png\">");

    let title = report
        .results
        .iter()
        .find(|r| r.rule_id == "document-title")
        .expect("document-title present");
    assert_eq!(title.outcome, Outcome::Pass);
    assert!(title.selector.is_empty());
    assert!(title.reason_code.is_none());

    let contrast = report
        .results
        .iter()
        .find(|r| r.rule_id == "color-contrast")
        .expect("color-contrast present");
    assert_eq!(contrast.outcome, Outcome::Unknown);
    assert_eq!(contrast.confidence, Confidence::Medium);
    assert_eq!(contrast.reason_code.as_deref(), Some("SCORE_AMBIGUOUS"));
}

#[test]
fn lighthouse_without_accessibility_category_is_empty() {
    let fixture: LighthouseReport = serde_json::from_str(
        r#"{"finalUrl":"https://example.com","audits":{},"categories":{
            "performance":{"id":"performance","auditRefs":[]}}}"#,
    )
    .unwrap();
    let report = Normaliser::new().normalise_lighthouse(&fixture);
    assert!(report.results.is_empty());
    assert_eq!(report.summary.total, 0);
    assert_invariants(&report);
}

#[test]
fn wave_fixture_normalises() {
    let fixture: WaveReport = load("wave-result.json");
    let report = Normaliser::new().normalise_wave(&fixture);

    assert_eq!(report.tool, Engine::Wave);
    assert_eq!(report.url, "https://example.com");
    assert_invariants(&report);

    // error + contrast + alert; feature and structure are informational
    assert_eq!(report.results.len(), 3);

    let error = &report.results[0];
    assert_eq!(error.rule_id, "error_alt_missing");
    assert_eq!(error.outcome, Outcome::Fail);
    assert_eq!(error.severity, Severity::Critical);
    assert_eq!(error.confidence, Confidence::High);
    assert!(error.selector.is_empty());
    assert!(error.dom_context.is_empty());

    let contrast = &report.results[1];
    assert_eq!(contrast.rule_id, "contrast");
    assert_eq!(contrast.outcome, Outcome::Fail);
    assert_eq!(contrast.severity, Severity::Serious);

    let alert = &report.results[2];
    assert_eq!(alert.outcome, Outcome::Unknown);
    assert_eq!(alert.severity, Severity::Moderate);
    assert_eq!(alert.confidence, Confidence::Medium);
    assert_eq!(alert.reason_code.as_deref(), Some("WAVE_ALERT"));

    assert_eq!(report.summary.fail, 2);
    assert_eq!(report.summary.unknown, 1);
}

#[test]
fn normalisation_is_idempotent_modulo_timestamp() {
    let normaliser = Normaliser::new();

    let axe: AxeReport = load("axe-result.json");
    let a = normaliser.normalise_axe(&axe);
    let b = normaliser.normalise_axe(&axe);
    assert_eq!(a.results, b.results);
    assert_eq!(a.summary, b.summary);

    let wave: WaveReport = load("wave-result.json");
    let a = normaliser.normalise_wave(&wave);
    let b = normaliser.normalise_wave(&wave);
    assert_eq!(a.results, b.results);
    assert_eq!(a.summary, b.summary);
}

#[test]
fn serialized_report_uses_wire_field_names() {
    let fixture: AxeReport = load("axe-result.json");
    let report = Normaliser::new().normalise_axe(&fixture);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["tool"], "axe");
    assert_eq!(json["url"], "https://example.com");
    assert!(json["timestamp"].is_string());

    let first = &json["results"][0];
    for field in ["rule_id", "wcag_ref", "severity", "confidence", "outcome", "selector", "dom_context", "message"] {
        assert!(!first[field].is_null(), "missing field {}", field);
    }
    assert_eq!(first["severity"], "critical");
    assert_eq!(first["outcome"], "fail");
    assert_eq!(first["confidence"], "high");
    // reason_code is omitted, not null, on conclusive results
    assert!(first.get("reason_code").is_none());
    assert_eq!(json["results"][1]["reason_code"], "INCOMPLETE_CHECK");

    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["summary"]["by_severity"]["serious"], 1);
}
