use crate::diagnose::{DiagnosticReport, DiagnosticStep, diagnostic_sprint};

use serde_json::json;

fn step(name: &'static str, ok: bool) -> DiagnosticStep {
    DiagnosticStep {
        name,
        ok,
        detail: json!(null),
    }
}

#[test]
fn test_diagnostic_sprint_has_required_fields() {
    let body = diagnostic_sprint();
    for field in ["sprintName", "description", "startDate", "endDate"] {
        assert!(body[field].is_string(), "missing {field}");
    }
    assert_eq!(body["status"], "Planning");
}

#[test]
fn test_all_passed_requires_completion() {
    let report = DiagnosticReport {
        steps: vec![step("health", true)],
        completed: false,
    };
    assert!(!report.all_passed());
}

#[test]
fn test_all_passed_requires_every_step() {
    let report = DiagnosticReport {
        steps: vec![step("health", true), step("debug-db", false)],
        completed: true,
    };
    assert!(!report.all_passed());

    let report = DiagnosticReport {
        steps: vec![step("health", true), step("debug-db", true)],
        completed: true,
    };
    assert!(report.all_passed());
}
