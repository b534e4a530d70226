//! Tests for report collection and output.

use vigil_engine::issues::{builtin, Severity};
use vigil_engine::report::NamedReporter;
use vigil_engine::ValidateContext;

#[test]
fn test_runner_collects_in_order() {
    let ctx = ValidateContext::new();
    let reporter = NamedReporter::new("src");
    ctx.report(&reporter, builtin::BUFFER_BEFORE_SEGMENT, "a");
    ctx.report(&reporter, builtin::BUFFER_IS_OUT_OF_SEGMENT, "b");

    let reports = ctx.runner().reports();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].message(), "a");
    assert_eq!(reports[1].message(), "b");
    assert_eq!(ctx.runner().reports_at_least(Severity::Warning).len(), 1);
}

#[test]
fn test_print_reports() {
    let ctx = ValidateContext::new();
    let reporter = NamedReporter::new("sink");
    ctx.report(&reporter, builtin::STATE_CHANGE_FAILURE, "stuck in paused");

    let mut out = Vec::new();
    ctx.runner().print_reports(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "issues found: 1");
    assert!(lines[1].starts_with("state: critical <sink>: stuck in paused ("), "{}", lines[1]);
}

#[test]
fn test_json_records() {
    let ctx = ValidateContext::new();
    let reporter = NamedReporter::new("dec");
    ctx.report(&reporter, builtin::CAPS_IS_MISSING_FIELD, "no width");

    let json: serde_json::Value = serde_json::from_str(&ctx.runner().to_json().unwrap()).unwrap();
    let record = &json[0];
    assert_eq!(record["reporter"], "dec");
    assert_eq!(record["message"], "no width");
    assert_eq!(record["area"], "caps");
    assert_eq!(record["issue_id"], builtin::CAPS_IS_MISSING_FIELD.raw());
}

#[test]
fn test_clear() {
    let ctx = ValidateContext::new();
    let reporter = NamedReporter::new("x");
    ctx.report(&reporter, builtin::BUFFER_BEFORE_SEGMENT, "a");
    ctx.runner().clear();
    assert_eq!(ctx.runner().reports_count(), 0);
}
