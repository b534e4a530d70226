//! Tests for fatal escalation.

mod common;

use std::process::Command;
use std::sync::Arc;

use common::PanicAbort;
use vigil_core::VigilConfig;
use vigil_engine::issues::{builtin, Severity};
use vigil_engine::report::{FatalPolicy, NamedReporter, ProcessAbort};
use vigil_engine::ValidateContext;

fn ctx_with(policy: FatalPolicy) -> Arc<ValidateContext> {
    ValidateContext::builder()
        .fatal_policy(policy)
        .abort_handler(Arc::new(PanicAbort))
        .build()
}

#[test]
#[should_panic(expected = "fatal report")]
fn test_fatal_warnings_aborts_on_warning() {
    let ctx = ctx_with(FatalPolicy::parse("fatal_warnings"));
    let reporter = NamedReporter::new("src");
    ctx.report(&reporter, builtin::BUFFER_BEFORE_SEGMENT, "early");
}

#[test]
fn test_fatal_warnings_ignores_issue_level() {
    let ctx = ctx_with(FatalPolicy::parse("fatal_warnings"));
    let reporter = NamedReporter::new("src");
    let report = ctx.report(&reporter, builtin::BUFFER_IS_OUT_OF_SEGMENT, "late").unwrap();
    assert_eq!(report.level(), Severity::Issue);
}

#[test]
fn test_reporting_only_never_aborts() {
    let ctx = ctx_with(FatalPolicy::none());
    let reporter = NamedReporter::new("src");
    assert!(ctx.report(&reporter, builtin::STATE_CHANGE_FAILURE, "x").is_some());
}

#[test]
#[should_panic(expected = "fatal report")]
fn test_policy_from_config() {
    let mut config = VigilConfig::default();
    config.reporting.fatal = vec!["fatal_criticals".to_string()];
    let ctx = ValidateContext::builder()
        .config(config)
        .abort_handler(Arc::new(PanicAbort))
        .build();
    let reporter = NamedReporter::new("src");
    ctx.report(&reporter, builtin::STATE_CHANGE_FAILURE, "x");
}

#[test]
fn test_duplicate_is_not_escalated() {
    let ctx = ctx_with(FatalPolicy::parse("fatal_warnings"));
    let reporter = NamedReporter::new("src");
    let first = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        ctx.report(&reporter, builtin::BUFFER_BEFORE_SEGMENT, "a");
    }));
    assert!(first.is_err());
    assert!(ctx.report(&reporter, builtin::BUFFER_BEFORE_SEGMENT, "b").is_none());
}

const CHILD_ENV: &str = "VIGIL_FATAL_TEST_CHILD";

#[test]
fn test_process_abort_terminates() {
    if std::env::var_os(CHILD_ENV).is_some() {
        let ctx = ValidateContext::builder()
            .fatal_policy(FatalPolicy::all())
            .abort_handler(Arc::new(ProcessAbort))
            .build();
        let reporter = NamedReporter::new("src");
        ctx.report(&reporter, builtin::STATE_CHANGE_FAILURE, "boom");
        return;
    }

    let output = Command::new(std::env::current_exe().unwrap())
        .args(["test_process_abort_terminates", "--exact", "--nocapture"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Fatal report received: state: critical <src>: boom"), "{stderr}");
    assert!(stderr.contains("state change failed"), "{stderr}");
}
