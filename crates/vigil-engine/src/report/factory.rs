//! Report factory and the fatal abort path.

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;

use super::policy::FatalPolicy;
use super::report::Report;
use crate::issues::Issue;

/// What happens when a report hits a fatal severity.
pub trait AbortHandler: Send + Sync {
    fn abort(&self, report: &Report) -> !;
}

/// Prints the report to stderr and terminates the process.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessAbort;

impl AbortHandler for ProcessAbort {
    fn abort(&self, report: &Report) -> ! {
        let mut stderr = std::io::stderr().lock();
        let _ = writeln!(stderr, "Fatal report received: {report}");
        let _ = writeln!(stderr, "  issue: {}", report.issue().summary());
        if let Some(description) = report.issue().description() {
            let _ = writeln!(stderr, "  {description}");
        }
        let _ = stderr.flush();
        std::process::abort()
    }
}

/// Builds reports stamped relative to a start instant and applies the
/// fatal-escalation policy.
pub struct ReportFactory {
    start: Instant,
    policy: FatalPolicy,
    abort: Arc<dyn AbortHandler>,
}

impl ReportFactory {
    pub fn new(start: Instant, policy: FatalPolicy) -> Self {
        Self {
            start,
            policy,
            abort: Arc::new(ProcessAbort),
        }
    }

    pub fn with_abort_handler(mut self, abort: Arc<dyn AbortHandler>) -> Self {
        self.abort = abort;
        self
    }

    pub fn policy(&self) -> FatalPolicy {
        self.policy
    }

    pub fn start_instant(&self) -> Instant {
        self.start
    }

    /// New report at the issue's default severity, timestamped now.
    pub fn new_report(
        &self,
        issue: &Arc<Issue>,
        reporter: &str,
        message: impl Into<String>,
    ) -> Report {
        Report::new(Arc::clone(issue), reporter, message, self.start.elapsed())
    }

    /// Hands the report to the abort handler when its level is fatal under
    /// the configured policy. Returns normally otherwise.
    pub fn check_abort(&self, report: &Report) {
        if self.policy.is_fatal(report.level()) {
            tracing::error!(
                issue = %report.issue_id(),
                level = %report.level(),
                "fatal report received"
            );
            self.abort.abort(report);
        }
    }
}

impl std::fmt::Debug for ReportFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportFactory")
            .field("start", &self.start)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
