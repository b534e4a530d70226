//! Override behaviors: hooks run on attach and on every report.

use rustc_hash::FxHashMap;

use crate::issues::{IssueId, Severity};
use crate::monitor::Monitor;
use crate::report::Report;

/// User-supplied behavior attached to matching monitors.
///
/// Attach hooks run while the override registry is locked and must not
/// register new rules.
pub trait Override: Send + Sync {
    fn name(&self) -> &str;

    fn attach_connection_point(&self, _monitor: &Monitor) {}

    fn attach_container(&self, _monitor: &Monitor) {}

    fn attach_leaf(&self, _monitor: &Monitor) {}

    /// Runs for every report raised by a monitor this override is attached to.
    fn intercept_report(&self, _monitor: &Monitor, _report: &mut Report) {}
}

/// Rewrites the level of selected issues.
#[derive(Debug, Clone)]
pub struct SeverityOverride {
    name: String,
    levels: FxHashMap<IssueId, Severity>,
}

impl SeverityOverride {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            levels: FxHashMap::default(),
        }
    }

    /// Reports of `issue` are raised at `level` instead of its default.
    pub fn change_severity(mut self, issue: IssueId, level: Severity) -> Self {
        self.levels.insert(issue, level);
        self
    }

    pub fn severity_for(&self, issue: IssueId) -> Option<Severity> {
        self.levels.get(&issue).copied()
    }
}

impl Override for SeverityOverride {
    fn name(&self) -> &str {
        &self.name
    }

    fn intercept_report(&self, _monitor: &Monitor, report: &mut Report) {
        if let Some(level) = self.severity_for(report.issue_id()) {
            report.set_level(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::builtin;

    #[test]
    fn test_severity_for_configured_issue_only() {
        let ov = SeverityOverride::new("quiet")
            .change_severity(builtin::BUFFER_BEFORE_SEGMENT, Severity::Ignore);
        assert_eq!(ov.severity_for(builtin::BUFFER_BEFORE_SEGMENT), Some(Severity::Ignore));
        assert_eq!(ov.severity_for(builtin::CAPS_IS_MISSING_FIELD), None);
        assert_eq!(ov.name(), "quiet");
    }

    #[test]
    fn test_later_change_wins() {
        let ov = SeverityOverride::new("x")
            .change_severity(builtin::STATE_CHANGE_FAILURE, Severity::Warning)
            .change_severity(builtin::STATE_CHANGE_FAILURE, Severity::Issue);
        assert_eq!(ov.severity_for(builtin::STATE_CHANGE_FAILURE), Some(Severity::Issue));
    }
}
