//! Reporter identity and per-reporter de-duplication.

use std::sync::{Mutex, PoisonError};

use rustc_hash::FxHashMap;

use super::report::{Report, SharedReport};
use crate::issues::IssueId;

/// Anything that raises reports: monitors, overrides, host-side checks.
pub trait Reporter: Send + Sync {
    fn reporter_state(&self) -> &ReporterState;

    fn reporter_name(&self) -> &str {
        self.reporter_state().name()
    }

    /// Last chance to adjust a report (typically its level) before it is
    /// shared.
    fn intercept_report(&self, _report: &mut Report) {}
}

/// Name plus the first report raised for each non-repeatable issue.
#[derive(Debug)]
pub struct ReporterState {
    name: String,
    reports: Mutex<FxHashMap<IssueId, SharedReport>>,
}

impl ReporterState {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            reports: Mutex::new(FxHashMap::default()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records `report` unless this reporter already raised its issue.
    /// Returns whether it was recorded.
    pub(crate) fn record_first(&self, report: &SharedReport) -> bool {
        let mut reports = self.reports.lock().unwrap_or_else(PoisonError::into_inner);
        if reports.contains_key(&report.issue_id()) {
            return false;
        }
        reports.insert(report.issue_id(), SharedReport::clone(report));
        true
    }

    pub fn recorded(&self, id: IssueId) -> Option<SharedReport> {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    pub fn recorded_count(&self) -> usize {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

/// Free-standing reporter for findings not tied to a monitor.
#[derive(Debug)]
pub struct NamedReporter {
    state: ReporterState,
}

impl NamedReporter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            state: ReporterState::new(name),
        }
    }
}

impl Reporter for NamedReporter {
    fn reporter_state(&self) -> &ReporterState {
        &self.state
    }
}
