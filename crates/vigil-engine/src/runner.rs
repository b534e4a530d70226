//! Runner: the session-wide collection of raised reports.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::events::{ReportRaisedEvent, ValidateEventHandler};
use crate::issues::Severity;
use crate::report::{ReportRecord, SharedReport};

/// Collects every published report, in raise order. The context registers
/// its runner as the first event handler.
#[derive(Debug, Default)]
pub struct Runner {
    reports: Mutex<Vec<SharedReport>>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<SharedReport>> {
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn reports(&self) -> Vec<SharedReport> {
        self.lock().clone()
    }

    pub fn reports_count(&self) -> usize {
        self.lock().len()
    }

    /// Reports at `level` or above.
    pub fn reports_at_least(&self, level: Severity) -> Vec<SharedReport> {
        self.lock()
            .iter()
            .filter(|r| r.level() >= level)
            .cloned()
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Summary line followed by one line per report.
    pub fn print_reports(&self, out: &mut impl Write) -> io::Result<()> {
        let reports = self.reports();
        writeln!(out, "issues found: {}", reports.len())?;
        for report in &reports {
            writeln!(out, "{report}")?;
        }
        Ok(())
    }

    pub fn records(&self) -> Vec<ReportRecord> {
        self.lock().iter().map(|r| r.to_record()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records())
    }
}

impl ValidateEventHandler for Runner {
    fn on_report(&self, event: &ReportRaisedEvent) {
        self.lock().push(SharedReport::clone(&event.report));
    }
}
