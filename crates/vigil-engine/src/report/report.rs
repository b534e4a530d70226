//! Report: one timestamped, severity-tagged occurrence of an issue.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::issues::{Area, Issue, IssueId, Severity};

/// A report shared between reporters, handlers, and the runner.
/// Released when the last holder drops it.
pub type SharedReport = Arc<Report>;

/// One occurrence of an [`Issue`].
///
/// The level can only change while the report is exclusively owned,
/// i.e. before it is shared as a [`SharedReport`].
#[derive(Debug, Clone)]
pub struct Report {
    issue: Arc<Issue>,
    reporter: String,
    message: String,
    level: Severity,
    timestamp: Duration,
}

impl Report {
    pub(crate) fn new(
        issue: Arc<Issue>,
        reporter: impl Into<String>,
        message: impl Into<String>,
        timestamp: Duration,
    ) -> Self {
        let level = issue.default_severity();
        Self {
            issue,
            reporter: reporter.into(),
            message: message.into(),
            level,
            timestamp,
        }
    }

    pub fn issue(&self) -> &Arc<Issue> {
        &self.issue
    }

    pub fn issue_id(&self) -> IssueId {
        self.issue.id()
    }

    pub fn area(&self) -> Area {
        self.issue.area()
    }

    pub fn reporter(&self) -> &str {
        &self.reporter
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn set_level(&mut self, level: Severity) {
        self.level = level;
    }

    /// Time elapsed between catalog initialization and report creation.
    pub fn timestamp(&self) -> Duration {
        self.timestamp
    }

    /// Single-line rendering: area, level, reporter, message, timestamp.
    pub fn format(&self) -> String {
        self.to_string()
    }

    pub fn to_record(&self) -> ReportRecord {
        ReportRecord {
            issue_id: self.issue.id(),
            area: self.area(),
            level: self.level,
            reporter: self.reporter.clone(),
            summary: self.issue.summary().to_string(),
            message: self.message.clone(),
            timestamp_ns: u64::try_from(self.timestamp.as_nanos()).unwrap_or(u64::MAX),
        }
    }

    pub fn into_shared(self) -> SharedReport {
        Arc::new(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} <{}>: {} ({})",
            self.area(),
            self.level,
            self.reporter,
            self.message,
            format_timestamp(self.timestamp)
        )
    }
}

/// Serializable snapshot of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRecord {
    pub issue_id: IssueId,
    pub area: Area,
    pub level: Severity,
    pub reporter: String,
    pub summary: String,
    pub message: String,
    pub timestamp_ns: u64,
}

/// `H:MM:SS.NNNNNNNNN`.
pub fn format_timestamp(timestamp: Duration) -> String {
    let secs = timestamp.as_secs();
    format!(
        "{}:{:02}:{:02}.{:09}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        timestamp.subsec_nanos()
    )
}
