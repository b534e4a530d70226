//! Issue identifiers and static issue metadata.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::severity::{Area, Severity};

const AREA_SHIFT: u32 = 16;

/// Issue identifier. The upper 16 bits carry the [`Area`] index, the lower
/// 16 bits a per-area code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(u32);

impl IssueId {
    pub const fn new(area: Area, code: u16) -> Self {
        Self(((area.index() as u32) << AREA_SHIFT) | code as u32)
    }

    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }

    pub const fn code(self) -> u16 {
        (self.0 & 0xffff) as u16
    }

    /// The area encoded in this id, `None` for ids not built with [`IssueId::new`].
    pub fn area(self) -> Option<Area> {
        Area::from_index((self.0 >> AREA_SHIFT) as u16)
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Static metadata for one kind of validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    id: IssueId,
    area: Area,
    summary: String,
    description: Option<String>,
    default_severity: Severity,
    repeat: bool,
}

impl Issue {
    pub fn new(
        area: Area,
        code: u16,
        summary: impl Into<String>,
        description: Option<String>,
        default_severity: Severity,
    ) -> Self {
        Self {
            id: IssueId::new(area, code),
            area,
            summary: summary.into(),
            description,
            default_severity,
            repeat: false,
        }
    }

    /// Allow the issue to be reported more than once per reporter.
    pub fn repeatable(mut self) -> Self {
        self.repeat = true;
        self
    }

    pub fn id(&self) -> IssueId {
        self.id
    }

    pub fn area(&self) -> Area {
        self.area
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_severity(&self) -> Severity {
        self.default_severity
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }
}
