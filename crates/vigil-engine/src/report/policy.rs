//! Fatal-escalation policy: which severities abort the process.

use vigil_core::constants::{
    FLAG_ALL, FLAG_FATAL_CRITICALS, FLAG_FATAL_ISSUES, FLAG_FATAL_WARNINGS,
};

use crate::issues::Severity;

/// Per-severity "abort on occurrence" flags. Read-only once built.
///
/// The default policy never aborts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FatalPolicy {
    issues: bool,
    warnings: bool,
    criticals: bool,
}

impl FatalPolicy {
    /// Pure reporting mode: nothing is fatal.
    pub fn none() -> Self {
        Self::default()
    }

    /// Parse a flag list such as `"fatal_warnings,fatal_criticals"`.
    ///
    /// Tokens are separated by commas, colons, semicolons, or whitespace and
    /// compared case-insensitively. `all` sets every flag. Unknown tokens are
    /// logged and ignored.
    pub fn parse(spec: &str) -> Self {
        let mut policy = Self::none();
        let tokens = spec
            .split(|c: char| matches!(c, ',' | ':' | ';') || c.is_whitespace())
            .filter(|token| !token.is_empty());

        for token in tokens {
            if token.eq_ignore_ascii_case(FLAG_FATAL_ISSUES) {
                policy.issues = true;
            } else if token.eq_ignore_ascii_case(FLAG_FATAL_WARNINGS) {
                policy.warnings = true;
            } else if token.eq_ignore_ascii_case(FLAG_FATAL_CRITICALS) {
                policy.criticals = true;
            } else if token.eq_ignore_ascii_case(FLAG_ALL) {
                policy = Self::all();
            } else {
                tracing::warn!(token, "ignoring unknown fatal flag");
            }
        }
        policy
    }

    pub fn all() -> Self {
        Self {
            issues: true,
            warnings: true,
            criticals: true,
        }
    }

    /// Returns a copy of this policy that also treats `level` as fatal.
    /// `Ignore` can never be fatal.
    pub fn fatal_on(mut self, level: Severity) -> Self {
        match level {
            Severity::Ignore => {}
            Severity::Issue => self.issues = true,
            Severity::Warning => self.warnings = true,
            Severity::Critical => self.criticals = true,
        }
        self
    }

    pub fn is_fatal(&self, level: Severity) -> bool {
        match level {
            Severity::Ignore => false,
            Severity::Issue => self.issues,
            Severity::Warning => self.warnings,
            Severity::Critical => self.criticals,
        }
    }

    /// True when no severity aborts.
    pub fn is_reporting_only(&self) -> bool {
        !(self.issues || self.warnings || self.criticals)
    }
}
