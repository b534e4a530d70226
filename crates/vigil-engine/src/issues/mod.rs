//! Issue catalog: severities, areas, issue metadata, and the built-in set.

pub mod builtin;
pub mod catalog;
pub mod issue;
pub mod severity;

pub use catalog::IssueCatalog;
pub use issue::{Issue, IssueId};
pub use severity::{Area, Severity};
