//! Reports, the report factory, fatal escalation, and reporters.

pub mod factory;
pub mod policy;
pub mod report;
pub mod reporter;

pub use factory::{AbortHandler, ProcessAbort, ReportFactory};
pub use policy::FatalPolicy;
pub use report::{format_timestamp, Report, ReportRecord, SharedReport};
pub use reporter::{NamedReporter, Reporter, ReporterState};
