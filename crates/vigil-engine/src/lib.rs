//! Vigil validation engine.
//!
//! Attaches a [`Monitor`] to every object of a host processing graph,
//! attaches user [`Override`]s to monitors by name, type, or class label,
//! and turns findings into timestamped [`Report`]s that can abort the
//! process under a fatal-escalation policy.

pub mod context;
pub mod events;
pub mod issues;
pub mod monitor;
pub mod overrides;
pub mod report;
pub mod runner;

use std::path::Path;
use std::sync::Arc;

use vigil_core::{VigilConfig, VigilError};

pub use context::{ContextBuilder, ValidateContext};
pub use issues::{Area, Issue, IssueCatalog, IssueId, Severity};
pub use monitor::{create_monitor, GraphObject, Monitor, ObjectId, ObjectKind, TypeTag};
pub use overrides::{DylibLoader, Override, OverrideRegistry, PluginLoader, SeverityOverride};
pub use report::{FatalPolicy, Report, Reporter, SharedReport};
pub use runner::Runner;

/// Start a session rooted at `root`: install tracing, load configuration
/// (user file, `root/vigil.toml`, environment), build the context, and
/// preload override plugins unless disabled.
pub fn init(root: &Path) -> Result<Arc<ValidateContext>, VigilError> {
    vigil_core::tracing::init_tracing();
    let config = VigilConfig::load(root)?;
    let preload = config.overrides.effective_preload();

    let ctx = ValidateContext::builder().config(config).build();
    if preload {
        let loaded = ctx.preload_overrides(&DylibLoader);
        tracing::debug!(loaded, "override preload finished");
    }
    Ok(ctx)
}
