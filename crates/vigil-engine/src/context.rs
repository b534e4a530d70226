//! ValidateContext: the engine state shared by every monitor.

use std::sync::Arc;

use vigil_core::errors::CatalogError;
use vigil_core::{VigilConfig, VigilErrorCode};

use crate::events::{EventDispatcher, PluginLoadedEvent, ReportRaisedEvent, ValidateEventHandler};
use crate::issues::{IssueCatalog, IssueId, Severity};
use crate::overrides::{OverrideRegistry, PluginLoader};
use crate::report::{AbortHandler, FatalPolicy, Report, ReportFactory, Reporter, SharedReport};
use crate::runner::Runner;

/// Issue catalog, override registry, report factory, runner, and event
/// handlers for one validation session.
#[derive(Debug)]
pub struct ValidateContext {
    config: VigilConfig,
    catalog: Arc<IssueCatalog>,
    registry: Arc<OverrideRegistry>,
    reports: ReportFactory,
    runner: Arc<Runner>,
    events: EventDispatcher,
}

impl ValidateContext {
    pub fn builder() -> ContextBuilder {
        ContextBuilder::default()
    }

    /// Default configuration, built-in issues, nothing fatal.
    pub fn new() -> Arc<Self> {
        Self::builder().build()
    }

    pub fn config(&self) -> &VigilConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<IssueCatalog> {
        &self.catalog
    }

    pub fn registry(&self) -> &Arc<OverrideRegistry> {
        &self.registry
    }

    pub fn report_factory(&self) -> &ReportFactory {
        &self.reports
    }

    pub fn runner(&self) -> &Arc<Runner> {
        &self.runner
    }

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    /// Raise a report of `issue_id` on behalf of `reporter`.
    ///
    /// Runs the reporter's intercept hook, then drops the report if the
    /// reporter already raised this (non-repeatable) issue. Surviving
    /// reports are logged, checked against the fatal policy, then published
    /// to handlers, the runner first. Returns `None` for unknown
    /// issues and duplicates.
    pub fn report(
        &self,
        reporter: &dyn Reporter,
        issue_id: IssueId,
        message: impl Into<String>,
    ) -> Option<SharedReport> {
        let Some(issue) = self.catalog.lookup(issue_id) else {
            let err = CatalogError::UnknownIssue(issue_id.raw());
            tracing::error!(
                reporter = reporter.reporter_name(),
                error = %err.coded_string(),
                "report for unregistered issue dropped"
            );
            return None;
        };

        let mut report = self.reports.new_report(&issue, reporter.reporter_name(), message);
        reporter.intercept_report(&mut report);
        let report = report.into_shared();

        if !issue.repeat() && !reporter.reporter_state().record_first(&report) {
            tracing::debug!(
                issue = %issue_id,
                reporter = reporter.reporter_name(),
                "report already present"
            );
            return None;
        }

        log_report(&report);
        self.reports.check_abort(&report);
        self.events.emit_report(&ReportRaisedEvent {
            report: SharedReport::clone(&report),
        });
        Some(report)
    }

    /// Preload the configured override plugins through `loader`.
    pub fn preload_overrides(&self, loader: &dyn PluginLoader) -> usize {
        let summary = self
            .registry
            .preload_detailed(&self.config.overrides.plugin_spec(), loader);
        for plugin in &summary.plugins {
            if let Ok(&overrides) = plugin.result.as_ref() {
                if overrides > 0 {
                    self.events.emit_plugin_loaded(&PluginLoadedEvent {
                        path: plugin.path.clone(),
                        overrides,
                    });
                }
            }
        }
        summary.loaded
    }
}

fn log_report(report: &Report) {
    let issue = report.issue_id();
    match report.level() {
        Severity::Critical => tracing::error!(%issue, "{report}"),
        Severity::Warning => tracing::warn!(%issue, "{report}"),
        Severity::Issue => tracing::debug!(%issue, "{report}"),
        Severity::Ignore => tracing::trace!(%issue, "{report}"),
    }
}

/// Builder for [`ValidateContext`].
#[derive(Default)]
pub struct ContextBuilder {
    config: VigilConfig,
    catalog: Option<Arc<IssueCatalog>>,
    registry: Option<Arc<OverrideRegistry>>,
    policy: Option<FatalPolicy>,
    abort: Option<Arc<dyn AbortHandler>>,
    handlers: Vec<Arc<dyn ValidateEventHandler>>,
}

impl ContextBuilder {
    pub fn config(mut self, config: VigilConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing catalog, e.g. one with custom issues registered.
    pub fn catalog(mut self, catalog: Arc<IssueCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn registry(mut self, registry: Arc<OverrideRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Overrides the policy derived from `[reporting] fatal`.
    pub fn fatal_policy(mut self, policy: FatalPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn abort_handler(mut self, abort: Arc<dyn AbortHandler>) -> Self {
        self.abort = Some(abort);
        self
    }

    pub fn handler(mut self, handler: Arc<dyn ValidateEventHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn build(self) -> Arc<ValidateContext> {
        let catalog = self.catalog.unwrap_or_default();
        catalog.init();

        let policy = self
            .policy
            .unwrap_or_else(|| FatalPolicy::parse(&self.config.reporting.fatal_spec()));
        let mut reports = ReportFactory::new(catalog.start_instant(), policy);
        if let Some(abort) = self.abort {
            reports = reports.with_abort_handler(abort);
        }

        let runner = Arc::new(Runner::new());
        let mut events = EventDispatcher::new();
        events.register(runner.clone());
        for handler in self.handlers {
            events.register(handler);
        }

        Arc::new(ValidateContext {
            config: self.config,
            catalog,
            registry: self.registry.unwrap_or_default(),
            reports,
            runner,
            events,
        })
    }
}
