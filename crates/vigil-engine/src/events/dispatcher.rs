//! EventDispatcher: synchronous fan-out to registered handlers.

use std::sync::Arc;

use super::handler::ValidateEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ValidateEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handler: Arc<dyn ValidateEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// A panicking handler is logged and skipped; later handlers still run.
    fn emit<F: Fn(&dyn ValidateEventHandler)>(&self, event: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event, "event handler panicked");
            }
        }
    }

    pub fn emit_monitor_created(&self, event: &MonitorCreatedEvent) {
        self.emit("monitor_created", |h| h.on_monitor_created(event));
    }

    pub fn emit_monitor_disposed(&self, event: &MonitorDisposedEvent) {
        self.emit("monitor_disposed", |h| h.on_monitor_disposed(event));
    }

    pub fn emit_override_attached(&self, event: &OverrideAttachedEvent) {
        self.emit("override_attached", |h| h.on_override_attached(event));
    }

    pub fn emit_plugin_loaded(&self, event: &PluginLoadedEvent) {
        self.emit("plugin_loaded", |h| h.on_plugin_loaded(event));
    }

    pub fn emit_report(&self, event: &ReportRaisedEvent) {
        self.emit("report", |h| h.on_report(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
