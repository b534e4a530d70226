//! ValidateEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Observer of engine lifecycle events.
///
/// Handlers are invoked synchronously on the thread that produced the
/// event. A handler must not register override rules from
/// `on_override_attached`: the registry is locked for the whole attach pass.
pub trait ValidateEventHandler: Send + Sync {
    // ---- Monitors ----
    fn on_monitor_created(&self, _event: &MonitorCreatedEvent) {}
    fn on_monitor_disposed(&self, _event: &MonitorDisposedEvent) {}

    // ---- Overrides ----
    fn on_override_attached(&self, _event: &OverrideAttachedEvent) {}
    fn on_plugin_loaded(&self, _event: &PluginLoadedEvent) {}

    // ---- Reports ----
    fn on_report(&self, _event: &ReportRaisedEvent) {}
}
