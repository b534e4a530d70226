//! Event payloads emitted by the validation engine.

use crate::monitor::ObjectId;
use crate::report::SharedReport;

/// Payload for `on_monitor_created`, emitted after the attach pass.
#[derive(Debug, Clone)]
pub struct MonitorCreatedEvent {
    pub object_id: ObjectId,
    pub name: String,
    pub kind: &'static str,
    pub overrides: usize,
}

/// Payload for `on_monitor_disposed`.
#[derive(Debug, Clone)]
pub struct MonitorDisposedEvent {
    pub object_id: ObjectId,
    pub name: String,
}

/// Payload for `on_override_attached`.
#[derive(Debug, Clone)]
pub struct OverrideAttachedEvent {
    pub monitor: String,
    pub override_name: String,
}

/// Payload for `on_report`. Only reports that survived de-duplication.
#[derive(Debug, Clone)]
pub struct ReportRaisedEvent {
    pub report: SharedReport,
}

/// Payload for `on_plugin_loaded`, emitted for plugins whose entry point
/// registered at least one override.
#[derive(Debug, Clone)]
pub struct PluginLoadedEvent {
    pub path: String,
    pub overrides: usize,
}
