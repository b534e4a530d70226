//! Shared fixtures: an in-memory graph and recording overrides/handlers.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use vigil_engine::events::{
    MonitorCreatedEvent, MonitorDisposedEvent, OverrideAttachedEvent, PluginLoadedEvent,
    ReportRaisedEvent, ValidateEventHandler,
};
use vigil_engine::monitor::{GraphObject, Monitor, ObjectId, ObjectKind, TypeHierarchy, TypeTag};
use vigil_engine::overrides::Override;
use vigil_engine::report::{AbortHandler, Report};

/// In-memory graph object.
pub struct FakeObject {
    id: ObjectId,
    name: String,
    kind: ObjectKind,
    types: Vec<String>,
    class_label: Option<String>,
    children: Vec<Arc<dyn GraphObject>>,
    points: Vec<Arc<dyn GraphObject>>,
}

impl FakeObject {
    fn new(id: u64, name: &str, kind: ObjectKind) -> Self {
        Self {
            id: ObjectId(id),
            name: name.to_string(),
            kind,
            types: Vec::new(),
            class_label: None,
            children: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn leaf(id: u64, name: &str) -> Self {
        Self::new(id, name, ObjectKind::Leaf).with_types(&["Element"])
    }

    pub fn container(id: u64, name: &str) -> Self {
        Self::new(id, name, ObjectKind::Container).with_types(&["Bin", "Element"])
    }

    pub fn point(id: u64, name: &str) -> Self {
        Self::new(id, name, ObjectKind::ConnectionPoint).with_types(&["Pad"])
    }

    pub fn other(id: u64, name: &str) -> Self {
        Self::new(id, name, ObjectKind::Other)
    }

    /// Most-derived first.
    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_class_label(mut self, label: &str) -> Self {
        self.class_label = Some(label.to_string());
        self
    }

    pub fn with_child(mut self, child: Arc<dyn GraphObject>) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_point(mut self, point: Arc<dyn GraphObject>) -> Self {
        self.points.push(point);
        self
    }

    pub fn into_arc(self) -> Arc<dyn GraphObject> {
        Arc::new(self)
    }
}

impl GraphObject for FakeObject {
    fn object_id(&self) -> ObjectId {
        self.id
    }

    fn name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn type_hierarchy(&self) -> TypeHierarchy {
        self.types.iter().map(TypeTag::new).collect()
    }

    fn class_label(&self) -> Option<String> {
        self.class_label.clone()
    }

    fn children(&self) -> Vec<Arc<dyn GraphObject>> {
        self.children.clone()
    }

    fn connection_points(&self) -> Vec<Arc<dyn GraphObject>> {
        self.points.clone()
    }
}

/// Counts hook invocations.
#[derive(Default)]
pub struct CountingOverride {
    name: String,
    pub connection_points: AtomicUsize,
    pub containers: AtomicUsize,
    pub leaves: AtomicUsize,
    pub intercepted: AtomicUsize,
}

impl CountingOverride {
    pub fn new(name: &str) -> Arc<Self> {
        Arc::new(Self {
            name: name.to_string(),
            ..Default::default()
        })
    }

    pub fn attaches(&self) -> usize {
        self.connection_points.load(Ordering::SeqCst)
            + self.containers.load(Ordering::SeqCst)
            + self.leaves.load(Ordering::SeqCst)
    }
}

impl Override for CountingOverride {
    fn name(&self) -> &str {
        &self.name
    }

    fn attach_connection_point(&self, _monitor: &Monitor) {
        self.connection_points.fetch_add(1, Ordering::SeqCst);
    }

    fn attach_container(&self, _monitor: &Monitor) {
        self.containers.fetch_add(1, Ordering::SeqCst);
    }

    fn attach_leaf(&self, _monitor: &Monitor) {
        self.leaves.fetch_add(1, Ordering::SeqCst);
    }

    fn intercept_report(&self, _monitor: &Monitor, _report: &mut Report) {
        self.intercepted.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records every event as a short string.
#[derive(Default)]
pub struct RecordingHandler {
    pub events: Mutex<Vec<String>>,
}

impl RecordingHandler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.events.lock().unwrap())
    }
}

impl ValidateEventHandler for RecordingHandler {
    fn on_monitor_created(&self, event: &MonitorCreatedEvent) {
        self.push(format!("created {} {}", event.kind, event.name));
    }

    fn on_monitor_disposed(&self, event: &MonitorDisposedEvent) {
        self.push(format!("disposed {}", event.name));
    }

    fn on_override_attached(&self, event: &OverrideAttachedEvent) {
        self.push(format!("attached {} {}", event.override_name, event.monitor));
    }

    fn on_plugin_loaded(&self, event: &PluginLoadedEvent) {
        self.push(format!("plugin {} {}", event.path, event.overrides));
    }

    fn on_report(&self, event: &ReportRaisedEvent) {
        self.push(format!("report {}", event.report.issue_id()));
    }
}

/// Abort handler that panics instead of terminating the test process.
pub struct PanicAbort;

impl AbortHandler for PanicAbort {
    fn abort(&self, report: &Report) -> ! {
        panic!("fatal report: {report}");
    }
}
