//! Monitors: one observer per graph object, mirroring the graph topology.

use std::sync::{Arc, Mutex, PoisonError, Weak};

use rustc_hash::FxHashMap;

use super::graph::{GraphObject, ObjectId, ObjectKind};
use crate::context::ValidateContext;
use crate::events::types::{MonitorDisposedEvent, OverrideAttachedEvent};
use crate::issues::IssueId;
use crate::overrides::Override;
use crate::report::{Report, Reporter, ReporterState, SharedReport};

/// Monitors keyed by the identity of the object they observe.
#[derive(Debug, Default)]
pub(crate) struct ChildMonitors {
    inner: Mutex<FxHashMap<ObjectId, Arc<Monitor>>>,
}

impl ChildMonitors {
    fn lock(&self) -> std::sync::MutexGuard<'_, FxHashMap<ObjectId, Arc<Monitor>>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// A replaced monitor is dropped after the lock is released.
    pub(crate) fn insert(&self, monitor: Arc<Monitor>) {
        let replaced = self.lock().insert(monitor.object_id(), monitor);
        drop(replaced);
    }

    fn remove(&self, id: ObjectId) -> Option<Arc<Monitor>> {
        self.lock().remove(&id)
    }

    fn get(&self, id: ObjectId) -> Option<Arc<Monitor>> {
        self.lock().get(&id).cloned()
    }

    fn values(&self) -> Vec<Arc<Monitor>> {
        let mut monitors: Vec<_> = self.lock().values().cloned().collect();
        monitors.sort_by_key(|m| m.object_id());
        monitors
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    /// Drops every child outside the lock.
    fn clear(&self) {
        let drained: Vec<_> = self.lock().drain().map(|(_, m)| m).collect();
        drop(drained);
    }
}

#[derive(Debug, Default)]
pub struct ConnectionPointMonitor;

#[derive(Debug, Default)]
pub struct LeafNodeMonitor {
    pub(crate) connection_points: ChildMonitors,
}

#[derive(Debug, Default)]
pub struct ContainerMonitor {
    pub(crate) children: ChildMonitors,
    pub(crate) connection_points: ChildMonitors,
}

#[derive(Debug)]
pub enum MonitorKind {
    ConnectionPoint(ConnectionPointMonitor),
    Container(ContainerMonitor),
    Leaf(LeafNodeMonitor),
}

impl MonitorKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ConnectionPoint(_) => "connection-point",
            Self::Container(_) => "container",
            Self::Leaf(_) => "leaf",
        }
    }

    fn connection_points(&self) -> Option<&ChildMonitors> {
        match self {
            Self::ConnectionPoint(_) => None,
            Self::Container(c) => Some(&c.connection_points),
            Self::Leaf(l) => Some(&l.connection_points),
        }
    }
}

/// Observer attached to exactly one graph object.
pub struct Monitor {
    id: ObjectId,
    target_name: String,
    target: Weak<dyn GraphObject>,
    parent: Weak<Monitor>,
    ctx: Arc<ValidateContext>,
    reporter: ReporterState,
    overrides: Mutex<Vec<Arc<dyn Override>>>,
    kind: MonitorKind,
}

impl Monitor {
    pub(crate) fn new(
        target: &Arc<dyn GraphObject>,
        ctx: &Arc<ValidateContext>,
        parent: Option<&Arc<Monitor>>,
        kind: MonitorKind,
    ) -> Self {
        let target_name = target.name();
        // Connection points are named after their owner, `owner:point`.
        let reporter_name = match (&kind, parent) {
            (MonitorKind::ConnectionPoint(_), Some(parent)) => {
                format!("{}:{}", parent.target_name(), target_name)
            }
            _ => target_name.clone(),
        };
        Self {
            id: target.object_id(),
            target_name,
            target: Arc::downgrade(target),
            parent: parent.map(Arc::downgrade).unwrap_or_default(),
            ctx: Arc::clone(ctx),
            reporter: ReporterState::new(reporter_name),
            overrides: Mutex::new(Vec::new()),
            kind,
        }
    }

    pub fn object_id(&self) -> ObjectId {
        self.id
    }

    /// Reporter identity used in reports.
    pub fn name(&self) -> &str {
        self.reporter.name()
    }

    /// Name of the observed object at monitor creation.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// The observed object, if the host still holds it.
    pub fn target(&self) -> Option<Arc<dyn GraphObject>> {
        self.target.upgrade()
    }

    pub fn parent(&self) -> Option<Arc<Monitor>> {
        self.parent.upgrade()
    }

    pub fn kind(&self) -> &MonitorKind {
        &self.kind
    }

    pub fn context(&self) -> &Arc<ValidateContext> {
        &self.ctx
    }

    /// Attach an override and run its attach hook for this monitor's kind.
    pub fn attach_override(&self, ov: Arc<dyn Override>) {
        match &self.kind {
            MonitorKind::ConnectionPoint(_) => ov.attach_connection_point(self),
            MonitorKind::Container(_) => ov.attach_container(self),
            MonitorKind::Leaf(_) => ov.attach_leaf(self),
        }
        self.ctx.events().emit_override_attached(&OverrideAttachedEvent {
            monitor: self.name().to_string(),
            override_name: ov.name().to_string(),
        });
        self.lock_overrides().push(ov);
    }

    pub fn overrides(&self) -> Vec<Arc<dyn Override>> {
        self.lock_overrides().clone()
    }

    pub fn override_count(&self) -> usize {
        self.lock_overrides().len()
    }

    fn lock_overrides(&self) -> std::sync::MutexGuard<'_, Vec<Arc<dyn Override>>> {
        self.overrides.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raise a report attributed to this monitor.
    pub fn report(&self, issue_id: IssueId, message: impl Into<String>) -> Option<SharedReport> {
        self.ctx.report(self, issue_id, message)
    }

    /// Child monitors of a container, ordered by object id. Empty otherwise.
    pub fn children(&self) -> Vec<Arc<Monitor>> {
        match &self.kind {
            MonitorKind::Container(c) => c.children.values(),
            _ => Vec::new(),
        }
    }

    pub fn child(&self, id: ObjectId) -> Option<Arc<Monitor>> {
        match &self.kind {
            MonitorKind::Container(c) => c.children.get(id),
            _ => None,
        }
    }

    pub fn child_count(&self) -> usize {
        match &self.kind {
            MonitorKind::Container(c) => c.children.len(),
            _ => 0,
        }
    }

    pub fn connection_points(&self) -> Vec<Arc<Monitor>> {
        self.kind
            .connection_points()
            .map(ChildMonitors::values)
            .unwrap_or_default()
    }

    /// Host notification: `child` was added to the observed container.
    /// Returns the new child monitor; `None` when this is not a container
    /// or the child cannot be instrumented.
    pub fn on_child_added(self: &Arc<Self>, child: &Arc<dyn GraphObject>) -> Option<Arc<Monitor>> {
        let MonitorKind::Container(container) = &self.kind else {
            return None;
        };
        let monitor = super::factory::create_monitor(child, &self.ctx, Some(self))?;
        container.children.insert(Arc::clone(&monitor));
        Some(monitor)
    }

    /// Host notification: the child with `id` left the observed container.
    pub fn on_child_removed(&self, id: ObjectId) -> Option<Arc<Monitor>> {
        match &self.kind {
            MonitorKind::Container(c) => c.children.remove(id),
            _ => None,
        }
    }

    /// Host notification: a connection point appeared on the observed node.
    pub fn on_connection_point_added(
        self: &Arc<Self>,
        point: &Arc<dyn GraphObject>,
    ) -> Option<Arc<Monitor>> {
        let points = self.kind.connection_points()?;
        if point.kind() != ObjectKind::ConnectionPoint {
            tracing::debug!(
                monitor = self.name(),
                object = %point.object_id(),
                "ignoring connection point that is not a connection point"
            );
            return None;
        }
        let monitor = super::factory::create_monitor(point, &self.ctx, Some(self))?;
        points.insert(Arc::clone(&monitor));
        Some(monitor)
    }

    pub fn on_connection_point_removed(&self, id: ObjectId) -> Option<Arc<Monitor>> {
        self.kind.connection_points()?.remove(id)
    }
}

impl Reporter for Monitor {
    fn reporter_state(&self) -> &ReporterState {
        &self.reporter
    }

    fn intercept_report(&self, report: &mut Report) {
        for ov in self.overrides() {
            ov.intercept_report(self, report);
        }
    }
}

impl Drop for Monitor {
    fn drop(&mut self) {
        match &self.kind {
            MonitorKind::Container(c) => {
                c.children.clear();
                c.connection_points.clear();
            }
            MonitorKind::Leaf(l) => l.connection_points.clear(),
            MonitorKind::ConnectionPoint(_) => {}
        }
        self.ctx.events().emit_monitor_disposed(&MonitorDisposedEvent {
            object_id: self.id,
            name: self.reporter.name().to_string(),
        });
    }
}

impl std::fmt::Debug for Monitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Monitor")
            .field("id", &self.id)
            .field("name", &self.name())
            .field("kind", &self.kind.name())
            .field("overrides", &self.override_count())
            .finish_non_exhaustive()
    }
}
