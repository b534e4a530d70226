//! Monitor factory: builds the monitor for a graph object, recursively for
//! containers, then runs the override attach pass on it.

use std::sync::Arc;

use super::graph::{GraphObject, ObjectKind};
use super::monitor::{
    ConnectionPointMonitor, ContainerMonitor, LeafNodeMonitor, Monitor, MonitorKind,
};
use crate::context::ValidateContext;
use crate::events::types::MonitorCreatedEvent;

/// Create the monitor for `target`.
///
/// Containers get a child monitor per existing child, and leaf nodes and
/// containers get a monitor per connection point; every one of those runs
/// its own attach pass before the parent's. Returns `None` for objects of
/// [`ObjectKind::Other`], which are skipped without running an attach pass.
pub fn create_monitor(
    target: &Arc<dyn GraphObject>,
    ctx: &Arc<ValidateContext>,
    parent: Option<&Arc<Monitor>>,
) -> Option<Arc<Monitor>> {
    let kind = match target.kind() {
        ObjectKind::ConnectionPoint => {
            MonitorKind::ConnectionPoint(ConnectionPointMonitor::default())
        }
        ObjectKind::Container => MonitorKind::Container(ContainerMonitor::default()),
        ObjectKind::Leaf => MonitorKind::Leaf(LeafNodeMonitor::default()),
        ObjectKind::Other => {
            tracing::debug!(
                object = %target.object_id(),
                name = %target.name(),
                "object kind cannot be monitored"
            );
            return None;
        }
    };

    let monitor = Arc::new(Monitor::new(target, ctx, parent, kind));

    if !matches!(monitor.kind(), MonitorKind::ConnectionPoint(_)) {
        for point in target.connection_points() {
            monitor.on_connection_point_added(&point);
        }
    }
    if matches!(monitor.kind(), MonitorKind::Container(_)) {
        for child in target.children() {
            monitor.on_child_added(&child);
        }
    }

    let attached = ctx.registry().attach_overrides(&monitor);
    tracing::trace!(
        monitor = monitor.name(),
        kind = monitor.kind().name(),
        attached,
        "monitor created"
    );
    ctx.events().emit_monitor_created(&MonitorCreatedEvent {
        object_id: monitor.object_id(),
        name: monitor.name().to_string(),
        kind: monitor.kind().name(),
        overrides: monitor.override_count(),
    });
    Some(monitor)
}
