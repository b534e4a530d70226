//! Monitor tree mirroring the host graph.

pub mod factory;
pub mod graph;
pub mod monitor;

pub use factory::create_monitor;
pub use graph::{GraphObject, ObjectId, ObjectKind, TypeHierarchy, TypeTag};
pub use monitor::{ConnectionPointMonitor, ContainerMonitor, LeafNodeMonitor, Monitor, MonitorKind};
