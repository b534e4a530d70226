//! Host graph objects as seen by the engine.
//!
//! The host runtime owns every graph object; monitors only keep weak
//! references to them.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Host-assigned identity of a graph object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Structural kind of a graph object. The first three are mutually
/// exclusive; `Other` objects cannot be instrumented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    ConnectionPoint,
    Container,
    Leaf,
    Other,
}

/// One entry in a type hierarchy, e.g. `"VideoDecoder"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeTag(String);

impl TypeTag {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TypeTag {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Type chain of an object, most-derived first. Usually short.
pub type TypeHierarchy = SmallVec<[TypeTag; 4]>;

/// Accessors the host runtime provides for each graph object.
pub trait GraphObject: Send + Sync {
    fn object_id(&self) -> ObjectId;

    fn name(&self) -> String;

    fn kind(&self) -> ObjectKind;

    /// Every type the object is an instance of, most-derived first.
    fn type_hierarchy(&self) -> TypeHierarchy;

    /// Slash-separated class label such as `"Codec/Decoder/Video"`.
    fn class_label(&self) -> Option<String> {
        None
    }

    /// Children currently inside a container.
    fn children(&self) -> Vec<Arc<dyn GraphObject>> {
        Vec::new()
    }

    /// Connection points exposed by a leaf node or container.
    fn connection_points(&self) -> Vec<Arc<dyn GraphObject>> {
        Vec::new()
    }

    fn is_instance_of(&self, tag: &TypeTag) -> bool {
        self.type_hierarchy().iter().any(|t| t == tag)
    }
}
