//! Override registry: rules keyed by object name, type, or class label.

use std::ffi::c_void;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::monitor::{Monitor, TypeTag};

use super::behavior::Override;

struct NameRule {
    name: String,
    ov: Arc<dyn Override>,
}

struct TypeRule {
    tag: TypeTag,
    ov: Arc<dyn Override>,
}

struct ClassLabelRule {
    label: String,
    ov: Arc<dyn Override>,
}

#[derive(Default)]
struct RuleSets {
    by_name: Vec<NameRule>,
    by_type: Vec<TypeRule>,
    by_class_label: Vec<ClassLabelRule>,
}

/// Number of registered rules per matching strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleCounts {
    pub by_name: usize,
    pub by_type: usize,
    pub by_class_label: usize,
}

impl RuleCounts {
    pub fn total(&self) -> usize {
        self.by_name + self.by_type + self.by_class_label
    }
}

/// Ordered rule sets, one per matching strategy.
///
/// Rules only affect monitors created after registration. The same override
/// may be registered under several rules and is then attached once per
/// matching rule.
#[derive(Default)]
pub struct OverrideRegistry {
    rules: Mutex<RuleSets>,
}

impl OverrideRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RuleSets> {
        self.rules.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Matches monitors whose object name equals `name` exactly.
    pub fn register_by_name(&self, name: impl Into<String>, ov: Arc<dyn Override>) {
        let name = name.into();
        tracing::debug!(rule = %name, override_name = ov.name(), "override registered by name");
        self.lock().by_name.push(NameRule { name, ov });
    }

    /// Matches monitors whose object is an instance of `tag`.
    pub fn register_by_type(&self, tag: impl Into<TypeTag>, ov: Arc<dyn Override>) {
        let tag = tag.into();
        tracing::debug!(rule = %tag, override_name = ov.name(), "override registered by type");
        self.lock().by_type.push(TypeRule { tag, ov });
    }

    /// Matches monitors whose object's class label contains `label`.
    pub fn register_by_class_label(&self, label: impl Into<String>, ov: Arc<dyn Override>) {
        let label = label.into();
        tracing::debug!(rule = %label, override_name = ov.name(), "override registered by class label");
        self.lock().by_class_label.push(ClassLabelRule { label, ov });
    }

    pub fn rule_counts(&self) -> RuleCounts {
        let rules = self.lock();
        RuleCounts {
            by_name: rules.by_name.len(),
            by_type: rules.by_type.len(),
            by_class_label: rules.by_class_label.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rule_counts().total() == 0
    }

    /// Attach every matching override to `monitor`: name rules first, then
    /// type rules, then class-label rules, each in registration order.
    /// Holds the registry lock for the whole pass. Returns how many
    /// attachments were made.
    pub fn attach_overrides(&self, monitor: &Monitor) -> usize {
        let rules = self.lock();
        let mut attached = 0;

        for rule in &rules.by_name {
            if monitor.target_name() == rule.name {
                monitor.attach_override(Arc::clone(&rule.ov));
                attached += 1;
            }
        }

        // Type and class-label rules need the live object.
        let Some(target) = monitor.target() else {
            return attached;
        };

        for rule in &rules.by_type {
            if target.is_instance_of(&rule.tag) {
                monitor.attach_override(Arc::clone(&rule.ov));
                attached += 1;
            }
        }

        if let Some(class_label) = target.class_label() {
            for rule in &rules.by_class_label {
                if class_label.contains(rule.label.as_str()) {
                    monitor.attach_override(Arc::clone(&rule.ov));
                    attached += 1;
                }
            }
        }

        attached
    }

    /// Opaque handle passed to plugin entry points.
    pub fn as_plugin_handle(&self) -> *const c_void {
        (self as *const Self).cast()
    }

    /// Recover the registry behind a plugin handle.
    ///
    /// # Safety
    ///
    /// `handle` must be null or come from [`OverrideRegistry::as_plugin_handle`]
    /// on a registry that outlives `'a`.
    pub unsafe fn from_plugin_handle<'a>(handle: *const c_void) -> Option<&'a OverrideRegistry> {
        // SAFETY: upheld by the caller.
        unsafe { handle.cast::<OverrideRegistry>().as_ref() }
    }
}

impl std::fmt::Debug for OverrideRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OverrideRegistry")
            .field("rules", &self.rule_counts())
            .finish()
    }
}
