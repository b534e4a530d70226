//! Tests for override rule matching and attachment.

mod common;

use std::sync::atomic::Ordering;
use std::sync::Arc;

use common::{CountingOverride, FakeObject};
use vigil_engine::monitor::create_monitor;
use vigil_engine::overrides::{OverrideRegistry, RuleCounts};
use vigil_engine::ValidateContext;

fn decoder() -> FakeObject {
    FakeObject::leaf(1, "dec0")
        .with_types(&["VideoDecoder", "Decoder", "Element"])
        .with_class_label("Codec/Decoder/Video")
}

#[test]
fn test_one_rule_per_strategy_attaches_three() {
    let ctx = ValidateContext::new();
    let by_name = CountingOverride::new("by-name");
    let by_type = CountingOverride::new("by-type");
    let by_label = CountingOverride::new("by-label");
    ctx.registry().register_by_name("dec0", by_name.clone());
    ctx.registry().register_by_type("Decoder", by_type.clone());
    ctx.registry().register_by_class_label("Decoder", by_label.clone());

    let target = decoder().into_arc();
    let monitor = create_monitor(&target, &ctx, None).unwrap();

    let names: Vec<_> = monitor.overrides().iter().map(|o| o.name().to_string()).collect();
    assert_eq!(names, ["by-name", "by-type", "by-label"]);
    for ov in [&by_name, &by_type, &by_label] {
        assert_eq!(ov.leaves.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn test_non_matching_rules_attach_nothing() {
    let ctx = ValidateContext::new();
    let ov = CountingOverride::new("x");
    ctx.registry().register_by_name("dec1", ov.clone());
    ctx.registry().register_by_type("AudioDecoder", ov.clone());
    ctx.registry().register_by_class_label("Encoder", ov.clone());

    let target = decoder().into_arc();
    let monitor = create_monitor(&target, &ctx, None).unwrap();
    assert_eq!(monitor.override_count(), 0);
    assert_eq!(ov.attaches(), 0);
}

#[test]
fn test_class_label_matches_substring() {
    let ctx = ValidateContext::new();
    let ov = CountingOverride::new("video");
    ctx.registry().register_by_class_label("Decoder/Video", ov.clone());

    let target = decoder().into_arc();
    let monitor = create_monitor(&target, &ctx, None).unwrap();
    assert_eq!(monitor.override_count(), 1);
}

#[test]
fn test_type_rule_matches_ancestor() {
    let ctx = ValidateContext::new();
    let ov = CountingOverride::new("elements");
    ctx.registry().register_by_type("Element", ov.clone());

    let target = decoder().into_arc();
    let monitor = create_monitor(&target, &ctx, None).unwrap();
    assert_eq!(monitor.override_count(), 1);
}

#[test]
fn test_duplicate_rules_attach_twice() {
    let ctx = ValidateContext::new();
    let ov = CountingOverride::new("twice");
    ctx.registry().register_by_name("dec0", ov.clone());
    ctx.registry().register_by_name("dec0", ov.clone());

    let target = decoder().into_arc();
    let monitor = create_monitor(&target, &ctx, None).unwrap();
    assert_eq!(monitor.override_count(), 2);
    assert_eq!(ov.leaves.load(Ordering::SeqCst), 2);
}

#[test]
fn test_rules_are_not_retroactive() {
    let ctx = ValidateContext::new();
    let target = decoder().into_arc();
    let monitor = create_monitor(&target, &ctx, None).unwrap();

    let ov = CountingOverride::new("late");
    ctx.registry().register_by_name("dec0", ov.clone());
    assert_eq!(monitor.override_count(), 0);

    let again = create_monitor(&target, &ctx, None).unwrap();
    assert_eq!(again.override_count(), 1);
}

#[test]
fn test_rule_counts() {
    let registry = OverrideRegistry::new();
    assert!(registry.is_empty());
    let ov = CountingOverride::new("x");
    registry.register_by_name("a", ov.clone());
    registry.register_by_type("T", ov.clone());
    registry.register_by_type("U", ov.clone());
    assert_eq!(
        registry.rule_counts(),
        RuleCounts {
            by_name: 1,
            by_type: 2,
            by_class_label: 0,
        }
    );
    assert_eq!(registry.rule_counts().total(), 3);
}

#[test]
fn test_plugin_handle_roundtrip() {
    let registry = OverrideRegistry::new();
    let handle = registry.as_plugin_handle();
    let back = unsafe { OverrideRegistry::from_plugin_handle(handle) }.unwrap();
    assert!(std::ptr::eq(back, &registry));
    assert!(unsafe { OverrideRegistry::from_plugin_handle(std::ptr::null()) }.is_none());
}

#[test]
fn test_shared_registry_between_contexts() {
    let registry = Arc::new(OverrideRegistry::new());
    let ov = CountingOverride::new("shared");
    registry.register_by_name("dec0", ov.clone());
    let ctx = ValidateContext::builder().registry(Arc::clone(&registry)).build();

    let target = decoder().into_arc();
    create_monitor(&target, &ctx, None).unwrap();
    assert_eq!(ov.attaches(), 1);
}
