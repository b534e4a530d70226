//! Property tests for fatal-policy parsing and report formatting.

use proptest::prelude::*;

use vigil_engine::issues::{Area, IssueId, Severity};
use vigil_engine::report::{format_timestamp, FatalPolicy};

fn flag() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("fatal_issues"),
        Just("fatal_warnings"),
        Just("fatal_criticals"),
        Just("FATAL_WARNINGS"),
        Just("bogus"),
    ]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(","), Just(":"), Just(";"), Just(" "), Just(" , ")]
}

proptest! {
    #[test]
    fn prop_policy_matches_flags(flags in prop::collection::vec((flag(), separator()), 0..6)) {
        let spec: String = flags.iter().map(|(f, s)| format!("{f}{s}")).collect();
        let policy = FatalPolicy::parse(&spec);

        let has = |name: &str| flags.iter().any(|(f, _)| f.eq_ignore_ascii_case(name));
        prop_assert_eq!(policy.is_fatal(Severity::Issue), has("fatal_issues"));
        prop_assert_eq!(policy.is_fatal(Severity::Warning), has("fatal_warnings"));
        prop_assert_eq!(policy.is_fatal(Severity::Critical), has("fatal_criticals"));
        prop_assert!(!policy.is_fatal(Severity::Ignore));
    }

    #[test]
    fn prop_timestamp_shape(nanos in 0u64..(100 * 3600 * 1_000_000_000)) {
        let text = format_timestamp(std::time::Duration::from_nanos(nanos));
        let (clock, fraction) = text.split_once('.').unwrap();
        prop_assert_eq!(fraction.len(), 9);
        prop_assert_eq!(clock.split(':').count(), 3);
        prop_assert_eq!(fraction.parse::<u64>().unwrap(), nanos % 1_000_000_000);
    }

    #[test]
    fn prop_issue_id_keeps_area_and_code(area in prop::sample::select(Area::ALL.to_vec()), code in any::<u16>()) {
        let id = IssueId::new(area, code);
        prop_assert_eq!(id.area(), Some(area));
        prop_assert_eq!(id.code(), code);
    }
}
