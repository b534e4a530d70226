//! The fixed set of issue kinds every catalog starts with.

use super::issue::{Issue, IssueId};
use super::severity::{Area, Severity};

pub const BUFFER_BEFORE_SEGMENT: IssueId = IssueId::new(Area::Buffer, 1);
pub const BUFFER_IS_OUT_OF_SEGMENT: IssueId = IssueId::new(Area::Buffer, 2);
pub const BUFFER_TIMESTAMP_OUT_OF_RECEIVED_RANGE: IssueId = IssueId::new(Area::Buffer, 3);
pub const FIRST_BUFFER_RUNNING_TIME_IS_NOT_ZERO: IssueId = IssueId::new(Area::Buffer, 4);
pub const WRONG_FLOW_RETURN: IssueId = IssueId::new(Area::Buffer, 5);

pub const CAPS_IS_MISSING_FIELD: IssueId = IssueId::new(Area::Caps, 1);
pub const CAPS_FIELD_HAS_BAD_TYPE: IssueId = IssueId::new(Area::Caps, 2);
pub const CAPS_EXPECTED_FIELD_NOT_FOUND: IssueId = IssueId::new(Area::Caps, 3);
pub const GET_CAPS_NOT_PROXYING_FIELDS: IssueId = IssueId::new(Area::Caps, 4);
pub const CAPS_FIELD_UNEXPECTED_VALUE: IssueId = IssueId::new(Area::Caps, 5);

pub const EVENT_NEWSEGMENT_NOT_PUSHED: IssueId = IssueId::new(Area::Event, 1);
pub const SERIALIZED_EVENT_WASNT_PUSHED_IN_TIME: IssueId = IssueId::new(Area::Event, 2);
pub const EVENT_HAS_WRONG_SEQNUM: IssueId = IssueId::new(Area::Event, 3);
pub const EVENT_SERIALIZED_OUT_OF_ORDER: IssueId = IssueId::new(Area::Event, 4);
pub const EVENT_NEW_SEGMENT_MISMATCH: IssueId = IssueId::new(Area::Event, 5);
pub const EVENT_FLUSH_START_UNEXPECTED: IssueId = IssueId::new(Area::Event, 6);
pub const EVENT_FLUSH_STOP_UNEXPECTED: IssueId = IssueId::new(Area::Event, 7);

pub const EVENT_SEEK_NOT_HANDLED: IssueId = IssueId::new(Area::Seek, 1);
pub const EVENT_SEEK_RESULT_POSITION_WRONG: IssueId = IssueId::new(Area::Seek, 2);

pub const STATE_CHANGE_FAILURE: IssueId = IssueId::new(Area::State, 1);

pub const FILE_SIZE_IS_ZERO: IssueId = IssueId::new(Area::FileCheck, 1);
pub const FILE_SIZE_INCORRECT: IssueId = IssueId::new(Area::FileCheck, 2);
pub const FILE_DURATION_INCORRECT: IssueId = IssueId::new(Area::FileCheck, 3);
pub const FILE_SEEKABLE_INCORRECT: IssueId = IssueId::new(Area::FileCheck, 4);
pub const FILE_PROFILE_INCORRECT: IssueId = IssueId::new(Area::FileCheck, 5);
pub const FILE_NOT_FOUND: IssueId = IssueId::new(Area::FileCheck, 6);
pub const FILE_CHECK_FAILURE: IssueId = IssueId::new(Area::FileCheck, 7);
pub const FILE_PLAYBACK_START_FAILURE: IssueId = IssueId::new(Area::FileCheck, 8);
pub const FILE_PLAYBACK_ERROR: IssueId = IssueId::new(Area::FileCheck, 9);

pub const ALLOCATION_FAILURE: IssueId = IssueId::new(Area::RunError, 1);
pub const MISSING_PLUGIN: IssueId = IssueId::new(Area::RunError, 2);

/// (area, code, summary, description, default severity)
type BuiltinEntry = (Area, u16, &'static str, Option<&'static str>, Severity);

const BUILTIN: &[BuiltinEntry] = &[
    (
        Area::Buffer,
        1,
        "buffer was received before a segment",
        Some("in push mode, a segment event must be received before a buffer"),
        Severity::Warning,
    ),
    (
        Area::Buffer,
        2,
        "buffer is out of the segment range",
        Some(
            "buffer being pushed is out of the current segment's start-stop range, \
             so it will be discarded downstream without any use",
        ),
        Severity::Issue,
    ),
    (
        Area::Buffer,
        3,
        "buffer timestamp is out of the received buffer timestamps' range",
        Some(
            "a buffer leaving an element should have its timestamps in the range of \
             the received buffers timestamps; an element that received 0s to 10s \
             can't push a buffer with an 11s timestamp",
        ),
        Severity::Warning,
    ),
    (
        Area::Buffer,
        4,
        "first buffer's running time isn't 0",
        Some("the first buffer's received running time is expected to be 0"),
        Severity::Warning,
    ),
    (
        Area::Buffer,
        5,
        "flow return from pad push doesn't match expected value",
        Some(
            "flow return from a 1:1 sink/src element is what downstream returned; \
             elements with multiple src pads must combine flow returns properly",
        ),
        Severity::Critical,
    ),
    (
        Area::Caps,
        1,
        "caps is missing a required field for its type",
        Some(
            "some caps types are expected to contain a set of basic fields, e.g. raw \
             video should have 'width', 'height', 'framerate' and 'pixel-aspect-ratio'",
        ),
        Severity::Issue,
    ),
    (
        Area::Caps,
        2,
        "caps field has an unexpected type",
        Some("some common caps fields should always use the same expected types"),
        Severity::Warning,
    ),
    (
        Area::Caps,
        3,
        "caps expected field wasn't present",
        Some(
            "a field that should be present in the caps wasn't found; fields set on \
             sink pad caps should be propagated downstream when it makes sense",
        ),
        Severity::Warning,
    ),
    (
        Area::Caps,
        4,
        "getcaps function isn't proxying downstream fields correctly",
        Some(
            "elements should set downstream caps restrictions on their caps when \
             replying to upstream getcaps queries",
        ),
        Severity::Critical,
    ),
    (
        Area::Caps,
        5,
        "a field in caps has an unexpected value",
        Some("fields set on a sink pad should be propagated downstream via set caps"),
        Severity::Critical,
    ),
    (
        Area::Event,
        1,
        "new segment event wasn't propagated downstream",
        Some("segments received from upstream should be pushed downstream"),
        Severity::Warning,
    ),
    (
        Area::Event,
        2,
        "a serialized event received should be pushed in the same 'time' as it was received",
        Some(
            "serialized events should be pushed in the same order they are received \
             and serialized with buffers",
        ),
        Severity::Warning,
    ),
    (
        Area::Event,
        3,
        "events that are part of the same pipeline 'operation' should have the same seqnum",
        Some(
            "when events/messages are created from another event/message, they \
             should carry the original seqnum",
        ),
        Severity::Issue,
    ),
    (
        Area::Event,
        4,
        "a serialized event received should be pushed in the same order as it was received",
        Some("serialized events should be pushed in the same order they are received"),
        Severity::Warning,
    ),
    (
        Area::Event,
        5,
        "a new segment event has different value than the received one",
        Some("when receiving a new segment, an element should push an equivalent segment downstream"),
        Severity::Warning,
    ),
    (
        Area::Event,
        6,
        "received an unexpected flush start event",
        None,
        Severity::Warning,
    ),
    (
        Area::Event,
        7,
        "received an unexpected flush stop event",
        None,
        Severity::Warning,
    ),
    (Area::Seek, 1, "seek event wasn't handled", None, Severity::Critical),
    (Area::Seek, 2, "position after a seek is wrong", None, Severity::Critical),
    (Area::State, 1, "state change failed", None, Severity::Critical),
    (Area::FileCheck, 1, "resulting file size is 0", None, Severity::Critical),
    (
        Area::FileCheck,
        2,
        "resulting file size wasn't within the expected values",
        None,
        Severity::Warning,
    ),
    (
        Area::FileCheck,
        3,
        "resulting file duration wasn't within the expected values",
        None,
        Severity::Warning,
    ),
    (
        Area::FileCheck,
        4,
        "resulting file wasn't seekable or not seekable as expected",
        None,
        Severity::Warning,
    ),
    (
        Area::FileCheck,
        5,
        "resulting file stream profiles didn't match expected values",
        None,
        Severity::Critical,
    ),
    (
        Area::FileCheck,
        6,
        "resulting file could not be found for testing",
        None,
        Severity::Critical,
    ),
    (
        Area::FileCheck,
        7,
        "an error occurred while checking the file for conformance",
        None,
        Severity::Critical,
    ),
    (
        Area::FileCheck,
        8,
        "an error occurred while starting playback of the test file",
        None,
        Severity::Critical,
    ),
    (
        Area::FileCheck,
        9,
        "an error during playback of the file",
        None,
        Severity::Critical,
    ),
    (
        Area::RunError,
        1,
        "a memory allocation failed during the validation run",
        None,
        Severity::Critical,
    ),
    (
        Area::RunError,
        2,
        "a plugin is missing and prevented the validation run",
        None,
        Severity::Critical,
    ),
];

/// Builds every built-in issue, in registration order.
pub fn builtin_issues() -> impl Iterator<Item = Issue> {
    BUILTIN
        .iter()
        .map(|&(area, code, summary, description, level)| {
            Issue::new(area, code, summary, description.map(str::to_string), level)
        })
}
