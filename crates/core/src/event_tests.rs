// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use yare::parameterized;

#[parameterized(
    chorus = { "CHORUS", EventKind::Chorus },
    drop = { "DROP", EventKind::Drop },
    talk = { "TALK", EventKind::Talk },
    smoke_now = { "SMOKE_NOW", EventKind::SmokeNow },
    custom = { "ENCORE", EventKind::Custom("ENCORE".to_string()) },
    trimmed = { "  DROP ", EventKind::Drop },
)]
fn kind_parses_wire_names(name: &str, expected: EventKind) {
    assert_eq!(name.parse::<EventKind>().unwrap(), expected);
}

#[test]
fn empty_kind_is_rejected() {
    assert_eq!("".parse::<EventKind>(), Err(EmptyKindError));
    assert_eq!("   ".parse::<EventKind>(), Err(EmptyKindError));
}

#[test]
fn kind_display_matches_wire_name() {
    assert_eq!(EventKind::SmokeNow.to_string(), "SMOKE_NOW");
    assert_eq!(EventKind::Custom("ENCORE".to_string()).to_string(), "ENCORE");
}

#[test]
fn new_event_is_not_dispatched() {
    let event = Event::new(EventKind::Chorus, "MC", "go");
    assert_eq!(event.kind(), &EventKind::Chorus);
    assert_eq!(event.origin(), "MC");
    assert_eq!(event.payload(), "go");
    assert_eq!(event.dispatched_at(), None);
}

#[test]
fn unattributed_event_has_empty_origin() {
    let event = Event::unattributed(EventKind::SmokeNow, "35%");
    assert_eq!(event.origin(), "");
}

#[test]
fn stamping_replaces_caller_timestamp() {
    let early = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
    let event = Event::new(EventKind::Talk, "MC", "hi").with_dispatched_at(early);
    assert_eq!(event.stamped(late).dispatched_at(), Some(late));
}

#[test]
fn event_serializes_kind_as_wire_name() {
    let event = Event::new(EventKind::SmokeNow, "HUB", "35%");
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["kind"], "SMOKE_NOW");
    assert_eq!(json["payload"], "35%");

    let parsed: Event = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, event);
}

#[test]
fn empty_kind_fails_to_deserialize() {
    let json = r#"{"kind":"","origin":"MC","payload":"","dispatched_at":null}"#;
    assert!(serde_json::from_str::<Event>(json).is_err());
}
