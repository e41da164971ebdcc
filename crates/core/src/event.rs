// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event types exchanged between nodes on the hub

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when an event kind name cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event kind must not be empty")]
pub struct EmptyKindError;

/// The kind of a stage event
///
/// The four built-in kinds have fixed wire names (`CHORUS`, `DROP`, `TALK`,
/// `SMOKE_NOW`). Anything else is carried as [`EventKind::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum EventKind {
    Chorus,
    Drop,
    Talk,
    SmokeNow,
    Custom(String),
}

impl EventKind {
    pub fn as_str(&self) -> &str {
        match self {
            EventKind::Chorus => "CHORUS",
            EventKind::Drop => "DROP",
            EventKind::Talk => "TALK",
            EventKind::SmokeNow => "SMOKE_NOW",
            EventKind::Custom(name) => name,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = EmptyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(EmptyKindError),
            "CHORUS" => Ok(EventKind::Chorus),
            "DROP" => Ok(EventKind::Drop),
            "TALK" => Ok(EventKind::Talk),
            "SMOKE_NOW" => Ok(EventKind::SmokeNow),
            other => Ok(EventKind::Custom(other.to_string())),
        }
    }
}

impl TryFrom<String> for EventKind {
    type Error = EmptyKindError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EventKind> for String {
    fn from(kind: EventKind) -> Self {
        match kind {
            EventKind::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// An immutable message routed through the hub
///
/// `dispatched_at` is owned by the hub: whatever the caller puts there is
/// replaced at the moment of dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    kind: EventKind,
    origin: String,
    payload: String,
    dispatched_at: Option<DateTime<Utc>>,
}

impl Event {
    pub fn new(kind: EventKind, origin: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            payload: payload.into(),
            dispatched_at: None,
        }
    }

    /// An event with no origin, as sent by the hub operator
    pub fn unattributed(kind: EventKind, payload: impl Into<String>) -> Self {
        Self::new(kind, "", payload)
    }

    /// Pre-set a dispatch timestamp. The hub overwrites it on dispatch.
    pub fn with_dispatched_at(mut self, at: DateTime<Utc>) -> Self {
        self.dispatched_at = Some(at);
        self
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn dispatched_at(&self) -> Option<DateTime<Utc>> {
        self.dispatched_at
    }

    pub(crate) fn stamped(mut self, at: DateTime<Utc>) -> Self {
        self.dispatched_at = Some(at);
        self
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
