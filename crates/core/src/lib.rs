// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! showhub-core: event hub and stage nodes for live show control
//!
//! This crate provides:
//! - `EventHub`, a mediator that broadcasts and unicasts events between nodes
//! - Stage nodes (artist, lighting, smoke, sound) that react to events
//! - Displays and visuals for screens
//! - A validated cue builder and a TOML show format

pub mod clock;
pub mod cue;
pub mod display;
pub mod event;
pub mod hub;
pub mod nodes;
pub mod show;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use cue::{CueBuilder, CueError, ShowCue};
pub use event::{Event, EventKind};
pub use hub::{EventHub, HubConfig, HubError, HubHandle, Node};
pub use show::{Show, ShowConfig, ShowError, Step, StepOutcome};
