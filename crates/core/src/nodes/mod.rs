// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Stage participants
//!
//! `Artist` originates events through the hub it is bound to. The rig
//! reactors (`LightingRig`, `SmokeMachine`, `SoundRack`) react to the kinds
//! they care about by drawing a line on their display and ignore the rest.
//! `RecordingNode` keeps every event it receives.

mod artist;
mod lighting;
mod recorder;
mod smoke;
mod sound;

pub use artist::Artist;
pub use lighting::{LightingRig, DEFAULT_CHORUS_PRESET};
pub use recorder::RecordingNode;
pub use smoke::SmokeMachine;
pub use sound::SoundRack;

use crate::display::Display;

/// Draw a reaction line; a failing display never fails the delivery
fn announce(screen: &dyn Display, line: String) {
    if let Err(e) = screen.draw(&line) {
        tracing::warn!(display = %screen.name(), error = %e, "failed to draw reaction");
    }
}
