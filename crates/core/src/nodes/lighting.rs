// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::announce;
use crate::display::Display;
use crate::event::{Event, EventKind};
use crate::hub::Node;
use std::sync::Arc;

/// Preset used on a chorus unless the rig is given another one
pub const DEFAULT_CHORUS_PRESET: &str = "WIDE-BRIGHT";

/// Reacts to chorus, drop and talk
pub struct LightingRig {
    name: String,
    display: Arc<dyn Display>,
    chorus_preset: String,
}

impl LightingRig {
    pub fn new(name: impl Into<String>, display: Arc<dyn Display>) -> Self {
        Self {
            name: name.into(),
            display,
            chorus_preset: DEFAULT_CHORUS_PRESET.to_string(),
        }
    }

    pub fn with_chorus_preset(mut self, preset: impl Into<String>) -> Self {
        self.chorus_preset = preset.into();
        self
    }

    pub fn chorus_preset(&self) -> &str {
        &self.chorus_preset
    }
}

impl Node for LightingRig {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &Event) {
        let action = match event.kind() {
            EventKind::Chorus => format!("switching to preset: {}", self.chorus_preset),
            EventKind::Drop => "strobe ON!".to_string(),
            EventKind::Talk => "warm spotlight".to_string(),
            _ => return,
        };
        announce(
            self.display.as_ref(),
            format!("[Lights:{}] {}", self.name, action),
        );
    }
}
