// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::announce;
use crate::display::Display;
use crate::event::{Event, EventKind};
use crate::hub::Node;
use std::sync::Arc;

/// Boosts the subs on a drop
pub struct SoundRack {
    name: String,
    display: Arc<dyn Display>,
}

impl SoundRack {
    pub fn new(name: impl Into<String>, display: Arc<dyn Display>) -> Self {
        Self {
            name: name.into(),
            display,
        }
    }
}

impl Node for SoundRack {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &Event) {
        if *event.kind() == EventKind::Drop {
            announce(
                self.display.as_ref(),
                format!("[Sound:{}] sub-bass boost!", self.name),
            );
        }
    }
}
