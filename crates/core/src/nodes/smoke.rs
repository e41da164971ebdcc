// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::announce;
use crate::display::Display;
use crate::event::{Event, EventKind};
use crate::hub::Node;
use std::sync::Arc;

/// Pumps smoke on `SMOKE_NOW`; the payload carries the level
pub struct SmokeMachine {
    name: String,
    display: Arc<dyn Display>,
}

impl SmokeMachine {
    pub fn new(name: impl Into<String>, display: Arc<dyn Display>) -> Self {
        Self {
            name: name.into(),
            display,
        }
    }
}

impl Node for SmokeMachine {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &Event) {
        if *event.kind() == EventKind::SmokeNow {
            announce(
                self.display.as_ref(),
                format!("[Smoke:{}] pumping smoke: {}", self.name, event.payload()),
            );
        }
    }
}
