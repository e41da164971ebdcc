// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The performer: originates events

use super::announce;
use crate::display::Display;
use crate::event::{Event, EventKind};
use crate::hub::{HubBinding, HubError, HubHandle, Node};
use std::sync::Arc;

pub struct Artist {
    name: String,
    display: Arc<dyn Display>,
    binding: HubBinding,
}

impl Artist {
    pub fn new(name: impl Into<String>, display: Arc<dyn Display>) -> Self {
        Self {
            name: name.into(),
            display,
            binding: HubBinding::new(),
        }
    }

    /// Broadcast an event from this artist to the rest of the stage.
    /// Returns the number of nodes reached.
    pub fn trigger(&self, kind: EventKind, payload: impl Into<String>) -> Result<usize, HubError> {
        let hub = self.binding.handle().ok_or_else(|| HubError::Unbound {
            node: self.name.clone(),
        })?;
        hub.emit(Event::new(kind, self.name.clone(), payload))
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_bound()
    }
}

impl Node for Artist {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &Event) {
        announce(
            self.display.as_ref(),
            format!(
                "[Artist:{}] received {} from {} ({})",
                self.name,
                event.kind(),
                event.origin(),
                event.payload()
            ),
        );
    }

    fn bind(&self, hub: HubHandle) {
        self.binding.bind(&self.name, hub);
    }
}
