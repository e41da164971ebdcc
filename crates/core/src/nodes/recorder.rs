// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording node for tests and taps
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::event::Event;
use crate::hub::{HubBinding, HubHandle, Node};
use std::sync::Mutex;

/// Keeps a copy of every event delivered to it
#[derive(Debug)]
pub struct RecordingNode {
    name: String,
    binding: HubBinding,
    received: Mutex<Vec<Event>>,
}

impl RecordingNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            binding: HubBinding::new(),
            received: Mutex::new(Vec::new()),
        }
    }

    /// Get all received events, in delivery order
    pub fn received(&self) -> Vec<Event> {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn count(&self) -> usize {
        self.received.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// The hub this node was registered with, if any
    pub fn hub(&self) -> Option<&HubHandle> {
        self.binding.handle()
    }
}

impl Node for RecordingNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, event: &Event) {
        self.received
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event.clone());
    }

    fn bind(&self, hub: HubHandle) {
        self.binding.bind(&self.name, hub);
    }
}
