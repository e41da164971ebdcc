// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event hub for routing events between registered nodes

use super::config::{DuplicatePolicy, HubConfig};
use super::error::HubError;
use super::node::{Dispatch, HubHandle, Node};
use crate::clock::{Clock, SystemClock};
use crate::event::Event;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock, Weak};
use std::thread::{self, ThreadId};

/// The hub owns the name → node registry and dispatches events
///
/// Dispatch is synchronous: `emit` and `send` return once every recipient's
/// `receive` has returned. Recipients of a broadcast are reached in no
/// particular order.
pub struct EventHub<C: Clock = SystemClock> {
    inner: Arc<HubInner<C>>,
}

struct HubInner<C: Clock> {
    me: Weak<HubInner<C>>,
    nodes: RwLock<HashMap<String, Arc<dyn Node>>>,
    config: HubConfig,
    clock: C,
    /// Dispatches currently on each thread's stack
    depth: Mutex<HashMap<ThreadId, usize>>,
}

impl EventHub<SystemClock> {
    pub fn new() -> Self {
        Self::with_config(HubConfig::default())
    }

    pub fn with_config(config: HubConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> EventHub<C> {
    pub fn with_clock(config: HubConfig, clock: C) -> Self {
        let inner = Arc::new_cyclic(|me| HubInner {
            me: me.clone(),
            nodes: RwLock::new(HashMap::new()),
            config,
            clock,
            depth: Mutex::new(HashMap::new()),
        });
        Self { inner }
    }

    /// Register a node under its name and bind it to this hub
    pub fn register(&self, node: Arc<dyn Node>) -> Result<(), HubError> {
        self.inner.register(node)
    }

    /// Broadcast to every registered node except the event's origin.
    /// Returns the number of nodes reached.
    pub fn emit(&self, event: Event) -> Result<usize, HubError> {
        self.inner.emit(event)
    }

    /// Deliver to exactly one node. A missing target is reported as
    /// `HubError::NodeNotFound` and nothing is delivered.
    pub fn send(&self, target: &str, event: Event) -> Result<(), HubError> {
        self.inner.send(target, event)
    }

    /// A non-owning handle to this hub
    pub fn handle(&self) -> HubHandle {
        self.inner.handle()
    }

    pub fn config(&self) -> &HubConfig {
        &self.inner.config
    }

    /// Get count of registered nodes
    pub fn len(&self) -> usize {
        self.inner
            .nodes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inner
            .nodes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .contains_key(name)
    }

    /// List registered node names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .inner
            .nodes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl Default for EventHub<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Clone for EventHub<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> HubInner<C> {
    fn handle(&self) -> HubHandle {
        let me: Weak<dyn Dispatch> = self.me.clone();
        HubHandle::new(me)
    }

    fn lookup(&self, name: &str) -> Option<Arc<dyn Node>> {
        self.nodes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    /// Count one more dispatch on the calling thread's stack. Dispatches
    /// running on other threads do not count toward the limit.
    fn enter(&self) -> Result<DepthGuard<'_>, HubError> {
        let thread = thread::current().id();
        let depth = {
            let mut depths = self.depth.lock().unwrap_or_else(|e| e.into_inner());
            let depth = depths.entry(thread).or_insert(0);
            *depth += 1;
            *depth
        };
        let guard = DepthGuard {
            depths: &self.depth,
            thread,
        };
        match self.config.depth_limit() {
            Some(limit) if depth > limit => {
                tracing::warn!(limit, "dispatch depth limit reached, dropping nested dispatch");
                Err(HubError::ReentrancyLimit { limit })
            }
            _ => Ok(guard),
        }
    }
}

impl<C: Clock> Dispatch for HubInner<C> {
    fn register(&self, node: Arc<dyn Node>) -> Result<(), HubError> {
        let name = node.name().to_string();
        if name.trim().is_empty() {
            return Err(HubError::EmptyName);
        }

        {
            let mut nodes = self.nodes.write().unwrap_or_else(|e| e.into_inner());
            match nodes.entry(name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&node));
                }
                Entry::Occupied(mut slot) => match self.config.duplicate_policy {
                    DuplicatePolicy::Reject => return Err(HubError::DuplicateName(name)),
                    DuplicatePolicy::Replace => {
                        tracing::warn!(node = %name, "replacing registered node");
                        slot.insert(Arc::clone(&node));
                    }
                },
            }
        }

        tracing::debug!(node = %name, "registered");
        node.bind(self.handle());
        Ok(())
    }

    fn emit(&self, event: Event) -> Result<usize, HubError> {
        let _guard = self.enter()?;
        let event = event.stamped(self.clock.now());

        // Snapshot so nodes can register or dispatch from inside receive
        let recipients: Vec<Arc<dyn Node>> = self
            .nodes
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .iter()
            .filter(|(name, _)| name.as_str() != event.origin())
            .map(|(_, node)| Arc::clone(node))
            .collect();

        tracing::debug!(
            kind = %event.kind(),
            origin = event.origin(),
            recipients = recipients.len(),
            "emit"
        );

        for node in &recipients {
            node.receive(&event);
        }
        Ok(recipients.len())
    }

    fn send(&self, target: &str, event: Event) -> Result<(), HubError> {
        let _guard = self.enter()?;
        let event = event.stamped(self.clock.now());

        let Some(node) = self.lookup(target) else {
            tracing::warn!(node = target, kind = %event.kind(), "node not found, event dropped");
            return Err(HubError::NodeNotFound(target.to_string()));
        };

        tracing::debug!(kind = %event.kind(), origin = event.origin(), node = target, "send");
        node.receive(&event);
        Ok(())
    }
}

struct DepthGuard<'a> {
    depths: &'a Mutex<HashMap<ThreadId, usize>>,
    thread: ThreadId,
}

impl Drop for DepthGuard<'_> {
    fn drop(&mut self) {
        let mut depths = self.depths.lock().unwrap_or_else(|e| e.into_inner());
        if let Entry::Occupied(mut slot) = depths.entry(self.thread) {
            *slot.get_mut() -= 1;
            if *slot.get() == 0 {
                slot.remove();
            }
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
