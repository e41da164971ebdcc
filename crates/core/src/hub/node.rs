// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The node capability and the back-reference a node keeps to its hub

use super::error::HubError;
use crate::event::Event;
use std::fmt;
use std::sync::{Arc, OnceLock, Weak};

/// A named participant on the hub
///
/// `receive` runs synchronously on the dispatching caller's stack. A node
/// may emit, send or register from inside `receive`; the hub holds no lock
/// while nodes run.
pub trait Node: Send + Sync {
    /// Registry key. Must not change while the node is registered.
    fn name(&self) -> &str;

    fn receive(&self, event: &Event);

    /// Called once the hub has accepted the node. Nodes that originate
    /// events keep the handle; the rest ignore it.
    fn bind(&self, hub: HubHandle) {
        let _ = hub;
    }
}

/// Operations a node may perform on the hub it is bound to
pub(crate) trait Dispatch: Send + Sync {
    fn register(&self, node: Arc<dyn Node>) -> Result<(), HubError>;
    fn emit(&self, event: Event) -> Result<usize, HubError>;
    fn send(&self, target: &str, event: Event) -> Result<(), HubError>;
}

/// Non-owning reference to a hub
///
/// Holding a handle does not keep the hub alive; once every `EventHub`
/// clone is dropped, calls return `HubError::HubClosed`.
#[derive(Clone)]
pub struct HubHandle {
    inner: Weak<dyn Dispatch>,
}

impl HubHandle {
    pub(crate) fn new(inner: Weak<dyn Dispatch>) -> Self {
        Self { inner }
    }

    pub fn register(&self, node: Arc<dyn Node>) -> Result<(), HubError> {
        self.upgrade()?.register(node)
    }

    /// Broadcast to every registered node except the event's origin
    pub fn emit(&self, event: Event) -> Result<usize, HubError> {
        self.upgrade()?.emit(event)
    }

    /// Deliver to exactly one named node
    pub fn send(&self, target: &str, event: Event) -> Result<(), HubError> {
        self.upgrade()?.send(target, event)
    }

    pub fn is_closed(&self) -> bool {
        self.inner.strong_count() == 0
    }

    /// True if both handles point at the same hub
    pub fn same_hub(&self, other: &HubHandle) -> bool {
        Weak::ptr_eq(&self.inner, &other.inner)
    }

    fn upgrade(&self) -> Result<Arc<dyn Dispatch>, HubError> {
        self.inner.upgrade().ok_or(HubError::HubClosed)
    }
}

impl fmt::Debug for HubHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HubHandle")
            .field("closed", &self.is_closed())
            .finish()
    }
}

/// Write-once slot for a node's hub handle
///
/// A node is bound to exactly one hub, at its first registration.
/// Later binds to a different hub are ignored.
#[derive(Debug, Default)]
pub struct HubBinding {
    handle: OnceLock<HubHandle>,
}

impl HubBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, node: &str, hub: HubHandle) {
        if let Some(existing) = self.handle.get() {
            if !existing.same_hub(&hub) {
                tracing::warn!(node, "node already bound to another hub; ignoring rebind");
            }
            return;
        }
        let _ = self.handle.set(hub);
    }

    pub fn handle(&self) -> Option<&HubHandle> {
        self.handle.get()
    }

    pub fn is_bound(&self) -> bool {
        self.handle.get().is_some()
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
