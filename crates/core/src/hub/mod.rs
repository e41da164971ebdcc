// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event hub: a synchronous mediator between named nodes
//!
//! This module provides:
//! - `EventHub` - Owns the node registry and dispatches events
//! - `Node` - The capability every participant implements
//! - `HubHandle` / `HubBinding` - Non-owning back-reference from a node to its hub
//! - `HubConfig` - Duplicate-name and reentrancy policies

mod bus;
mod config;
mod error;
mod node;

pub use bus::EventHub;
pub use config::{DuplicatePolicy, HubConfig, DEFAULT_MAX_DISPATCH_DEPTH};
pub use error::HubError;
pub use node::{HubBinding, HubHandle, Node};
