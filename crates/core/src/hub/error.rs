// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for hub registration and dispatch

use thiserror::Error;

/// Errors reported by the hub. None of them are fatal to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HubError {
    #[error("node {0:?} not found")]
    NodeNotFound(String),
    #[error("node name must not be empty")]
    EmptyName,
    #[error("node {0:?} is already registered")]
    DuplicateName(String),
    #[error("dispatch nested deeper than {limit} levels")]
    ReentrancyLimit { limit: usize },
    #[error("hub has been dropped")]
    HubClosed,
    #[error("node {node:?} is not registered with a hub")]
    Unbound { node: String },
}
