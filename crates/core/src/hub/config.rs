// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Hub policies

use serde::{Deserialize, Serialize};

/// Default nesting limit for dispatches started from inside `receive`
pub const DEFAULT_MAX_DISPATCH_DEPTH: usize = 64;

/// What `register` does when the name is already taken
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the existing node and return `HubError::DuplicateName`
    #[default]
    Reject,
    /// Route the name to the newly registered node from now on
    Replace,
}

/// Hub configuration, usually read from the `[hub]` table of a show file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HubConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Maximum nesting of `emit`/`send` calls on one thread. `None` leaves
    /// reentrancy unbounded; in TOML this is written as `0`. `Some(0)` is
    /// read as `None` as well.
    #[serde(with = "depth_limit")]
    pub max_dispatch_depth: Option<usize>,
}

impl HubConfig {
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicate_policy = policy;
        self
    }

    /// Set the nesting limit; `Some(0)` is stored as `None` (unbounded)
    pub fn with_max_dispatch_depth(mut self, limit: Option<usize>) -> Self {
        self.max_dispatch_depth = limit.filter(|&l| l > 0);
        self
    }

    /// The effective nesting limit, with `Some(0)` treated as unbounded
    pub fn depth_limit(&self) -> Option<usize> {
        self.max_dispatch_depth.filter(|&l| l > 0)
    }
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            max_dispatch_depth: Some(DEFAULT_MAX_DISPATCH_DEPTH),
        }
    }
}

/// `0` on the wire means no limit
mod depth_limit {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(limit: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(limit.unwrap_or(0) as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        let raw = usize::deserialize(d)?;
        Ok((raw != 0).then_some(raw))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
