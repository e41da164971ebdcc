// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod cue;
pub mod run;

use anyhow::{Context, Result};
use showhub_core::show::{default_show, parse_show_file, ShowConfig};
use std::path::Path;

/// Load the show file, or the built-in show when no path is given
pub fn load_show(path: Option<&Path>) -> Result<ShowConfig> {
    match path {
        Some(path) => parse_show_file(path)
            .with_context(|| format!("failed to load show {}", path.display())),
        None => Ok(default_show()?),
    }
}
