// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TOML parsing for show files

use super::config::ShowConfig;
use std::path::Path;
use thiserror::Error;

/// The show staged when no show file is given
pub const DEFAULT_SHOW: &str = r#"
[cue]
name = "Intro → Chorus blast"
starts_in = "2s"
bpm = 138
light_preset = "NEON-SWEEP"
smoke_level_pct = 35
screen_text = "ARE YOU READY?"
tags = ["opener", "high-energy"]

[screens]
led = "A1"
projector = "Backstage"

[lyrics]
title = "Chorus"
lines = ["Hands up!", "Feel the bass!", "We go again!"]

[[rig]]
kind = "artist"
name = "MC"

[[rig]]
kind = "lighting"
name = "MainRig"

[[rig]]
kind = "smoke"
name = "Fogger-01"

[[rig]]
kind = "sound"
name = "Rack-Sub"

[[script]]
trigger = "MC"
kind = "TALK"
payload = "Welcome to the show!"

[[script]]
trigger = "MC"
kind = "CHORUS"
payload = "Go!"

[[script]]
send = "Fogger-01"
kind = "SMOKE_NOW"

[[script]]
trigger = "MC"
kind = "DROP"
payload = "DROP NOW!!!"
"#;

/// Errors that can occur during parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// TOML syntax or schema error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// IO error reading file
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Parse a show from TOML string content.
pub fn parse_show(toml_content: &str) -> Result<ShowConfig, ParseError> {
    let show: ShowConfig = toml::from_str(toml_content)?;
    Ok(show)
}

/// Parse a show from a TOML file.
pub fn parse_show_file(path: &Path) -> Result<ShowConfig, ParseError> {
    let content = std::fs::read_to_string(path).map_err(|e| ParseError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_show(&content)
}

/// The built-in show
pub fn default_show() -> Result<ShowConfig, ParseError> {
    parse_show(DEFAULT_SHOW)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
