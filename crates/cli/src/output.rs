// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use serde::Serialize;
use showhub_core::cue::ShowCue;
use std::fmt;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print output in the specified format
pub fn print<T: Serialize + fmt::Display>(value: &T, format: OutputFormat) -> serde_json::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

/// The one-line cue summary printed before a run
#[derive(Serialize)]
#[serde(transparent)]
pub struct CueLine<'a>(pub &'a ShowCue);

impl fmt::Display for CueLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cue = self.0;
        write!(
            f,
            "BUILT CUE: {} | bpm: {} | lights: {} | smoke: {} %",
            cue.name(),
            cue.bpm(),
            cue.light_preset(),
            cue.smoke_level_pct()
        )
    }
}

pub fn missed_line(target: &str) -> String {
    format!("[HUB] node {:?} not found", target)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
