// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fluent builder for show cues
//!
//! Bounded setters record the first validation failure; once a failure is
//! recorded, later bounded setters are skipped and `build` returns it.
//!
//! # Example
//!
//! ```
//! use showhub_core::cue::CueBuilder;
//! use std::time::Duration;
//!
//! let cue = CueBuilder::new("Intro")
//!     .starts_in(Duration::from_secs(2))
//!     .bpm(138)
//!     .smoke_level_pct(35)
//!     .tag("opener")
//!     .build()
//!     .unwrap();
//! assert_eq!(cue.bpm(), 138);
//! ```

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BPM: u32 = 120;
pub const MAX_BPM: u32 = 400;
pub const MAX_SMOKE_LEVEL_PCT: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CueError {
    #[error("BPM must be in range 1..400, got {0}")]
    BpmOutOfRange(i64),
    #[error("SmokeLevelPct must be in range 0..100, got {0}")]
    SmokeOutOfRange(i64),
    #[error("cue name is required")]
    MissingName,
}

/// An immutable, validated cue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowCue {
    name: String,
    #[serde(with = "humantime_serde")]
    starts_in: Duration,
    bpm: u32,
    light_preset: String,
    smoke_level_pct: u8,
    screen_text: String,
    tags: Vec<String>,
}

impl ShowCue {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn starts_in(&self) -> Duration {
        self.starts_in
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    pub fn light_preset(&self) -> &str {
        &self.light_preset
    }

    pub fn smoke_level_pct(&self) -> u8 {
        self.smoke_level_pct
    }

    pub fn screen_text(&self) -> &str {
        &self.screen_text
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}

#[derive(Debug, Clone)]
pub struct CueBuilder {
    cue: ShowCue,
    error: Option<CueError>,
}

impl CueBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            cue: ShowCue {
                name: name.into(),
                starts_in: Duration::ZERO,
                bpm: DEFAULT_BPM,
                light_preset: String::new(),
                smoke_level_pct: 0,
                screen_text: String::new(),
                tags: Vec::new(),
            },
            error: None,
        }
    }

    pub fn starts_in(mut self, delay: Duration) -> Self {
        self.cue.starts_in = delay;
        self
    }

    /// Tempo in beats per minute, 1..=400
    pub fn bpm(mut self, bpm: i64) -> Self {
        if self.error.is_some() {
            return self;
        }
        match u32::try_from(bpm) {
            Ok(v) if (1..=MAX_BPM).contains(&v) => self.cue.bpm = v,
            _ => self.error = Some(CueError::BpmOutOfRange(bpm)),
        }
        self
    }

    pub fn light_preset(mut self, preset: impl Into<String>) -> Self {
        self.cue.light_preset = preset.into();
        self
    }

    /// Smoke level in percent, 0..=100
    pub fn smoke_level_pct(mut self, pct: i64) -> Self {
        if self.error.is_some() {
            return self;
        }
        match u8::try_from(pct) {
            Ok(v) if v <= MAX_SMOKE_LEVEL_PCT => self.cue.smoke_level_pct = v,
            _ => self.error = Some(CueError::SmokeOutOfRange(pct)),
        }
        self
    }

    pub fn screen_text(mut self, text: impl Into<String>) -> Self {
        self.cue.screen_text = text.into();
        self
    }

    /// Add a tag; empty tags are skipped
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        if !tag.is_empty() {
            self.cue.tags.push(tag);
        }
        self
    }

    pub fn build(self) -> Result<ShowCue, CueError> {
        if let Some(error) = self.error {
            return Err(error);
        }
        if self.cue.name.is_empty() {
            return Err(CueError::MissingName);
        }
        Ok(self.cue)
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
