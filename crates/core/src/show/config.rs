// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Show file types

use crate::cue::{CueBuilder, CueError, ShowCue};
use crate::event::EventKind;
use crate::hub::HubConfig;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// A complete show file
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShowConfig {
    #[serde(default)]
    pub hub: HubConfig,
    pub cue: CueConfig,
    #[serde(default)]
    pub screens: ScreensConfig,
    pub lyrics: Option<LyricsConfig>,
    #[serde(default)]
    pub rig: Vec<RigEntry>,
    #[serde(default)]
    pub script: Vec<Step>,
}

/// Unvalidated cue fields; `build` runs them through `CueBuilder`
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CueConfig {
    pub name: String,
    #[serde(default, with = "humantime_serde")]
    pub starts_in: Duration,
    pub bpm: Option<i64>,
    #[serde(default)]
    pub light_preset: String,
    pub smoke_level_pct: Option<i64>,
    #[serde(default)]
    pub screen_text: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CueConfig {
    pub fn build(&self) -> Result<ShowCue, CueError> {
        let mut builder = CueBuilder::new(self.name.clone())
            .starts_in(self.starts_in)
            .light_preset(self.light_preset.clone())
            .screen_text(self.screen_text.clone());
        if let Some(bpm) = self.bpm {
            builder = builder.bpm(bpm);
        }
        if let Some(pct) = self.smoke_level_pct {
            builder = builder.smoke_level_pct(pct);
        }
        for tag in &self.tags {
            builder = builder.tag(tag.clone());
        }
        builder.build()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScreensConfig {
    /// LED wall panel id
    pub led: String,
    /// Projector room
    pub projector: String,
}

impl Default for ScreensConfig {
    fn default() -> Self {
        Self {
            led: "A1".to_string(),
            projector: "Backstage".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LyricsConfig {
    pub title: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RigKind {
    Artist,
    Lighting,
    Smoke,
    Sound,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RigEntry {
    pub kind: RigKind,
    pub name: String,
}

/// One line of the show script
///
/// Exactly one of `trigger` or `send` names the step's node.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawStep")]
pub enum Step {
    Trigger(TriggerStep),
    Send(SendStep),
}

/// An artist broadcasts to the stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerStep {
    pub trigger: String,
    pub kind: EventKind,
    pub payload: String,
}

/// The hub operator cues a single node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendStep {
    pub send: String,
    pub kind: EventKind,
    /// Defaults to the cue's smoke level for `SMOKE_NOW`, empty otherwise
    pub payload: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("script step needs `trigger` or `send`")]
    MissingTarget,
    #[error("script step has both `trigger` ({trigger:?}) and `send` ({send:?})")]
    BothTargets { trigger: String, send: String },
}

/// Script step as written; field names are checked here so a typo is
/// reported by name
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawStep {
    trigger: Option<String>,
    send: Option<String>,
    kind: EventKind,
    payload: Option<String>,
}

impl TryFrom<RawStep> for Step {
    type Error = StepError;

    fn try_from(raw: RawStep) -> Result<Self, Self::Error> {
        match (raw.trigger, raw.send) {
            (Some(trigger), None) => Ok(Step::Trigger(TriggerStep {
                trigger,
                kind: raw.kind,
                payload: raw.payload.unwrap_or_default(),
            })),
            (None, Some(send)) => Ok(Step::Send(SendStep {
                send,
                kind: raw.kind,
                payload: raw.payload,
            })),
            (Some(trigger), Some(send)) => Err(StepError::BothTargets { trigger, send }),
            (None, None) => Err(StepError::MissingTarget),
        }
    }
}
