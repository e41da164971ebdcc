// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted shows
//!
//! A show file (TOML) describes the cue, the rig staged on the hub and a
//! script of trigger/send steps. `Show` stages the rig and runs the steps.
//!
//! # Example
//!
//! ```ignore
//! let config = parse_show_file(Path::new("show.toml"))?;
//! let show = Show::stage(&config, monitor)?;
//! for step in &config.script {
//!     show.run_step(step)?;
//! }
//! ```

mod config;
mod parser;
mod runner;

pub use config::{
    CueConfig, LyricsConfig, RigEntry, RigKind, ScreensConfig, SendStep, ShowConfig, Step,
    StepError, TriggerStep,
};
pub use parser::{default_show, parse_show, parse_show_file, ParseError, DEFAULT_SHOW};
pub use runner::{Show, ShowError, StepOutcome, HUB_ORIGIN};
