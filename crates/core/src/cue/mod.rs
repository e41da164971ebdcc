// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Show cues: validated configuration for a moment in the show

mod builder;

pub use builder::{CueBuilder, CueError, ShowCue, DEFAULT_BPM, MAX_BPM, MAX_SMOKE_LEVEL_PCT};
