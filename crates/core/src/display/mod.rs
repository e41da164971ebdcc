// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Display sinks and the visuals drawn on them
//!
//! A `Display` is anything that can draw a text frame. Screens write to a
//! writer (stdout by default); visuals render themselves into frames.

mod fake;
mod screen;
mod traced;
mod visual;

pub use fake::FakeDisplay;
pub use screen::{Console, LedWall, Projector};
pub use traced::TracedDisplay;
pub use visual::{BigText, LyricsCard, Visual};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("display {display} failed to draw: {source}")]
    Io {
        display: String,
        #[source]
        source: std::io::Error,
    },
}

/// A sink for rendered frames
pub trait Display: Send + Sync {
    fn name(&self) -> String;

    fn draw(&self, frame: &str) -> Result<(), DisplayError>;
}
