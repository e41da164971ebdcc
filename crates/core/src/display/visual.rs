// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Visuals: content that renders itself into a frame for any display

use super::{Display, DisplayError};
use std::sync::Arc;

/// Renderable content, independent of the display it ends up on
pub trait Visual {
    fn render(&self) -> String;

    fn show_on(&self, display: &dyn Display) -> Result<(), DisplayError> {
        display.draw(&self.render())
    }
}

/// A banner with the text framed by `=` rules
pub struct BigText {
    display: Arc<dyn Display>,
    text: String,
}

impl BigText {
    pub fn new(display: Arc<dyn Display>, text: impl Into<String>) -> Self {
        Self {
            display,
            text: text.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Draw on the display this visual was built with
    pub fn show(&self) -> Result<(), DisplayError> {
        self.show_on(self.display.as_ref())
    }
}

impl Visual for BigText {
    fn render(&self) -> String {
        let rule = "=".repeat(self.text.chars().count() + 8);
        format!("{rule}\n==  {}  ==\n{rule}", self.text)
    }
}

/// A titled card of lyric lines
pub struct LyricsCard {
    display: Arc<dyn Display>,
    title: String,
    lines: Vec<String>,
}

impl LyricsCard {
    pub fn new(display: Arc<dyn Display>, title: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            display,
            title: title.into(),
            lines,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Draw on the display this visual was built with
    pub fn show(&self) -> Result<(), DisplayError> {
        self.show_on(self.display.as_ref())
    }
}

impl Visual for LyricsCard {
    fn render(&self) -> String {
        let mut frame = format!("♪ {}\n", self.title);
        frame.push_str(&"-".repeat(self.title.chars().count() + 2));
        frame.push('\n');
        for line in &self.lines {
            frame.push_str(line);
            frame.push('\n');
        }
        frame
    }
}

#[cfg(test)]
#[path = "visual_tests.rs"]
mod tests;
