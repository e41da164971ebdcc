// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake display for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Display, DisplayError};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Records every frame drawn; can be switched into a failing mode
#[derive(Clone, Debug, Default)]
pub struct FakeDisplay {
    name: String,
    frames: Arc<Mutex<Vec<String>>>,
    failing: Arc<AtomicBool>,
}

impl FakeDisplay {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get all recorded frames
    pub fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Make subsequent draws fail with a broken-pipe error
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl Display for FakeDisplay {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn draw(&self, frame: &str) -> Result<(), DisplayError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DisplayError::Io {
                display: self.name.clone(),
                source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "fake display failure"),
            });
        }
        self.frames
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(frame.to_string());
        Ok(())
    }
}
