// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced display wrapper for consistent observability

use super::{Display, DisplayError};

/// Wrapper that adds tracing to any Display
#[derive(Clone)]
pub struct TracedDisplay<D> {
    inner: D,
}

impl<D> TracedDisplay<D> {
    pub fn new(inner: D) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }
}

impl<D: Display> Display for TracedDisplay<D> {
    fn name(&self) -> String {
        self.inner.name()
    }

    fn draw(&self, frame: &str) -> Result<(), DisplayError> {
        let name = self.inner.name();
        let span = tracing::info_span!("display.draw", display = %name);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.draw(frame);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(
                frame_len = frame.len(),
                elapsed_us = elapsed.as_micros() as u64,
                "drawn"
            ),
            Err(e) => tracing::error!(error = %e, "draw failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::FakeDisplay;

    #[test]
    fn traced_display_forwards_frames_and_name() {
        let fake = FakeDisplay::new("led");
        let traced = TracedDisplay::new(fake.clone());

        traced.draw("frame").unwrap();

        assert_eq!(traced.name(), "led");
        assert_eq!(fake.frames(), vec!["frame".to_string()]);
    }

    #[test]
    fn traced_display_forwards_errors() {
        let fake = FakeDisplay::new("led");
        fake.set_failing(true);
        let traced = TracedDisplay::new(fake);

        assert!(traced.draw("frame").is_err());
    }
}
