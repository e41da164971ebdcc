// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `showhub run` - Stage the rig and play the script

use crate::output::{self, CueLine, OutputFormat};
use anyhow::{Context, Result};
use clap::Args;
use showhub_core::display::{Console, Display, LedWall, Projector, TracedDisplay};
use showhub_core::show::{Show, ShowConfig, Step, StepOutcome};
use std::sync::Arc;
use std::time::Duration;

#[derive(Args)]
pub struct RunArgs {
    /// Pause after each triggered event, in milliseconds
    #[arg(long, default_value_t = 500)]
    pub pause_ms: u64,
}

pub async fn run(args: RunArgs, config: &ShowConfig) -> Result<()> {
    let pause = Duration::from_millis(args.pause_ms);
    let monitor: Arc<dyn Display> = Arc::new(TracedDisplay::new(Console::stdout()));
    let show = Show::stage(config, monitor)?;

    output::print(&CueLine(show.cue()), OutputFormat::Text)?;

    let led: Arc<dyn Display> = Arc::new(TracedDisplay::new(LedWall::new(&config.screens.led)));
    let projector: Arc<dyn Display> = Arc::new(TracedDisplay::new(Projector::new(
        &config.screens.projector,
    )));
    show.present_visuals(led, projector)
        .context("failed to present visuals")?;

    for (index, step) in config.script.iter().enumerate() {
        let outcome = show
            .run_step(step)
            .with_context(|| format!("script step {} failed", index + 1))?;
        tracing::debug!(step = index + 1, ?outcome, "step done");

        if let StepOutcome::Missed { target } = &outcome {
            println!("{}", output::missed_line(target));
        }
        if matches!(step, Step::Trigger(_)) && !pause.is_zero() {
            tokio::time::sleep(pause).await;
        }
    }

    Ok(())
}
