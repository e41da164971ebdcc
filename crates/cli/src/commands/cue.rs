// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `showhub cue` - Build and print the show cue

use crate::output::{self, CueLine, OutputFormat};
use anyhow::Result;
use clap::Args;
use showhub_core::show::ShowConfig;

#[derive(Args)]
pub struct CueArgs {
    /// Print the cue as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn cue(args: CueArgs, config: &ShowConfig) -> Result<()> {
    let cue = config.cue.build()?;
    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    output::print(&CueLine(&cue), format)?;
    Ok(())
}
