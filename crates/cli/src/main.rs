// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! showhub - drive a scripted show through the event hub

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{cue, run};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "showhub", version, about = "Live show control over an event hub")]
struct Cli {
    /// Show file (TOML); the built-in show is used when absent
    #[arg(long, global = true)]
    show: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stage the rig and run the show script
    Run(run::RunArgs),
    /// Build and print the show cue
    Cue(cue::CueArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = commands::load_show(cli.show.as_deref())?;

    match cli.command {
        Commands::Run(args) => run::run(args, &config).await,
        Commands::Cue(args) => cue::cue(args, &config),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
