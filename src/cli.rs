use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Naiad ecological water index scoring.
#[derive(Parser)]
#[command(
    name = "naiad",
    version,
    about = "Ecological water index scoring for river series"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the full scoring pipeline.
    Score(ScoreArgs),
    /// Detect flood events and report them as JSON.
    Events(EventsArgs),
}

/// Arguments for the `score` subcommand.
#[derive(clap::Args)]
pub struct ScoreArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "naiad.toml")]
    pub config: PathBuf,

    /// Override input series CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Override output index CSV path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the directory holding response curve files.
    #[arg(long = "curves-dir")]
    pub curves_dir: Option<PathBuf>,

    /// Weight profile preset (standard, favour-duration, favour-dry,
    /// favour-timing); overrides the `[weights]` config section.
    #[arg(short, long)]
    pub profile: Option<String>,

    /// Append a blended water index column to the output.
    #[arg(long)]
    pub blend: bool,
}

/// Arguments for the `events` subcommand.
#[derive(clap::Args)]
pub struct EventsArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "naiad.toml")]
    pub config: PathBuf,

    /// Override input series CSV path from config.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Path for the events JSON output (stdout when omitted).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Detection parameter band preset (min, med, max); overrides the
    /// `[events]` config section.
    #[arg(short, long)]
    pub band: Option<String>,
}
