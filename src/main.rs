mod cli;
mod config;
mod convert;
mod events_cmd;
mod logging;
mod score_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Score(args) => score_cmd::run(args),
        Command::Events(args) => events_cmd::run(args),
    }
}
