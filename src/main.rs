mod boundaries_cmd;
mod cli;
mod config;
mod convert;
mod dov_cmd;
mod logging;
mod output;
mod swap_cmd;
mod texture_cmd;

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
        Command::Boundaries(args) => boundaries_cmd::run(args),
        Command::Swap(args) => swap_cmd::run(args),
        Command::Texture(args) => texture_cmd::run(args),
        Command::Dov(args) => dov_cmd::run(args),
        Command::DovQuery(args) => dov_cmd::run_query(args),
    }
}
