//! Terminal front end for the Grid Power puzzle engine.

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gridpower_core::LevelId;

mod play;
mod render;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a level interactively, reading moves such as `B2` from stdin
    Play {
        /// Level number (1-7) or `daily`
        #[arg(short, long, default_value_t = LevelId::FIRST)]
        level: LevelId,
    },
    /// Replay a level's canonical solution step by step
    Solve {
        /// Level number (1-7) or `daily`
        #[arg(short, long, default_value_t = LevelId::FIRST)]
        level: LevelId,
    },
    /// List every level with its par and power tiles
    Levels,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();
    log::debug!("command: {:?}", args.command);

    let mut stdout = io::stdout().lock();
    match args.command {
        Command::Play { level } => {
            let stdin = io::stdin().lock();
            play::run(level, stdin, &mut stdout).context("interactive game failed")
        }
        Command::Solve { level } => {
            render::write_solution(level, &mut stdout).context("could not replay solution")
        }
        Command::Levels => render::write_levels(&mut stdout).context("could not list levels"),
    }
}
