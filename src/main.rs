mod config;
mod error;
mod game;
mod input;
mod maze;
mod render;
mod snake;
mod term;

use std::io::stdin;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use config::{Args, InputMode};
use game::{Game, GameEnd};
use input::{KeyInput, LineInput};
use term::TermManager;

/// (row, col), zero-based from the top left. Signed so a step off the
/// grid can still be represented.
pub type Coords = (i32, i32);

fn main() -> ExitCode {
    // Silent unless RUST_LOG is set, so the board stays clean.
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(end) => ExitCode::from(end.exit_code()),
        Err(e) => {
            error!("{}", e);
            eprintln!("maze-snake: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> error::Result<GameEnd> {
    match args.input {
        InputMode::Keys => {
            Game::with_defaults(KeyInput, TermManager::new(true), args.mode)?.run()
        }
        InputMode::Lines => {
            install_interrupt_handler()?;
            let input = LineInput::new(stdin().lock());
            Game::with_defaults(input, TermManager::new(false), args.mode)?.run()
        }
    }
}

/// Line mode reads stdin in cooked mode, so Ctrl+C arrives as SIGINT rather
/// than as a key. Nothing needs restoring there; just end like an
/// in-game interrupt would.
fn install_interrupt_handler() -> error::Result<()> {
    ctrlc::set_handler(|| {
        info!("Interrupted");
        std::process::exit(GameEnd::Interrupted.exit_code().into());
    })?;
    Ok(())
}
