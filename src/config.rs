use clap::{Parser, ValueEnum};

use crate::snake::GrowthMode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputMode {
    /// Arrow keys or WASD, q or Esc to quit, Ctrl+C to abort
    Keys,
    /// One command per line: up, down, left, right, exit
    Lines,
}

#[derive(Parser, Debug)]
#[command(name = "maze-snake", about = "Steer a snake through a maze until it finds the exit")]
pub struct Args {
    /// Whether the snake grows on every move or slides as a fixed-length body
    #[arg(long, value_enum, default_value_t = GrowthMode::Growing)]
    pub mode: GrowthMode,

    #[arg(long, value_enum, default_value_t = InputMode::Keys)]
    pub input: InputMode,
}
