use std::iter::once;

use crate::Coords;
use crate::error::{GameError, Result};
use crate::maze::{Cell, Maze};
use Direction::*;
use Outcome::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit (row, col) offset.
    pub fn delta(self) -> Coords {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }
}

/// How the body follows the head after a successful move. Fixed for the
/// lifetime of a snake.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum GrowthMode {
    /// The new head is prepended and no segment is dropped.
    Growing,
    /// Every segment shifts by the same delta; length never changes.
    Translating,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Win,
    WallHit,
    SelfHit,
    Advance(Snake),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Coords>,
    mode: GrowthMode,
}

impl Snake {
    /// `body` is head first.
    pub fn new(body: Vec<Coords>, mode: GrowthMode) -> Result<Self> {
        if body.is_empty() {
            return Err(GameError::InvalidSnake("snake needs at least one segment".into()));
        }

        for (i, pos) in body.iter().enumerate() {
            if body[..i].contains(pos) {
                return Err(GameError::InvalidSnake(format!("segment {:?} appears twice", pos)));
            }
        }

        Ok(Snake { body, mode })
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn mode(&self) -> GrowthMode {
        self.mode
    }

    pub fn occupies(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    /// Classifies a move without touching `self`. Checks run in a fixed
    /// order against the candidate head: exit, wall or boundary, own body.
    pub fn step(&self, direction: Direction, maze: &Maze) -> Outcome {
        let (dr, dc) = direction.delta();
        let Some(new_head) = offset(self.head(), (dr, dc)) else {
            return WallHit;
        };

        match maze.cell_at(new_head) {
            Some(Cell::Exit) => return Win,
            Some(Cell::Wall) | None => return WallHit,
            Some(Cell::Open) => {}
        }

        // A growing snake keeps every segment, a translating one vacates the head
        let blocking = match self.mode {
            GrowthMode::Growing => &self.body[..],
            GrowthMode::Translating => &self.body[1..],
        };
        if blocking.contains(&new_head) {
            return SelfHit;
        }

        let body = match self.mode {
            GrowthMode::Growing => once(new_head).chain(self.body.iter().copied()).collect(),
            GrowthMode::Translating => {
                let moved: Option<Vec<Coords>> = self.body.iter()
                    .map(|&pos| offset(pos, (dr, dc)))
                    .collect();

                match moved {
                    Some(moved) if moved[1..].iter().all(|&pos| maze.is_passable(pos)) => moved,
                    _ => return WallHit,
                }
            }
        };

        Advance(Snake { body, mode: self.mode })
    }
}

/// `None` when the result doesn't fit in a coordinate, which can only be off
/// the grid anyway.
fn offset((row, col): Coords, (dr, dc): Coords) -> Option<Coords> {
    Some((row.checked_add(dr)?, col.checked_add(dc)?))
}
