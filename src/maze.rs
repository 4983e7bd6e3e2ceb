use std::collections::VecDeque;

use crate::Coords;
use crate::error::{GameError, Result};

/// The hardcoded maze: `#` wall, `.` open, `E` exit.
pub const DEFAULT_LAYOUT: [&str; 10] = [
    "##########",
    "#........#",
    "#.###....#",
    "#.#......#",
    "#.#.#....#",
    "#...#....#",
    "######...#",
    "#........#",
    "#........E",
    "##########",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
    Exit,
}

impl Cell {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Open),
            'E' => Some(Cell::Exit),
            _ => None,
        }
    }
}

/// Immutable rectangular grid of cells, stored row-major.
#[derive(Clone, Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Maze {
    pub fn default_maze() -> Result<Self> {
        Self::from_layout(&DEFAULT_LAYOUT)
    }

    pub fn from_layout(lines: &[&str]) -> Result<Self> {
        let rows = lines.len();
        let cols = lines.first().map_or(0, |line| line.chars().count());

        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidMaze("maze must have at least one row and column".into()));
        }

        let mut cells = Vec::with_capacity(rows * cols);

        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GameError::InvalidMaze(format!(
                    "row {} has {} cells, expected {}", row, line.chars().count(), cols
                )));
            }

            for (col, ch) in line.chars().enumerate() {
                let cell = Cell::from_char(ch).ok_or_else(|| {
                    GameError::InvalidMaze(format!("unknown cell '{}' at ({}, {})", ch, row, col))
                })?;
                cells.push(cell);
            }
        }

        if !cells.contains(&Cell::Exit) {
            return Err(GameError::InvalidMaze("maze has no exit".into()));
        }

        Ok(Maze { rows, cols, cells })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `None` when `pos` lies outside the grid.
    pub fn cell_at(&self, pos: Coords) -> Option<Cell> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    pub fn is_passable(&self, pos: Coords) -> bool {
        matches!(self.cell_at(pos), Some(Cell::Open) | Some(Cell::Exit))
    }

    /// Breadth-first search over passable cells from `start`.
    pub fn exit_reachable_from(&self, start: Coords) -> bool {
        let Some(start_idx) = self.index_of(start) else {
            return false;
        };
        if !self.is_passable(start) {
            return false;
        }

        let mut visited = vec![false; self.cells.len()];
        let mut queue = VecDeque::from([start]);
        visited[start_idx] = true;

        while let Some((row, col)) = queue.pop_front() {
            if self.cell_at((row, col)) == Some(Cell::Exit) {
                return true;
            }

            for next in [(row - 1, col), (row + 1, col), (row, col - 1), (row, col + 1)] {
                if let Some(i) = self.index_of(next) {
                    if !visited[i] && self.is_passable(next) {
                        visited[i] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        false
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index_of(&self, (row, col): Coords) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(self.cols * row as usize + col as usize)
    }
}
