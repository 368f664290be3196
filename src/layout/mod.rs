use std::fmt::Write;
use std::str::FromStr;

use crate::types::{Direction, DirectionSet, Grid, Position};

mod builtin;
mod parser;

pub use builtin::*;
pub use parser::*;

#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("line {line}: expected {expected} columns, found {found}")]
    RaggedRow { line: usize, expected: usize, found: usize },
    #[error("line {line}, column {column}: unknown layout character {ch:?}")]
    UnknownCharacter { line: usize, column: usize, ch: char },
    #[error("layout has no Pacman start position")]
    MissingPacman,
    #[error("layout has a second Pacman start position at {0}")]
    DuplicatePacman(Position),
    #[error("unknown built-in layout {0:?}")]
    UnknownLayout(String),
    #[error("failed to read layout")]
    Io(#[from] std::io::Error),
}

/// Static description of a board: walls, initial food and capsules, and start positions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub walls: Grid<bool>,
    pub food: Grid<bool>,
    pub capsules: Vec<Position>,
    pub pacman_start: Position,
    /// Ghost start positions in row-major order. Ghost `i` is agent `i + 1`.
    pub ghost_starts: Vec<Position>,
}

impl Layout {
    pub const WALL: char = '%';
    pub const FOOD: char = '.';
    pub const CAPSULE: char = 'o';
    pub const PACMAN: char = 'P';
    pub const GHOST: char = 'G';
    pub const EMPTY: char = ' ';

    #[inline]
    pub fn width(&self) -> usize {
        self.walls.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.walls.height()
    }

    /// Cells outside the board count as walls.
    #[inline]
    pub fn is_wall(&self, pos: Position) -> bool {
        self.walls.get(pos).copied().unwrap_or(true)
    }

    #[inline]
    pub fn num_ghosts(&self) -> usize {
        self.ghost_starts.len()
    }

    /// Moves from `pos` that do not run into a wall. Never contains `Stop`.
    pub fn open_moves(&self, pos: Position) -> DirectionSet {
        Direction::MOVES
            .into_iter()
            .filter(|&d| !self.is_wall(pos.step(d)))
            .collect()
    }

    /// Number of cells that are not walls.
    pub fn open_cells(&self) -> usize {
        self.walls.count(|&w| !w)
    }
}

impl FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::from_lines(s.lines())
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height() as i32 {
            for x in 0..self.width() as i32 {
                let pos = Position::new(x, y);
                let ch = if self.is_wall(pos) {
                    Layout::WALL
                } else if pos == self.pacman_start {
                    Layout::PACMAN
                } else if self.ghost_starts.contains(&pos) {
                    Layout::GHOST
                } else if self.capsules.contains(&pos) {
                    Layout::CAPSULE
                } else if self.food.is_set(pos) {
                    Layout::FOOD
                } else {
                    Layout::EMPTY
                };
                f.write_char(ch)?;
            }
            if (y as usize) + 1 < self.height() {
                f.write_char('\n')?;
            }
        }
        Ok(())
    }
}
