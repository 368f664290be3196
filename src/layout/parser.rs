use super::*;

use std::fs::File;
use std::io::{self, BufRead};

pub fn read_layout_from_file(file: File) -> Result<Layout, LayoutError> {
    let lines = io::BufReader::new(file).lines();
    let mut lines_vec = vec![];
    for line in lines {
        lines_vec.push(line?);
    }
    Layout::from_lines(lines_vec)
}

impl Layout {
    /// Parses a layout from its rows, top row first.
    ///
    /// Blank lines before the first row and after the last row are ignored.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let rows: Vec<(usize, String)> = lines
            .into_iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_ref().trim_end_matches(['\r', '\n']).to_string()))
            .collect();
        let first = rows.iter().position(|(_, r)| !r.trim().is_empty());
        let last = rows.iter().rposition(|(_, r)| !r.trim().is_empty());
        let (Some(first), Some(last)) = (first, last) else {
            return Err(LayoutError::Empty);
        };
        let rows = &rows[first..=last];

        let width = rows[0].1.chars().count();
        let height = rows.len();
        let mut walls = Grid::new(width, height, false);
        let mut food = Grid::new(width, height, false);
        let mut capsules = vec![];
        let mut pacman_start = None;
        let mut ghost_starts = vec![];

        for (y, (line, row)) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    line: *line,
                    expected: width,
                    found,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let pos = Position::new(x as i32, y as i32);
                match ch {
                    Layout::WALL => {
                        walls.set(pos, true);
                    }
                    Layout::FOOD => {
                        food.set(pos, true);
                    }
                    Layout::CAPSULE => capsules.push(pos),
                    Layout::PACMAN => {
                        if pacman_start.is_some() {
                            return Err(LayoutError::DuplicatePacman(pos));
                        }
                        pacman_start = Some(pos);
                    }
                    Layout::GHOST => ghost_starts.push(pos),
                    Layout::EMPTY => {}
                    _ => {
                        return Err(LayoutError::UnknownCharacter {
                            line: *line,
                            column: x + 1,
                            ch,
                        })
                    }
                }
            }
        }

        let pacman_start = pacman_start.ok_or(LayoutError::MissingPacman)?;
        log::trace!(
            "parsed {width}x{height} layout: {} food, {} capsules, {} ghosts",
            food.count_set(),
            capsules.len(),
            ghost_starts.len()
        );
        Ok(Layout {
            walls,
            food,
            capsules,
            pacman_start,
            ghost_starts,
        })
    }
}
