//! Grid loading and matrix utilities.
//!
//! A [`Grid`] is created once per run from raw map text, then progressively
//! mutated by the decomposition passes: wall cells are overwritten with the
//! consumed sentinel as they are assigned to blocks.

use crate::chars;
use crate::geometry::{Block, Point};
use crate::Error;

/// A rectangular character grid in (row, col) coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Parse raw map text into a normalized grid.
    ///
    /// Spaces and `|` are decorative and stripped; lines starting with `+`
    /// are border art and dropped, as are empty lines. What remains must be
    /// a non-empty rectangle of recognized symbols.
    pub fn parse(text: &str) -> Result<Grid, Error> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|&c| c != ' ' && c != '|')
                    .collect::<Vec<char>>()
            })
            .filter(|row| !row.is_empty() && row[0] != '+')
            .collect();

        let height = rows.len();
        if height == 0 {
            return Err(Error::EmptyMap);
        }

        let width = rows[0].len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != width {
                return Err(Error::UnevenRows {
                    row,
                    expected: width,
                    found: cells.len(),
                });
            }
            for (col, &c) in cells.iter().enumerate() {
                if !chars::is_recognized(c) {
                    return Err(Error::UnknownSymbol { ch: c, row, col });
                }
            }
        }

        Ok(Grid {
            width,
            height,
            rows,
        })
    }

    pub fn get(&self, row: usize, col: usize) -> char {
        self.rows[row][col]
    }

    /// Returns a new grid with rows and columns swapped:
    /// `result.get(c, r) == self.get(r, c)`. Never mutates `self`.
    pub fn transpose(&self) -> Grid {
        let rows = (0..self.width)
            .map(|c| (0..self.height).map(|r| self.rows[r][c]).collect())
            .collect();
        Grid {
            width: self.height,
            height: self.width,
            rows,
        }
    }

    /// Overwrite every cell inside `block` with the consumed sentinel.
    pub fn fill_block(&mut self, block: &Block) {
        for r in block.row..block.row + block.height {
            for c in block.col..block.col + block.width {
                self.rows[r][c] = chars::CONSUMED;
            }
        }
    }

    /// All positions holding `symbol`, in row-major scan order.
    pub fn find_symbol(&self, symbol: char) -> Vec<Point> {
        let mut points = Vec::new();
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, &c) in cells.iter().enumerate() {
                if c == symbol {
                    points.push(Point { row, col });
                }
            }
        }
        points
    }

    /// Count of wall cells not yet assigned to a block.
    pub fn wall_cells(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|&&c| chars::is_wall(c)).count())
            .sum()
    }

    /// Direct view of one row's cells.
    pub fn row(&self, row: usize) -> &[char] {
        &self.rows[row]
    }
}
