//! Decomposition engine: merges contiguous wall cells into a covering set
//! of non-overlapping blocks under one of three selection strategies.

use crate::geometry::Block;
use crate::grid::Grid;
use crate::runs::collect_runs;
use crate::Error;

/// Selection policy governing how wall runs are merged into blocks.
///
/// The policies are mutually exclusive; [`Strategy::from_flags`] maps the
/// original tool's two boolean parameters onto them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Row runs of length >= 2 first, then a vertical mop-up pass that
    /// also captures leftover single cells.
    HorizontalFirst,
    /// Column runs of length >= 2 first, then a horizontal mop-up pass.
    VerticalFirst,
    /// Repeatedly consume the largest candidate block in either direction.
    /// `prefer_vertical` only breaks equal-area ties: when true the taller
    /// block wins, when false the flatter one.
    LargestFirst { prefer_vertical: bool },
}

impl Strategy {
    /// Map the `(prefer_vertical, long_first)` flag pair onto a strategy.
    pub fn from_flags(prefer_vertical: bool, long_first: bool) -> Strategy {
        if long_first {
            Strategy::LargestFirst { prefer_vertical }
        } else if prefer_vertical {
            Strategy::VerticalFirst
        } else {
            Strategy::HorizontalFirst
        }
    }
}

/// Reduce the grid's wall cells to a list of non-overlapping blocks whose
/// union covers them exactly.
///
/// Consumes the grid: wall cells are overwritten with the consumed sentinel
/// as they are assigned. Output order is deterministic for a given grid and
/// strategy.
pub fn decompose(mut grid: Grid, strategy: Strategy) -> Result<Vec<Block>, Error> {
    match strategy {
        Strategy::HorizontalFirst => {
            let row_blocks = collect_runs(&grid, 2);
            for block in &row_blocks {
                grid.fill_block(block);
            }
            let transposed = grid.transpose();
            let col_blocks = collect_runs(&transposed, 1);
            Ok(row_blocks
                .into_iter()
                .chain(col_blocks.iter().map(Block::transposed))
                .collect())
        }

        Strategy::VerticalFirst => {
            let mut transposed = grid.transpose();
            let col_blocks = collect_runs(&transposed, 2);
            for block in &col_blocks {
                transposed.fill_block(block);
            }
            let remaining = transposed.transpose();
            let row_blocks = collect_runs(&remaining, 1);
            Ok(row_blocks
                .into_iter()
                .chain(col_blocks.iter().map(Block::transposed))
                .collect())
        }

        Strategy::LargestFirst { prefer_vertical } => {
            largest_first(grid, prefer_vertical)
        }
    }
}

/// Candidate blocks for the largest-first loop: every row run (min length 1,
/// so isolated cells always qualify) plus every column run of at least 2.
fn candidates(grid: &Grid) -> Vec<Block> {
    let mut blocks = collect_runs(grid, 1);
    let transposed = grid.transpose();
    blocks.extend(collect_runs(&transposed, 2).iter().map(Block::transposed));
    blocks
}

fn largest_first(mut grid: Grid, prefer_vertical: bool) -> Result<Vec<Block>, Error> {
    let coeff: i64 = if prefer_vertical { 1 } else { -1 };
    let mut result = Vec::new();

    // Every iteration consumes at least one wall cell, so the initial wall
    // count bounds the loop. Candidates are recomputed from scratch each
    // time; fine at this grid size.
    let budget = grid.wall_cells();
    for _ in 0..budget {
        let mut blocks = candidates(&grid);
        if blocks.is_empty() {
            break;
        }
        blocks.sort_by(|a, b| {
            b.area().cmp(&a.area()).then_with(|| {
                (coeff * b.height as i64).cmp(&(coeff * a.height as i64))
            })
        });
        let top = blocks[0];
        grid.fill_block(&top);
        result.push(top);
    }

    let remaining = grid.wall_cells();
    if remaining > 0 {
        return Err(Error::Stalled { remaining });
    }
    Ok(result)
}
