//! Run collection: maximal horizontal wall runs.
//!
//! Vertical runs are found by handing this same scanner the transposed grid
//! and swapping the resulting blocks back.

use crate::chars::is_wall;
use crate::geometry::Block;
use crate::grid::Grid;

/// Scan every row left to right for maximal contiguous wall runs and emit a
/// height-1 block for each run of at least `min_length` cells.
///
/// Shorter runs are dropped, not deferred; a later pass with a smaller
/// `min_length` (or the transposed direction) picks the cells up. Output
/// order is top-to-bottom, left-to-right, so results are deterministic for
/// a given grid.
pub fn collect_runs(grid: &Grid, min_length: usize) -> Vec<Block> {
    let mut blocks = Vec::new();
    for row in 0..grid.height {
        let cells = grid.row(row);
        let mut col = 0;
        while col < grid.width {
            if is_wall(cells[col]) {
                let start = col;
                while col < grid.width && is_wall(cells[col]) {
                    col += 1;
                }
                let length = col - start;
                if length >= min_length {
                    blocks.push(Block {
                        row,
                        col: start,
                        width: length,
                        height: 1,
                    });
                }
            } else {
                col += 1;
            }
        }
    }
    blocks
}
