//! Grid-space and pixel-space geometry types, plus the emitter that maps
//! blocks and markers onto the play field.

use crate::grid::Grid;
use crate::Error;

/// A rectangle in grid coordinates covering one or more wall cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub row: usize,
    pub col: usize,
    pub width: usize,
    pub height: usize,
}

impl Block {
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Map a block found on a transposed grid back to the original
    /// coordinate space: row/col and width/height swap.
    pub fn transposed(&self) -> Block {
        Block {
            row: self.col,
            col: self.row,
            width: self.height,
            height: self.width,
        }
    }
}

/// Location of a single-cell marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

/// An obstacle rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// A cell-center position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPoint {
    pub x: u32,
    pub y: u32,
}

/// Coordinate-mapping constants shared with the game renderer.
///
/// The invariants the renderer assumes:
/// `2*margin_h + cell_size*width` is the play-field width in pixels, and
/// `2*margin_v + cell_size*height` its height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Cell size in pixels.
    pub cell_size: u32,
    /// Horizontal border margin in pixels.
    pub margin_h: u32,
    /// Vertical border margin in pixels.
    pub margin_v: u32,
}

impl Default for Config {
    /// The store floor: 23x13 cells of 44px inside a 1024x576 field.
    fn default() -> Self {
        Config {
            width: 23,
            height: 13,
            cell_size: 44,
            margin_h: 6,
            margin_v: 2,
        }
    }
}

impl Config {
    /// Full play-field width in pixels.
    pub fn field_width(&self) -> u32 {
        2 * self.margin_h + self.cell_size * self.width as u32
    }

    /// Full play-field height in pixels.
    pub fn field_height(&self) -> u32 {
        2 * self.margin_v + self.cell_size * self.height as u32
    }

    /// Check that a loaded grid has the dimensions this config maps.
    pub fn check_dimensions(&self, grid: &Grid) -> Result<(), Error> {
        if grid.width != self.width || grid.height != self.height {
            return Err(Error::DimensionMismatch {
                width: grid.width,
                height: grid.height,
                expected_width: self.width,
                expected_height: self.height,
            });
        }
        Ok(())
    }
}

/// Top-left pixel coordinate of a cell. Row and column zero land on the
/// field border itself rather than inside the margin, so border obstacles
/// visually touch the edge.
fn cell_origin(row: usize, col: usize, config: &Config) -> (u32, u32) {
    let x = if col == 0 {
        0
    } else {
        config.margin_h + col as u32 * config.cell_size
    };
    let y = if row == 0 {
        0
    } else {
        config.margin_v + row as u32 * config.cell_size
    };
    (x, y)
}

/// Convert a grid-space block into a pixel-space rectangle.
///
/// Blocks flush with a field edge absorb that edge's margin so no gap is
/// left between the obstacle and the border.
pub fn to_pixel_rect(block: &Block, config: &Config) -> PixelRect {
    let (x, y) = cell_origin(block.row, block.col, config);

    let mut width = config.cell_size * block.width as u32;
    if block.col == 0 {
        width += config.margin_h;
    }
    if block.col + block.width == config.width {
        width += config.margin_h;
    }

    let mut height = config.cell_size * block.height as u32;
    if block.row == 0 {
        height += config.margin_v;
    }
    if block.row + block.height == config.height {
        height += config.margin_v;
    }

    PixelRect {
        x,
        y,
        width,
        height,
    }
}

/// Pixel-space center of a single marker cell, for circular entities.
pub fn to_pixel_point(row: usize, col: usize, config: &Config) -> PixelPoint {
    let (x, y) = cell_origin(row, col, config);
    PixelPoint {
        x: x + config.cell_size / 2,
        y: y + config.cell_size / 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_field_size() {
        let config = Config::default();
        assert_eq!(config.field_width(), 1024);
        assert_eq!(config.field_height(), 576);
    }

    #[test]
    fn test_interior_block() {
        let config = Config::default();
        let rect = to_pixel_rect(
            &Block {
                row: 3,
                col: 5,
                width: 2,
                height: 1,
            },
            &config,
        );
        assert_eq!(rect.x, 6 + 5 * 44);
        assert_eq!(rect.y, 2 + 3 * 44);
        assert_eq!(rect.width, 2 * 44);
        assert_eq!(rect.height, 44);
    }

    #[test]
    fn test_left_edge_block_starts_at_zero() {
        let config = Config::default();
        let rect = to_pixel_rect(
            &Block {
                row: 4,
                col: 0,
                width: 1,
                height: 2,
            },
            &config,
        );
        assert_eq!(rect.x, 0);
        assert_eq!(rect.width, 44 + 6);
    }

    #[test]
    fn test_right_edge_block_reaches_field_edge() {
        let config = Config::default();
        let rect = to_pixel_rect(
            &Block {
                row: 4,
                col: 20,
                width: 3,
                height: 1,
            },
            &config,
        );
        assert_eq!(rect.x + rect.width, config.field_width());
    }

    #[test]
    fn test_full_row_spans_field() {
        let config = Config::default();
        let rect = to_pixel_rect(
            &Block {
                row: 0,
                col: 0,
                width: 23,
                height: 1,
            },
            &config,
        );
        assert_eq!(rect.x, 0);
        assert_eq!(rect.y, 0);
        assert_eq!(rect.width, config.field_width());
        assert_eq!(rect.height, 44 + 2);
    }

    #[test]
    fn test_pixel_point_center() {
        let config = Config::default();
        let p = to_pixel_point(2, 4, &config);
        assert_eq!(p.x, 6 + 4 * 44 + 22);
        assert_eq!(p.y, 2 + 2 * 44 + 22);
    }

    #[test]
    fn test_pixel_point_round_trip() {
        // Reversing the center arithmetic recovers the original cell.
        let config = Config::default();
        for (row, col) in [(1, 1), (2, 4), (12, 22), (5, 11)] {
            let p = to_pixel_point(row, col, &config);
            let back_col = (p.x - config.cell_size / 2 - config.margin_h) / config.cell_size;
            let back_row = (p.y - config.cell_size / 2 - config.margin_v) / config.cell_size;
            assert_eq!((back_row as usize, back_col as usize), (row, col));
        }
    }

    #[test]
    fn test_block_transposed() {
        let block = Block {
            row: 2,
            col: 7,
            width: 4,
            height: 1,
        };
        let t = block.transposed();
        assert_eq!(
            t,
            Block {
                row: 7,
                col: 2,
                width: 1,
                height: 4,
            }
        );
        assert_eq!(t.area(), block.area());
    }
}
