//! levelcut — decompose ASCII level maps into obstacle rectangles and
//! entity points.
//!
//! An offline tool for the store-floor arcade game: it reads a hand-drawn
//! map where `X` is wall, `.` is open floor, `O` marks a collectible item
//! and `C` a hazard, merges the wall cells into a covering set of
//! non-overlapping rectangles, and emits the pixel-space level-definition
//! source the game consumes.
//!
//! # Example
//!
//! ```rust
//! use levelcut::{decompose, Grid, Strategy};
//!
//! let grid = Grid::parse(".X.\nXXX\n.X.").unwrap();
//! let blocks = decompose(grid, Strategy::from_flags(false, true)).unwrap();
//! assert_eq!(blocks.len(), 3);
//! ```

pub mod chars;
mod decompose;
mod geometry;
mod grid;
mod listing;
mod runs;

pub use decompose::{decompose, Strategy};
pub use geometry::{to_pixel_point, to_pixel_rect, Block, Config, PixelPoint, PixelRect, Point};
pub use grid::Grid;
pub use runs::collect_runs;

/// Errors produced while loading a map or decomposing it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No rows survived normalization.
    #[error("map contains no rows after stripping decoration")]
    EmptyMap,
    /// Rows have differing lengths after normalization.
    #[error("row {row} has {found} columns, expected {expected}")]
    UnevenRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell holds a character outside the map alphabet.
    #[error("unrecognized symbol {ch:?} at row {row}, col {col}")]
    UnknownSymbol { ch: char, row: usize, col: usize },
    /// The map's dimensions disagree with the configured play field.
    #[error("map is {width}x{height} cells, config expects {expected_width}x{expected_height}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected_width: usize,
        expected_height: usize,
    },
    /// Internal invariant violation: the candidate set ran dry while wall
    /// cells were still unassigned.
    #[error("decomposition stalled with {remaining} wall cells unassigned")]
    Stalled { remaining: usize },
}

/// Parse a map, decompose its walls, and build the full pasteable listing.
///
/// The grid must match the dimensions in `config`, since the pixel mapping
/// (margins, edge extension) is only meaningful for the play field the
/// config describes.
pub fn generate_listing(input: &str, config: &Config, strategy: Strategy) -> Result<String, Error> {
    let grid = Grid::parse(input)?;
    config.check_dimensions(&grid)?;
    let items = grid.find_symbol(chars::ITEM);
    let hazards = grid.find_symbol(chars::HAZARD);
    let blocks = decompose(grid, strategy)?;
    Ok(listing::build(&items, &hazards, &blocks, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_config() -> Config {
        Config {
            width: 5,
            height: 3,
            cell_size: 10,
            margin_h: 4,
            margin_v: 2,
        }
    }

    #[test]
    fn test_generate_listing_end_to_end() {
        let map = "XXXXX\nX.O.C\nXXXXX";
        let listing = generate_listing(map, &tiny_config(), Strategy::HorizontalFirst).unwrap();
        assert!(listing.contains("items: ["));
        assert!(listing.contains("viruses: ["));
        // O at (1, 2): x = 4 + 2*10 + 5 = 29, y = 2 + 1*10 + 5 = 17
        assert!(listing.contains("new Piece(29, 17, 40, 'res/imgs/items/paper.svg'),"));
        // C at (1, 4): x = 4 + 4*10 + 5 = 49
        assert!(listing.contains("new Piece(49, 17, 40, 'res/imgs/virus.svg'),"));
        // Top row spans the whole 58px field, absorbing both margins.
        assert!(listing.contains("new Obstacle(0, 0, 58, 12),"));
    }

    #[test]
    fn test_generate_listing_rejects_wrong_dimensions() {
        let err = generate_listing("XX\nXX", &tiny_config(), Strategy::HorizontalFirst)
            .unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_generate_listing_rejects_bad_symbol() {
        let err = generate_listing("XXZXX\nX...X\nXXXXX", &tiny_config(), Strategy::HorizontalFirst)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownSymbol { ch: 'Z', .. }));
    }
}
