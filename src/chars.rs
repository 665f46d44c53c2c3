//! Cell-symbol constants and classification predicates.

/// Impassable wall cell, merged into obstacle rectangles.
pub const WALL: char = 'X';

/// Walkable floor cell.
pub const OPEN: char = '.';

/// Collectible item marker.
pub const ITEM: char = 'O';

/// Hazard (virus) marker.
pub const HAZARD: char = 'C';

/// Sentinel for a wall cell already assigned to a block.
/// Only appears in grids mid-decomposition, never in input.
pub const CONSUMED: char = '-';

pub fn is_wall(c: char) -> bool {
    c == WALL
}

/// True for every symbol a map file may contain after normalization.
pub fn is_recognized(c: char) -> bool {
    matches!(c, WALL | OPEN | ITEM | HAZARD)
}
