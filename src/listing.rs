//! Builds the level-definition source text that gets pasted into the game.

use std::fmt::Write;

use crate::geometry::{to_pixel_point, to_pixel_rect, Block, Config, Point};

/// Collision radius of every collectible/hazard piece, in pixels.
const PIECE_RADIUS: u32 = 40;

/// Sprite asset for collectible items (`O` markers).
const ITEM_SPRITE: &str = "res/imgs/items/paper.svg";

/// Sprite asset for hazards (`C` markers).
const HAZARD_SPRITE: &str = "res/imgs/virus.svg";

/// Render items, hazards, and obstacle blocks as level-definition source.
pub fn build(items: &[Point], hazards: &[Point], blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();

    out.push_str("items: [\n");
    for item in items {
        push_piece(&mut out, item, ITEM_SPRITE, config);
    }
    out.push_str("],\n");

    out.push_str("viruses: [\n");
    for hazard in hazards {
        push_piece(&mut out, hazard, HAZARD_SPRITE, config);
    }
    out.push_str("],\n");

    out.push_str("\n// Obstacles:\n");
    for block in blocks {
        let rect = to_pixel_rect(block, config);
        let _ = writeln!(
            out,
            "new Obstacle({}, {}, {}, {}),",
            rect.x, rect.y, rect.width, rect.height
        );
    }

    out
}

fn push_piece(out: &mut String, point: &Point, sprite: &str, config: &Config) {
    let center = to_pixel_point(point.row, point.col, config);
    let _ = writeln!(
        out,
        "new Piece({}, {}, {}, '{}'),",
        center.x, center.y, PIECE_RADIUS, sprite
    );
}
