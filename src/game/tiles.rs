//! Tile selection for snake segments.
//!
//! Every segment is drawn with a tile whose shape depends on where its
//! neighbors are. The tail points toward the next segment, the head toward the
//! previous one, and body segments join the previous and the next.

use std::fmt;

use super::action::Direction;
use super::grid::{Coordinate, classify_adjacency};

/// Asset names for every tile the board can show
pub const TILE_ASSETS: [&str; 22] = [
    "ground", "food", "tail_d", "tail_u", "tail_l", "tail_r", "head_d", "head_u", "head_l",
    "head_r", "body_l_r", "body_r_l", "body_d_u", "body_u_d", "body_l_d", "body_l_u", "body_r_d",
    "body_r_u", "body_u_l", "body_u_r", "body_d_l", "body_d_r",
];

/// Shape of one snake segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Points toward the next segment
    Tail(Direction),
    /// Points toward the previous segment
    Head(Direction),
    /// Toward the previous segment, then toward the next one
    Body(Direction, Direction),
}

impl Tile {
    /// File stem of the tile image, e.g. `body_l_d`
    pub fn asset_name(&self) -> String {
        match self {
            Tile::Tail(dir) => format!("tail_{}", dir.suffix()),
            Tile::Head(dir) => format!("head_{}", dir.suffix()),
            Tile::Body(prev, next) => format!("body_{}_{}", prev.suffix(), next.suffix()),
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.asset_name())
    }
}

/// Direction from `segment` toward `neighbor`
fn toward(segment: Coordinate, neighbor: Coordinate) -> Option<Direction> {
    classify_adjacency(neighbor, segment)
}

/// Tile for the segment at `index`, where index 0 is the tail.
///
/// `None` when the index is out of range or a neighbor shares the segment's
/// cell, which a live snake never produces.
pub fn tile_for(segments: &[Coordinate], index: usize) -> Option<Tile> {
    let segment = *segments.get(index)?;
    let last = segments.len() - 1;

    if last == 0 {
        return None;
    }

    match index {
        0 => toward(segment, segments[1]).map(Tile::Tail),
        i if i == last => toward(segment, segments[i - 1]).map(Tile::Head),
        i => {
            let prev = toward(segment, segments[i - 1])?;
            let next = toward(segment, segments[i + 1])?;
            Some(Tile::Body(prev, next))
        }
    }
}

/// Tiles for the whole snake, tail first
pub fn orient(segments: &[Coordinate]) -> Vec<Option<Tile>> {
    (0..segments.len()).map(|i| tile_for(segments, i)).collect()
}
