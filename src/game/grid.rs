//! Coordinate math on a square board whose edges wrap around.

use super::action::Direction;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move coordinate by delta, without wrapping
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Bring a component that stepped one cell off the board back onto it.
///
/// Movement is one cell per tick, so the only out-of-range inputs are `-1`
/// and `size`.
pub fn wrap(value: i32, size: i32) -> i32 {
    if value < 0 {
        value + size
    } else if value >= size {
        value - size
    } else {
        value
    }
}

/// Square toroidal board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    size: i32,
}

impl Grid {
    pub fn new(size: usize) -> Self {
        Self { size: size as i32 }
    }

    pub fn size(&self) -> usize {
        self.size as usize
    }

    pub fn cell_count(&self) -> usize {
        self.size() * self.size()
    }

    pub fn contains(&self, pos: Coordinate) -> bool {
        (0..self.size).contains(&pos.row) && (0..self.size).contains(&pos.col)
    }

    /// One unit step in `direction`, wrapped on both axes
    pub fn step(&self, pos: Coordinate, direction: Direction) -> Coordinate {
        let (d_row, d_col) = direction.delta();
        let moved = pos.moved_by(d_row, d_col);
        Coordinate::new(wrap(moved.row, self.size), wrap(moved.col, self.size))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coordinate::new(row, col)))
    }
}

/// Where one coordinate sits relative to another along a single axis.
///
/// A difference of exactly one is a plain neighbor. Any larger magnitude can
/// only come from a wrap across the board edge, so its sign is inverted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offset {
    /// Lower index side (left / above), directly or across the wrap
    Before,
    Level,
    /// Higher index side (right / below), directly or across the wrap
    After,
}

impl Offset {
    pub fn of(delta: i32) -> Self {
        match delta {
            0 => Offset::Level,
            -1 => Offset::Before,
            1 => Offset::After,
            d if d > 1 => Offset::Before,
            _ => Offset::After,
        }
    }
}

/// Relative placement of two cells, one of nine cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjacency {
    pub horizontal: Offset,
    pub vertical: Offset,
}

impl Adjacency {
    /// Placement of `a` as seen from `b`
    pub fn between(a: Coordinate, b: Coordinate) -> Self {
        Self {
            horizontal: Offset::of(a.col - b.col),
            vertical: Offset::of(a.row - b.row),
        }
    }

    /// Horizontal offsets win over vertical ones; coincident cells have no direction.
    pub fn direction(&self) -> Option<Direction> {
        use Offset::*;

        match (self.horizontal, self.vertical) {
            (Before, Before) | (Before, Level) | (Before, After) => Some(Direction::Left),
            (After, Before) | (After, Level) | (After, After) => Some(Direction::Right),
            (Level, Before) => Some(Direction::Up),
            (Level, After) => Some(Direction::Down),
            (Level, Level) => None,
        }
    }
}

/// Direction of the step that leads from `b` to `a`, wrap-aware.
pub fn classify_adjacency(a: Coordinate, b: Coordinate) -> Option<Direction> {
    Adjacency::between(a, b).direction()
}
