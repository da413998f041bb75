//! Coordinates, directions and raster iteration over a square grid.

use core::fmt;

/// A cell position on a board. Signed so that neighbours of border cells can
/// be expressed; such coordinates are simply out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

/// Unit steps towards the four orthogonal neighbours: up, left, down, right.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (-1, 0), (0, 1), (1, 0)];

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by (`dx`, `dy`).
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Orthogonal neighbours, no diagonals. Some may lie outside the board.
    pub fn neighbors(self) -> [Coord; 4] {
        DIRECTIONS.map(|(dx, dy)| self.offset(dx, dy))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Visits every cell of a `width`×`height` rectangle anchored at the origin
/// exactly once, in raster order, starting at an arbitrary cell and wrapping
/// from the last cell back to (0, 0).
#[derive(Debug, Clone)]
pub struct RasterIter {
    start: Coord,
    next: Option<Coord>,
    width: i32,
    height: i32,
}

impl RasterIter {
    /// Iterate the rectangle starting at (0, 0).
    pub fn new(width: i32, height: i32) -> Self {
        Self::starting_at(Coord::new(0, 0), width, height)
    }

    /// Iterate the rectangle starting at `start`. Yields nothing when the
    /// rectangle is empty or `start` lies outside it.
    pub fn starting_at(start: Coord, width: i32, height: i32) -> Self {
        let inside = (0..width).contains(&start.x) && (0..height).contains(&start.y);
        Self {
            start,
            next: inside.then_some(start),
            width,
            height,
        }
    }
}

impl Iterator for RasterIter {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next?;
        let mut following = current.offset(1, 0);
        if following.x >= self.width {
            following.x = 0;
            following.y += 1;
            if following.y >= self.height {
                following.y = 0;
            }
        }
        self.next = (following != self.start).then_some(following);
        Some(current)
    }
}
