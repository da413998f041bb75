//! Ship orientation and placed-ship geometry.

use crate::grid::Coord;

/// Axis a ship is laid along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Step from one ship segment to the next.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A ship laid on a board: its bow, length and axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedShip {
    origin: Coord,
    size: usize,
    orientation: Orientation,
}

impl PlacedShip {
    pub fn new(origin: Coord, size: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            size,
            orientation,
        }
    }

    /// Top-left segment of the ship.
    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments from bow to stern.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let (dx, dy) = self.orientation.delta();
        let origin = self.origin;
        (0..self.size as i32).map(move |i| origin.offset(dx * i, dy * i))
    }

    /// Buffer cells that must stay free of other ships: the cell before the
    /// bow, the cell after the stern and both flanks of every segment.
    pub fn buffer(&self) -> impl Iterator<Item = Coord> {
        let (dx, dy) = self.orientation.delta();
        let origin = self.origin;
        let len = self.size as i32;
        let ends = [origin.offset(-dx, -dy), origin.offset(dx * len, dy * len)];
        let flanks = self.cells().flat_map(move |c| [c.offset(dy, dx), c.offset(-dy, -dx)]);
        ends.into_iter().chain(flanks)
    }
}
