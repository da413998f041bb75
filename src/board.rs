//! Board state for one side: the cell grid, hit resolution and fleet counters.

use alloc::{vec, vec::Vec};
use core::fmt;

use crate::common::{CellState, GameError, ShotOutcome};
use crate::grid::{Coord, RasterIter, DIRECTIONS};
use crate::ship::{Orientation, PlacedShip};

/// Remaining ship segments and ships afloat per size.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipStats {
    remaining_cells: usize,
    afloat: Vec<usize>,
}

impl ShipStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intact ship segments left on the board.
    pub fn remaining_cells(&self) -> usize {
        self.remaining_cells
    }

    /// Ships of `size` that are not sunk yet.
    pub fn afloat(&self, size: usize) -> usize {
        self.afloat.get(size).copied().unwrap_or(0)
    }

    /// Ships of any size that are not sunk yet.
    pub fn ships_afloat(&self) -> usize {
        self.afloat.iter().sum()
    }

    fn add(&mut self, size: usize) {
        self.remaining_cells += size;
        if self.afloat.len() <= size {
            self.afloat.resize(size + 1, 0);
        }
        self.afloat[size] += 1;
    }

    fn hit(&mut self) {
        self.remaining_cells = self.remaining_cells.saturating_sub(1);
    }

    fn sunk(&mut self, size: usize) {
        if let Some(count) = self.afloat.get_mut(size) {
            *count = count.saturating_sub(1);
        }
    }
}

impl fmt::Display for ShipStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "total:{} ships:", self.remaining_cells)?;
        for count in self.afloat.iter().skip(1).rev() {
            write!(f, " {}", count)?;
        }
        Ok(())
    }
}

/// One side's N×N grid of cell states.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    stats: ShipStats,
}

impl Board {
    /// Create an empty `size`×`size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
            stats: ShipStats::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn stats(&self) -> &ShipStats {
        &self.stats
    }

    /// Intact ship segments left.
    pub fn remaining(&self) -> usize {
        self.stats.remaining_cells()
    }

    /// True once every ship segment has been hit. A board with no fleet
    /// counts as destroyed.
    pub fn is_destroyed(&self) -> bool {
        self.stats.remaining_cells() == 0
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        let n = self.size as i32;
        if (0..n).contains(&coord.x) && (0..n).contains(&coord.y) {
            Some(coord.y as usize * self.size + coord.x as usize)
        } else {
            None
        }
    }

    /// State at `coord`. Anything outside the board reads as `Miss`, so border
    /// cells look like they already have resolved neighbours.
    pub fn get(&self, coord: Coord) -> CellState {
        self.index(coord)
            .map_or(CellState::Miss, |index| self.cells[index])
    }

    /// Overwrite the state at `coord`; ignored outside the board.
    pub fn set(&mut self, coord: Coord, state: CellState) {
        if let Some(index) = self.index(coord) {
            self.cells[index] = state;
        }
    }

    /// Reset every cell and the fleet counters.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
        self.stats = ShipStats::new();
    }

    /// All coordinates in raster order.
    pub fn coords(&self) -> RasterIter {
        RasterIter::new(self.size as i32, self.size as i32)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Whether a ship of `size` laid along `orientation` from `origin` would
    /// cover only `Empty` cells and keep clear of every other ship.
    pub fn fits(&self, origin: Coord, size: usize, orientation: Orientation) -> bool {
        if size == 0 {
            return false;
        }
        let ship = PlacedShip::new(origin, size, orientation);
        ship.cells().all(|c| self.get(c) == CellState::Empty)
            && ship
                .buffer()
                .all(|c| !matches!(self.get(c), CellState::Occupied | CellState::Hit))
    }

    /// Place a ship at an explicit position. The ship's buffer is marked
    /// `Near` until [`Board::clear_near_markers`] is called.
    pub fn place_ship(
        &mut self,
        origin: Coord,
        size: usize,
        orientation: Orientation,
    ) -> Result<PlacedShip, GameError> {
        if !self.contains(origin) {
            return Err(GameError::InvalidCoordinate {
                x: origin.x,
                y: origin.y,
            });
        }
        if !self.fits(origin, size, orientation) {
            return Err(GameError::ShipBlocked {
                x: origin.x,
                y: origin.y,
            });
        }
        let ship = PlacedShip::new(origin, size, orientation);
        self.mark_ship(&ship);
        Ok(ship)
    }

    pub(crate) fn mark_ship(&mut self, ship: &PlacedShip) {
        for c in ship.cells() {
            self.set(c, CellState::Occupied);
        }
        for c in ship.buffer() {
            if self.get(c) == CellState::Empty {
                self.set(c, CellState::Near);
            }
        }
        self.stats.add(ship.size());
    }

    /// Turn every `Near` buffer cell back into `Empty` once a fleet is placed.
    pub fn clear_near_markers(&mut self) {
        for cell in self.cells.iter_mut() {
            if *cell == CellState::Near {
                *cell = CellState::Empty;
            }
        }
    }

    /// Fire at `coord` and report what happened.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, GameError> {
        let index = self.index(coord).ok_or(GameError::InvalidCoordinate {
            x: coord.x,
            y: coord.y,
        })?;
        match self.cells[index] {
            CellState::Miss | CellState::Hit => Ok(ShotOutcome::AlreadyDecided),
            CellState::Empty | CellState::Near => {
                self.cells[index] = CellState::Miss;
                Ok(ShotOutcome::Miss)
            }
            CellState::Occupied => {
                self.cells[index] = CellState::Hit;
                self.stats.hit();
                Ok(self.resolve_hit(coord))
            }
        }
    }

    // Walk outwards along each axis over hit segments. An intact segment
    // anywhere in the run means the ship is still afloat.
    fn resolve_hit(&mut self, coord: Coord) -> ShotOutcome {
        let mut wreck = vec![coord];
        for (dx, dy) in DIRECTIONS {
            let mut p = coord.offset(dx, dy);
            loop {
                match self.get(p) {
                    CellState::Hit => {
                        wreck.push(p);
                        p = p.offset(dx, dy);
                    }
                    CellState::Occupied => return ShotOutcome::Hit,
                    _ => break,
                }
            }
        }
        for &c in &wreck {
            for n in c.neighbors() {
                if self.get(n) == CellState::Empty {
                    self.set(n, CellState::Near);
                }
            }
        }
        self.stats.sunk(wreck.len());
        log::debug!("ship of size {} sunk at {}", wreck.len(), coord);
        ShotOutcome::HitAndSunk
    }

    /// Segments of the ship covering `coord`, hit or not. Empty when `coord`
    /// holds no ship.
    pub fn ship_cells(&self, coord: Coord) -> Vec<Coord> {
        let is_ship = |s: CellState| matches!(s, CellState::Occupied | CellState::Hit);
        if !is_ship(self.get(coord)) {
            return Vec::new();
        }
        let mut cells = vec![coord];
        for (dx, dy) in DIRECTIONS {
            let mut p = coord.offset(dx, dy);
            while is_ship(self.get(p)) {
                cells.push(p);
                p = p.offset(dx, dy);
            }
        }
        cells.sort_unstable();
        cells
    }
}
