// Opponent targeting: hunt for open water until something is hit, then
// follow the hit run along its axis until the ship sinks.

use alloc::{vec, vec::Vec};
use rand::Rng;

use crate::{
    board::Board,
    common::{CellState, ShotOutcome},
    grid::{Coord, DIRECTIONS},
};

/// What the shooter remembers between shots: the latest hit on a ship that
/// is still afloat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Targeting {
    last_hit: Option<Coord>,
}

impl Targeting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_hit(&self) -> Option<Coord> {
        self.last_hit
    }

    /// Update the memory with the outcome of a shot at `coord`.
    pub fn record(&mut self, coord: Coord, outcome: ShotOutcome) {
        match outcome {
            ShotOutcome::Hit => self.last_hit = Some(coord),
            ShotOutcome::HitAndSunk => self.last_hit = None,
            ShotOutcome::Miss | ShotOutcome::AlreadyDecided => {}
        }
    }

    pub fn clear(&mut self) {
        self.last_hit = None;
    }
}

/// Choose the next cell to fire at on `board`.
///
/// With a remembered hit this follows it up; when the hit run is boxed in on
/// every side the memory is dropped and the search falls back to hunting.
/// Returns `None` only when no open cell is left anywhere.
pub fn pick_target<R: Rng + ?Sized>(
    board: &Board,
    memory: &mut Targeting,
    rng: &mut R,
) -> Option<Coord> {
    if let Some(hit) = memory.last_hit() {
        let candidates = follow_up_candidates(board, hit);
        if let Some(target) = choose(&candidates, rng) {
            return Some(target);
        }
        log::debug!("nothing left to try around {}, back to hunting", hit);
        memory.clear();
    }
    choose(&hunt_candidates(board), rng)
}

/// Cells just beyond both ends of the hit run through `hit`. A run that is a
/// single cell yields all four neighbours. Cells known to be water (or off
/// the board) are dropped.
pub fn follow_up_candidates(board: &Board, hit: Coord) -> Vec<Coord> {
    if board.get(hit) != CellState::Hit {
        return Vec::new();
    }
    let (mut min, mut max) = (hit, hit);
    for (dx, dy) in DIRECTIONS {
        let mut p = hit.offset(dx, dy);
        while board.get(p) == CellState::Hit {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            p = p.offset(dx, dy);
        }
    }
    let ends = if min.x != max.x {
        vec![min.offset(-1, 0), max.offset(1, 0)]
    } else if min.y != max.y {
        vec![min.offset(0, -1), max.offset(0, 1)]
    } else {
        vec![
            min.offset(-1, 0),
            max.offset(1, 0),
            min.offset(0, -1),
            max.offset(0, 1),
        ]
    };
    ends.into_iter()
        .filter(|&c| board.get(c) != CellState::Miss)
        .collect()
}

/// Open cells with the largest number of open neighbours. Favouring wide
/// unexplored water spreads blind shots out across the board.
pub fn hunt_candidates(board: &Board) -> Vec<Coord> {
    let mut best = 0;
    let mut cells = Vec::new();
    for p in board.coords() {
        if !board.get(p).is_open() {
            continue;
        }
        let open = p
            .neighbors()
            .iter()
            .filter(|&&n| board.get(n).is_open())
            .count();
        if open > best {
            best = open;
            cells.clear();
            cells.push(p);
        } else if open == best {
            cells.push(p);
        }
    }
    cells
}

fn choose<R: Rng + ?Sized>(cells: &[Coord], rng: &mut R) -> Option<Coord> {
    if cells.is_empty() {
        None
    } else {
        Some(cells[rng.random_range(0..cells.len())])
    }
}
