//! Random fleet placement with a one-cell buffer between ships.

use alloc::vec::Vec;
use rand::Rng;

use crate::board::Board;
use crate::common::GameError;
use crate::grid::{Coord, RasterIter};
use crate::ship::{Orientation, PlacedShip};

/// Place one ship of `size` along `orientation` at a random legal position.
///
/// The scan starts at a uniformly random top-left cell and walks the whole
/// legal range in raster order, so a position is found whenever one exists.
pub fn place_random_ship<R: Rng + ?Sized>(
    board: &mut Board,
    size: usize,
    orientation: Orientation,
    rng: &mut R,
) -> Result<PlacedShip, GameError> {
    if size == 0 || size > board.size() {
        return Err(GameError::PlacementExhausted { size });
    }
    let (dx, dy) = orientation.delta();
    let span = size as i32 - 1;
    let width = board.size() as i32 - dx * span;
    let height = board.size() as i32 - dy * span;
    let start = Coord::new(rng.random_range(0..width), rng.random_range(0..height));

    for origin in RasterIter::starting_at(start, width, height) {
        if board.fits(origin, size, orientation) {
            let ship = PlacedShip::new(origin, size, orientation);
            board.mark_ship(&ship);
            log::debug!(
                "ship of size {} placed at {} {:?} (scan started at {})",
                size,
                origin,
                orientation,
                start
            );
            return Ok(ship);
        }
    }
    Err(GameError::PlacementExhausted { size })
}

/// Place every ship of `fleet` on `board`, largest first.
///
/// Each ship gets a random axis; if that axis has no room left the
/// perpendicular one is tried before giving up. On success the temporary
/// `Near` buffer is cleared. On failure the board is left partially filled.
pub fn place_fleet<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[usize],
    rng: &mut R,
) -> Result<Vec<PlacedShip>, GameError> {
    let mut sizes = fleet.to_vec();
    sizes.sort_unstable_by(|a, b| b.cmp(a));

    let mut placed = Vec::with_capacity(sizes.len());
    for size in sizes {
        let orientation = if rng.random_bool(0.5) {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let ship = match place_random_ship(board, size, orientation, rng) {
            Ok(ship) => ship,
            Err(_) => place_random_ship(board, size, orientation.perpendicular(), rng)?,
        };
        placed.push(ship);
    }
    board.clear_near_markers();
    Ok(placed)
}

/// Clear `board` and place `fleet`, starting over from an empty board up to
/// `attempts` times. Returns the last placement error once the bound is hit.
pub fn place_fleet_with_retries<R: Rng + ?Sized>(
    board: &mut Board,
    fleet: &[usize],
    attempts: usize,
    rng: &mut R,
) -> Result<Vec<PlacedShip>, GameError> {
    let mut last_err = GameError::InvalidConfig("placement needs at least one attempt");
    for attempt in 1..=attempts {
        board.clear();
        match place_fleet(board, fleet, rng) {
            Ok(ships) => return Ok(ships),
            Err(err) => {
                log::warn!("fleet placement attempt {}/{} failed: {}", attempt, attempts, err);
                last_err = err;
            }
        }
    }
    board.clear();
    Err(last_err)
}
