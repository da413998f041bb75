//! Common types for the engine: board sides, cell states, shot outcomes and errors.

use core::fmt;
use thiserror::Error;

use crate::game::Phase;

/// One of the two boards in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    /// The human player's own board ("self").
    Player,
    /// The computer opponent's board ("them").
    Opponent,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Player, Side::Opponent];

    /// The side across the table.
    pub fn other(self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Player => f.write_str("self"),
            Side::Opponent => f.write_str("them"),
        }
    }
}

/// Engine-side state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    /// Ship segment that has not been fired upon.
    Occupied,
    /// Not fired upon, but next to a placed or sunk ship.
    Near,
    /// Fired upon, was water.
    Miss,
    /// Fired upon, was a ship segment.
    Hit,
}

impl CellState {
    /// Neither fired upon nor known to be water. Only such cells are worth a
    /// blind shot.
    pub fn is_open(self) -> bool {
        matches!(self, CellState::Empty | CellState::Occupied)
    }
}

/// Result of firing at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The cell was fired upon before; nothing changed.
    AlreadyDecided,
    Miss,
    Hit,
    /// The shot hit the last intact segment of a ship.
    HitAndSunk,
}

impl ShotOutcome {
    /// `Hit` or `HitAndSunk`: the shooter keeps the turn.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::HitAndSunk)
    }
}

/// Errors returned by board, placement and session operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinate ({x},{y}) is outside the board")]
    InvalidCoordinate { x: i32, y: i32 },
    #[error("cannot place a ship at ({x},{y}): cells are taken or too close to another ship")]
    ShipBlocked { x: i32, y: i32 },
    #[error("no legal position left for a ship of size {size}")]
    PlacementExhausted { size: usize },
    #[error("could not place the {side} fleet in {attempts} attempts")]
    FleetInfeasible { side: Side, attempts: usize },
    #[error("opponent found no cell to fire at")]
    NoTargetAvailable,
    #[error("operation not allowed in phase {phase:?}")]
    WrongPhase { phase: Phase },
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
