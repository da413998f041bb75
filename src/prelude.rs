//! Commonly used types and utilities for ease of import.

pub use crate::{
    pick_target, Board, CellState, CellView, Coord, GameConfig, GameError, GameEvent, GameView,
    NullView, Phase, Session, ShotOutcome, Side, Targeting, TurnReport,
};

#[cfg(feature = "std")]
pub use crate::cli::TextView;
