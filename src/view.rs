//! Boundary with the rendering/input collaborator.
//!
//! The engine reports visible cell changes and semantic events; turning them
//! into pixels, markup or prose is the collaborator's job.

use crate::common::{ShotOutcome, Side};
use crate::grid::Coord;

/// What a cell should look like to the person at the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Opponent cell nobody has fired at.
    #[default]
    Hidden,
    /// Own cell without a ship.
    Water,
    /// Intact ship segment: own ships, or the opponent's survivors at game end.
    Ship,
    Miss,
    Hit,
    /// Segment of a ship that has gone down.
    Sunk,
}

/// A shot fired at `side`'s board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Shot {
    pub side: Side,
    pub coord: Coord,
    pub outcome: ShotOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    ShipPlaced { side: Side, size: usize },
    Shot(Shot),
    GameOver { winner: Side },
}

/// Sink for everything the engine wants shown.
pub trait GameView {
    /// A cell on `side`'s board changed its visible state.
    fn show_cell(&mut self, side: Side, coord: Coord, view: CellView);

    /// Something worth a status line happened.
    fn announce(&mut self, event: &GameEvent);
}

/// [`GameView`] that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullView;

impl GameView for NullView {
    fn show_cell(&mut self, _side: Side, _coord: Coord, _view: CellView) {}

    fn announce(&mut self, _event: &GameEvent) {}
}
