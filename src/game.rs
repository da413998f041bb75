use alloc::vec::Vec;
use rand::Rng;

use crate::{
    ai::{self, Targeting},
    board::Board,
    common::{CellState, GameError, ShotOutcome, Side},
    config::GameConfig,
    grid::Coord,
    placement,
    ship::PlacedShip,
    view::{CellView, GameEvent, GameView, Shot},
};

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// No fleets on the boards yet.
    Setup,
    /// Fleets placed; the player may start or re-place.
    Placed,
    /// Shots are accepted on the opponent's board.
    InPlay,
    /// One fleet is gone.
    Ended { winner: Side },
}

/// Every shot fired while handling one player action, in order. The first
/// shot is the player's; any others are the opponent's reply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    pub shots: Vec<Shot>,
    pub winner: Option<Side>,
}

impl TurnReport {
    /// Outcome of the player's own shot.
    pub fn player_outcome(&self) -> Option<ShotOutcome> {
        self.shots.first().map(|s| s.outcome)
    }

    /// Shots the opponent fired in reply.
    pub fn opponent_shots(&self) -> &[Shot] {
        self.shots.get(1..).unwrap_or(&[])
    }
}

/// One game: both boards, the phase and the opponent's targeting memory.
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    player: Board,
    opponent: Board,
    targeting: Targeting,
    phase: Phase,
}

impl Session {
    /// Create a session with two empty boards.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        Ok(Self {
            config,
            player: Board::new(config.board_size),
            opponent: Board::new(config.board_size),
            targeting: Targeting::new(),
            phase: Phase::Setup,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Ended { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn board(&self, side: Side) -> &Board {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    fn board_mut(&mut self, side: Side) -> &mut Board {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// The opponent's memory of its latest unresolved hit.
    pub fn targeting(&self) -> &Targeting {
        &self.targeting
    }

    /// Clear both boards and place fresh fleets, opponent first.
    ///
    /// Allowed before the game ends; re-placing mid-game starts over. Each
    /// board gets `placement_attempts` whole-fleet attempts. If they run out
    /// the session is left in `Setup` with empty boards.
    pub fn place_fleets<R, V>(&mut self, rng: &mut R, view: &mut V) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
        V: GameView + ?Sized,
    {
        if let Phase::Ended { .. } = self.phase {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        self.reset(view);

        let fleet = self.config.fleet();
        let mut placed: Vec<(Side, Vec<PlacedShip>)> = Vec::with_capacity(2);
        for side in [Side::Opponent, Side::Player] {
            let attempts = self.config.placement_attempts;
            let board = self.board_mut(side);
            match placement::place_fleet_with_retries(board, &fleet, attempts, rng) {
                Ok(ships) => placed.push((side, ships)),
                Err(err) => {
                    log::error!("{} fleet placement gave up: {}", side, err);
                    self.player.clear();
                    self.opponent.clear();
                    return Err(GameError::FleetInfeasible { side, attempts });
                }
            }
        }

        for (side, ships) in &placed {
            for ship in ships {
                if *side == Side::Player {
                    for c in ship.cells() {
                        view.show_cell(*side, c, CellView::Ship);
                    }
                }
                view.announce(&GameEvent::ShipPlaced {
                    side: *side,
                    size: ship.size(),
                });
            }
        }
        self.phase = Phase::Placed;
        log::info!("all ships are placed");
        Ok(())
    }

    /// Begin play once fleets are placed.
    pub fn start(&mut self) -> Result<(), GameError> {
        if self.phase != Phase::Placed {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        self.phase = Phase::InPlay;
        log::info!("game started");
        Ok(())
    }

    /// Fire the player's shot at the opponent's board.
    ///
    /// A miss hands the turn over and the opponent fires until it misses or
    /// wins, all before this returns. Firing at a resolved cell is reported
    /// as `AlreadyDecided` and changes nothing.
    pub fn fire<R, V>(
        &mut self,
        coord: Coord,
        rng: &mut R,
        view: &mut V,
    ) -> Result<TurnReport, GameError>
    where
        R: Rng + ?Sized,
        V: GameView + ?Sized,
    {
        if self.phase != Phase::InPlay {
            return Err(GameError::WrongPhase { phase: self.phase });
        }
        let mut report = TurnReport::default();
        let outcome = self.shoot(Side::Opponent, coord, view, &mut report)?;
        match outcome {
            ShotOutcome::AlreadyDecided => {}
            ShotOutcome::Miss => self.opponent_turn(rng, view, &mut report)?,
            ShotOutcome::Hit | ShotOutcome::HitAndSunk => {
                if self.opponent.is_destroyed() {
                    self.finish(Side::Player, view);
                }
            }
        }
        report.winner = self.winner();
        Ok(report)
    }

    fn opponent_turn<R, V>(
        &mut self,
        rng: &mut R,
        view: &mut V,
        report: &mut TurnReport,
    ) -> Result<(), GameError>
    where
        R: Rng + ?Sized,
        V: GameView + ?Sized,
    {
        loop {
            let target = ai::pick_target(&self.player, &mut self.targeting, rng)
                .ok_or(GameError::NoTargetAvailable)?;
            let outcome = self.shoot(Side::Player, target, view, report)?;
            self.targeting.record(target, outcome);
            if !outcome.is_hit() {
                return Ok(());
            }
            if self.player.is_destroyed() {
                self.finish(Side::Opponent, view);
                return Ok(());
            }
        }
    }

    fn shoot<V: GameView + ?Sized>(
        &mut self,
        side: Side,
        coord: Coord,
        view: &mut V,
        report: &mut TurnReport,
    ) -> Result<ShotOutcome, GameError> {
        let board = self.board_mut(side);
        let outcome = board.fire(coord)?;
        match outcome {
            ShotOutcome::AlreadyDecided => {}
            ShotOutcome::Miss => view.show_cell(side, coord, CellView::Miss),
            ShotOutcome::Hit => view.show_cell(side, coord, CellView::Hit),
            ShotOutcome::HitAndSunk => {
                for c in board.ship_cells(coord) {
                    view.show_cell(side, c, CellView::Sunk);
                }
            }
        }
        log::debug!("shot at {} board {}: {:?}", side, coord, outcome);
        let shot = Shot {
            side,
            coord,
            outcome,
        };
        view.announce(&GameEvent::Shot(shot));
        report.shots.push(shot);
        Ok(outcome)
    }

    fn finish<V: GameView + ?Sized>(&mut self, winner: Side, view: &mut V) {
        self.phase = Phase::Ended { winner };
        for c in self.opponent.coords() {
            if self.opponent.get(c) == CellState::Occupied {
                view.show_cell(Side::Opponent, c, CellView::Ship);
            }
        }
        view.announce(&GameEvent::GameOver { winner });
        log::info!("game ended, {} won", winner);
    }

    fn reset<V: GameView + ?Sized>(&mut self, view: &mut V) {
        self.player.clear();
        self.opponent.clear();
        self.targeting.clear();
        self.phase = Phase::Setup;
        for side in Side::ALL {
            let blank = match side {
                Side::Player => CellView::Water,
                Side::Opponent => CellView::Hidden,
            };
            for c in self.board(side).coords() {
                view.show_cell(side, c, blank);
            }
        }
    }
}
