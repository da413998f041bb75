use alloc::vec::Vec;

use crate::common::GameError;

/// Side of the square board.
pub const BOARD_SIZE: usize = 8;
/// Length of the largest ship. Size `s` has `MAX_SHIP_SIZE - s + 1` ships.
pub const MAX_SHIP_SIZE: usize = 4;
/// Whole-fleet placement attempts per board before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 16;
/// Boards are labelled with column letters, so keep them within A-Z.
pub const MAX_BOARD_SIZE: usize = 26;

/// Per-session configuration: board size and fleet shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub board_size: usize,
    pub max_ship_size: usize,
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            max_ship_size: MAX_SHIP_SIZE,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Validated configuration with the default placement retry bound.
    pub fn new(board_size: usize, max_ship_size: usize) -> Result<Self, GameError> {
        let config = Self {
            board_size,
            max_ship_size,
            placement_attempts: PLACEMENT_ATTEMPTS,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_placement_attempts(mut self, attempts: usize) -> Self {
        self.placement_attempts = attempts;
        self
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(GameError::InvalidConfig("board size must be between 1 and 26"));
        }
        if self.max_ship_size == 0 {
            return Err(GameError::InvalidConfig("fleet needs at least one ship"));
        }
        if self.max_ship_size > self.board_size {
            return Err(GameError::InvalidConfig("largest ship does not fit on the board"));
        }
        if self.placement_attempts == 0 {
            return Err(GameError::InvalidConfig("placement needs at least one attempt"));
        }
        Ok(())
    }

    /// Ship sizes to place, largest first.
    pub fn fleet(&self) -> Vec<usize> {
        fleet_for(self.max_ship_size)
    }

    /// Number of ship segments in the fleet.
    pub fn total_ship_cells(&self) -> usize {
        self.fleet().iter().sum()
    }
}

/// Classic pyramid fleet: one ship of the largest size, two of the next one
/// and so on down to size 1.
pub fn fleet_for(max_ship_size: usize) -> Vec<usize> {
    (1..=max_ship_size)
        .rev()
        .flat_map(|size| core::iter::repeat(size).take(max_ship_size - size + 1))
        .collect()
}
