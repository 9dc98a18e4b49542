use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_ROSTER, SHIP_TYPES};
use crate::ship::{ShipStatus, ShipType};

/// Current stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stage {
    InProgress,
    Over,
}

/// Derived game-level view: dimensions, catalog, stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSummary {
    pub width: usize,
    pub height: usize,
    pub ship_types: &'static [ShipType],
    pub stage: Stage,
}

/// Single-player game state machine.
///
/// Owns the current board and the RNG used to generate replacement boards.
/// All mutation goes through [`Game::shoot`] and [`Game::restart`]; readers
/// re-derive status from the committed board on every call.
pub struct Game {
    board: Board,
    rng: SmallRng,
}

impl Game {
    /// New game on the default 10×10 board with the standard roster.
    pub fn new() -> Result<Self, GameError> {
        let mut seed_rng = rand::rng();
        Self::with_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Deterministic game for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Result<Self, GameError> {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(mut rng: SmallRng) -> Result<Self, GameError> {
        let board = Board::generate(BOARD_WIDTH, BOARD_HEIGHT, &DEFAULT_ROSTER, &mut rng)?;
        Ok(Self { board, rng })
    }

    /// Marks the cell at `(x, y)` as hit.
    ///
    /// Fails with [`GameError::OutOfBounds`] outside the current board,
    /// leaving it unmodified. Ship-down and game-over are derived lazily by
    /// the readers, never here.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        self.board.shoot(x, y)
    }

    /// Regenerates the board with the same fixed dimensions and roster.
    ///
    /// The new board replaces the old one as a single assignment after
    /// generation has fully succeeded; derived status resets implicitly. On
    /// [`GameError::PlacementExhausted`] the previous board stays in place.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let board = Board::generate(BOARD_WIDTH, BOARD_HEIGHT, &DEFAULT_ROSTER, &mut self.rng)?;
        self.board = board;
        info!("board regenerated");
        Ok(())
    }

    /// Immutable view of the current board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Per-ship status list, recomputed from the board.
    pub fn ship_statuses(&self) -> Vec<ShipStatus> {
        self.board.ship_statuses()
    }

    /// `Over` the instant every ship's hit count reaches its length;
    /// irreversible except via [`Game::restart`].
    pub fn stage(&self) -> Stage {
        if self.board.all_down() {
            Stage::Over
        } else {
            Stage::InProgress
        }
    }

    /// Game-level view for a display layer.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            width: self.board.width(),
            height: self.board.height(),
            ship_types: &SHIP_TYPES,
            stage: self.stage(),
        }
    }
}
