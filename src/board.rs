//! Board state: cell grid, randomized ship placement, derived status.

use log::debug;
use rand::Rng;

use crate::common::GameError;
use crate::config::{ship_type_by_name, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipId, ShipStatus};

/// One grid position: owning ship (if any) and whether it has been shot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell {
    /// `None` is empty sea.
    pub ship: Option<ShipId>,
    pub hit: bool,
}

/// A generated board: cells in row-major order plus the placed ships.
///
/// Shape is fixed after generation; only `hit` flags change until the board
/// is replaced by a restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Build a `width`×`height` board and place every roster entry at a
    /// random non-overlapping position.
    ///
    /// Ships are placed sequentially; each gets the next identifier starting
    /// at 1. Fails with [`GameError::PlacementExhausted`] when a ship cannot
    /// be placed within the attempt budget, which signals an infeasible
    /// dimensions/roster combination.
    pub fn generate<R: Rng>(
        width: usize,
        height: usize,
        roster: &[&str],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut board = Board {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            ships: Vec::with_capacity(roster.len()),
        };
        for (i, name) in roster.iter().enumerate() {
            let kind = ship_type_by_name(name).ok_or(GameError::UnknownShipType)?;
            board.place_random(Ship::new((i + 1) as ShipId, kind), rng)?;
        }
        Ok(board)
    }

    /// Retry random placements for `ship` until one lands on empty cells.
    fn place_random<R: Rng>(&mut self, ship: Ship, rng: &mut R) -> Result<(), GameError> {
        let length = ship.kind().length();
        let mut attempts = 0;
        while attempts < MAX_PLACEMENT_ATTEMPTS {
            attempts += 1;
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (span_x, span_y) = match orientation {
                Orientation::Horizontal => (length, 1),
                Orientation::Vertical => (1, length),
            };
            // an orientation the ship cannot fit in counts as a failed attempt
            if span_x > self.width || span_y > self.height {
                continue;
            }
            let x = rng.random_range(0..=self.width - span_x);
            let y = rng.random_range(0..=self.height - span_y);
            let start = y * self.width + x;
            let stride = match orientation {
                Orientation::Horizontal => 1,
                Orientation::Vertical => self.width,
            };
            if (0..length).any(|i| self.cells[start + i * stride].ship.is_some()) {
                continue;
            }
            for i in 0..length {
                self.cells[start + i * stride].ship = Some(ship.id());
            }
            debug!(
                "placed {} (id {}) at ({}, {}) {:?} after {} attempt(s)",
                ship.kind().name(),
                ship.id(),
                x,
                y,
                orientation,
                attempts
            );
            self.ships.push(ship);
            return Ok(());
        }
        Err(GameError::PlacementExhausted)
    }

    /// Board width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Board height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell at `(x, y)`, or `None` outside the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    /// Placed ships in identifier order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Marks the cell at `(x, y)` as hit.
    ///
    /// Re-shooting an already-hit cell is a harmless idempotent write.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        if x >= self.width || y >= self.height {
            return Err(GameError::OutOfBounds { x, y });
        }
        self.cells[y * self.width + x].hit = true;
        Ok(())
    }

    /// Per-ship status derived from the accumulated hits. Never cached.
    pub fn ship_statuses(&self) -> Vec<ShipStatus> {
        self.ships
            .iter()
            .map(|ship| {
                let hits = self
                    .cells
                    .iter()
                    .filter(|cell| cell.hit && cell.ship == Some(ship.id()))
                    .count();
                ShipStatus {
                    id: ship.id(),
                    name: ship.kind().name(),
                    length: ship.kind().length(),
                    hits,
                    is_down: hits >= ship.kind().length(),
                }
            })
            .collect()
    }

    /// Returns `true` when every placed ship is down.
    pub fn all_down(&self) -> bool {
        self.ship_statuses().iter().all(|s| s.is_down)
    }
}
