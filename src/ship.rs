//! Ship definitions: catalog types, placed instances, derived status.

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Identifier of a placed ship. Assigned sequentially from 1 in roster order.
pub type ShipId = u32;

/// A ship placed on the board.
///
/// Which cells the ship occupies is recorded only on the cells themselves;
/// the instance carries no back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    id: ShipId,
    kind: ShipType,
}

impl Ship {
    pub(crate) fn new(id: ShipId, kind: ShipType) -> Self {
        Self { id, kind }
    }

    /// Unique identifier of this instance.
    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Catalog type of this instance.
    pub fn kind(&self) -> ShipType {
        self.kind
    }
}

/// Derived per-ship view, recomputed from the board on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ShipStatus {
    pub id: ShipId,
    pub name: &'static str,
    pub length: usize,
    /// Number of this ship's cells that have been hit.
    pub hits: usize,
    /// A ship is down once its hit count reaches its length.
    pub is_down: bool,
}
