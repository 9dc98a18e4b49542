use crate::ship::ShipType;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;

/// The only ship types a roster may name.
pub const SHIP_TYPES: [ShipType; 2] = [
    ShipType::new("battleship", 5),
    ShipType::new("destroyer", 4),
];

/// Ships placed for one game, in placement order. Duplicates allowed.
pub const DEFAULT_ROSTER: [&str; 3] = ["battleship", "destroyer", "destroyer"];

/// Attempts allowed when placing a single ship before generation aborts.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

/// Longest accepted textual reference. Three bytes reach row 99.
pub const MAX_REFERENCE_LEN: usize = 3;

/// Look up a catalog ship type by name. Returns `None` if the name does not
/// match any defined type.
pub fn ship_type_by_name(name: &str) -> Option<ShipType> {
    SHIP_TYPES.iter().copied().find(|t| t.name() == name)
}
