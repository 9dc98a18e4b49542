//! Single-player sea-battle state engine: board generation with randomized
//! ship placement, shot tracking, lazily derived ship and game status, and
//! the textual coordinate codec.

mod board;
mod common;
mod config;
mod coord;
mod game;
mod logging;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use coord::*;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;
