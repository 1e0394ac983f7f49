pub use board::*;
pub use errors::*;
pub use game::*;
pub use player::*;
pub use saved_game::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod errors;
mod game;
mod player;
mod saved_game;
mod visualization;
