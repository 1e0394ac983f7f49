use crate::{Coord, Side};

/// The error type for [`Game::update()`](crate::Game::update), i.e. for playing a single move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds { coord: Coord },
    CellOccupied { coord: Coord, occupant: u8 },
    GameAlreadyOver,
}

impl std::error::Error for IllegalMove {}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::OutOfBounds { coord } => {
                write!(f, "Move {} is outside of the playing field", coord)
            }
            IllegalMove::CellOccupied { coord, occupant } => write!(
                f,
                "Move {} was played on a cell already taken by player {}",
                coord, occupant
            ),
            IllegalMove::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

/// The error type for building a game, either fresh or from a saved history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InitError {
    InvalidConfig {
        reason: &'static str,
    },
    /// The history is empty and nobody was chosen to open the game.
    NoStartingPlayer,
    /// The turn counter that was saved disagrees with the one obtained by
    /// replaying the history.
    StateMismatch {
        recorded_turn: usize,
        replayed_turn: usize,
    },
    UnknownPlayer {
        ply: usize,
        id: u8,
    },
    MoveOutOfTurn {
        ply: usize,
        expected: Side,
    },
    InvalidHistory {
        ply: usize,
        err: IllegalMove,
    },
}

impl std::error::Error for InitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InitError::InvalidHistory { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for InitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InitError::InvalidConfig { reason } => write!(f, "Invalid game configuration: {}", reason),
            InitError::NoStartingPlayer => {
                write!(f, "The move history is empty and no player was chosen to move first")
            }
            InitError::StateMismatch {
                recorded_turn,
                replayed_turn,
            } => write!(
                f,
                "Data mismatch: the saved turn is {}, but replaying the history gives turn {}",
                recorded_turn, replayed_turn
            ),
            InitError::UnknownPlayer { ply, id } => {
                write!(f, "Move #{} was made by unknown player id {}", ply, id)
            }
            InitError::MoveOutOfTurn { ply, expected } => write!(
                f,
                "Move #{} was not made by {}, who was the one to move",
                ply, expected
            ),
            InitError::InvalidHistory { ply, .. } => {
                write!(f, "Move #{} of the history cannot be replayed", ply)
            }
        }
    }
}
