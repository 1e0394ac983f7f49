use serde::{Deserialize, Serialize};

/// One of the two seats at the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    O,
    X,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::O => Side::X,
            Side::X => Side::O,
        }
    }

    /// How much one mark of this side adds to the O accumulator of a line.
    pub(crate) fn sign(self) -> i64 {
        match self {
            Side::O => 1,
            Side::X => -1,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::O => write!(f, "O"),
            Side::X => write!(f, "X"),
        }
    }
}

/// A player identity.
///
/// The `id` is what gets written into the board cells, so it must be non-zero
/// ([`EMPTY_CELL`](crate::EMPTY_CELL) marks a free cell) and differ from the
/// opponent's.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u8,
    pub name: String,
}

impl Player {
    pub fn new(id: u8, name: &str) -> Self {
        let name = if name.is_empty() { "Player" } else { name };
        Self {
            id,
            name: String::from(name),
        }
    }
}
