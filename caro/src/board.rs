mod line;

pub use line::*;

use serde::{Deserialize, Serialize};

use crate::IllegalMove;

/// The cell value that means "nobody has played here".
pub const EMPTY_CELL: u8 = 0;

/// A grid coordinate. `x` is the column, `y` the row.
///
/// Coordinates are signed so that a collaborator can hand over whatever it
/// computed and get an [`IllegalMove::OutOfBounds`] back instead of a panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

/// A square grid where every cell holds either [`EMPTY_CELL`] or the id of the
/// player who marked it.
///
/// The board itself knows nothing about turns; it only refuses to overwrite a
/// cell or to write outside of the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row-major, i.e. the cell `(x, y)` lives at `y * size + x`.
    cells: Vec<u8>,
}

impl Board {
    /// Creates an empty `size` x `size` board.
    ///
    /// Panics if `size * size` overflows. [`GameConfig::validate()`](crate::GameConfig::validate)
    /// keeps game boards within [`MAX_MAP_SIZE`](crate::MAX_MAP_SIZE).
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![EMPTY_CELL; size * size],
        }
    }

    /// The length of one side of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// The content of a cell, or `None` if the coordinate is off the grid.
    pub fn get(&self, coord: Coord) -> Option<u8> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Some(EMPTY_CELL)
    }

    /// Writes `id` into an empty cell.
    ///
    /// Fails without touching the board if the cell is off the grid or
    /// already taken.
    pub(crate) fn place(&mut self, coord: Coord, id: u8) -> Result<(), IllegalMove> {
        let idx = self.index(coord).ok_or(IllegalMove::OutOfBounds { coord })?;
        let occupant = self.cells[idx];
        if occupant != EMPTY_CELL {
            return Err(IllegalMove::CellOccupied { coord, occupant });
        }
        self.cells[idx] = id;
        Ok(())
    }

    /// How many cells are marked.
    pub fn num_occupied(&self) -> usize {
        self.cells.iter().filter(|&&c| c != EMPTY_CELL).count()
    }

    /// The rows of the board from top (`y == 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.size.max(1))
    }

    /// Walks the full `line` through `coord`, edge to edge.
    pub fn line_through(&self, line: Line, coord: Coord) -> LineCoords {
        line.through(coord, self.size)
    }

    fn index(&self, Coord { x, y }: Coord) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new(6);
        assert_eq!(board.size(), 6);
        assert_eq!(board.num_occupied(), 0);
        assert_eq!(board.rows().count(), 6);
        assert!(board.rows().all(|row| row.iter().all(|&c| c == EMPTY_CELL)));
    }

    #[test]
    fn bounds() {
        let board = Board::new(3);
        assert!(board.is_in_bounds(Coord::new(0, 0)));
        assert!(board.is_in_bounds(Coord::new(2, 2)));
        assert!(!board.is_in_bounds(Coord::new(3, 0)));
        assert!(!board.is_in_bounds(Coord::new(0, -1)));
        assert_eq!(board.get(Coord::new(-1, 1)), None);
    }

    #[test]
    fn place_never_overwrites() {
        let mut board = Board::new(3);
        board.place(Coord::new(1, 2), 7).unwrap();
        assert_eq!(board.get(Coord::new(1, 2)), Some(7));
        assert_eq!(board.rows().nth(2).unwrap(), &[0, 7, 0]);

        assert_eq!(
            board.place(Coord::new(1, 2), 9),
            Err(IllegalMove::CellOccupied {
                coord: Coord::new(1, 2),
                occupant: 7
            })
        );
        assert_eq!(
            board.place(Coord::new(3, 1), 9),
            Err(IllegalMove::OutOfBounds {
                coord: Coord::new(3, 1)
            })
        );
        assert_eq!(board.get(Coord::new(1, 2)), Some(7));
        assert_eq!(board.num_occupied(), 1);
    }

    #[test]
    fn zero_sized_board() {
        let board = Board::new(0);
        assert_eq!(board.rows().count(), 0);
        assert!(!board.is_in_bounds(Coord::new(0, 0)));
    }
}
