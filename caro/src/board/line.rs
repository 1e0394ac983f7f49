use crate::Coord;

/// The four lines that pass through every cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Line {
    /// Constant `y`.
    Row,
    /// Constant `x`.
    Column,
    /// Constant `x - y`, running from the top-left towards the bottom-right.
    Diagonal,
    /// Constant `x + y`, running from the bottom-left towards the top-right.
    AntiDiagonal,
}

impl Line {
    pub const ALL: [Line; 4] = [Line::Row, Line::Column, Line::Diagonal, Line::AntiDiagonal];

    /// All cells of this line through `coord` on a `size` x `size` grid,
    /// starting at one edge of the grid and ending at the opposite one.
    ///
    /// A `coord` outside of the grid lies on no line, so its walk is empty.
    /// Every call returns a fresh walk, so a line can be scanned as often as
    /// needed.
    pub fn through(self, Coord { x, y }: Coord, size: usize) -> LineCoords {
        let size = i32::try_from(size).unwrap_or(i32::MAX);
        if !(0..size).contains(&x) || !(0..size).contains(&y) {
            return LineCoords {
                next: Coord::new(-1, -1),
                step: (0, 0),
                size,
            };
        }
        // Walking back from the cell to the edge is the same as starting at
        // offset `x - y` (or `x + y`), without ever leaving the grid.
        let (start, step) = match self {
            Line::Row => (Coord::new(0, y), (1, 0)),
            Line::Column => (Coord::new(x, 0), (0, 1)),
            Line::Diagonal => {
                let back = x.min(y);
                (Coord::new(x - back, y - back), (1, 1))
            }
            Line::AntiDiagonal => {
                let back = x.min(size - 1 - y);
                (Coord::new(x - back, y + back), (1, -1))
            }
        };
        LineCoords {
            next: start,
            step,
            size,
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Line::Row => write!(f, "row"),
            Line::Column => write!(f, "column"),
            Line::Diagonal => write!(f, "diagonal"),
            Line::AntiDiagonal => write!(f, "anti-diagonal"),
        }
    }
}

/// Iterator over the coordinates of one [`Line`]. Stops at the grid edge.
#[derive(Clone, Debug)]
pub struct LineCoords {
    next: Coord,
    step: (i32, i32),
    size: i32,
}

impl Iterator for LineCoords {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next;
        let on_grid = (0..self.size).contains(&current.x) && (0..self.size).contains(&current.y);
        if !on_grid {
            return None;
        }
        self.next = Coord::new(current.x + self.step.0, current.y + self.step.1);
        Some(current)
    }
}
