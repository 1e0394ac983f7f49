use quickcheck::{Arbitrary, Gen};

use crate::Coord;

/// A board shape plus an order in which to fill its cells.
#[derive(Clone, Debug)]
pub struct MoveSequence {
    pub map_size: usize,
    pub win_point: usize,
    /// Distinct, in bounds, and possibly covering the whole board.
    pub coords: Vec<Coord>,
}

impl Arbitrary for MoveSequence {
    fn arbitrary(g: &mut Gen) -> Self {
        let map_size = (u8::arbitrary(g) % 7) as usize + 1;
        let win_point = (u8::arbitrary(g) % 7) as usize + 1;

        let mut coords: Vec<Coord> = (0..map_size as i32)
            .flat_map(|y| (0..map_size as i32).map(move |x| Coord::new(x, y)))
            .collect();
        // Fisher-Yates
        for i in (1..coords.len()).rev() {
            let j = usize::arbitrary(g) % (i + 1);
            coords.swap(i, j);
        }
        // Sometimes stop before the board is full
        if bool::arbitrary(g) {
            let len = usize::arbitrary(g) % (coords.len() + 1);
            coords.truncate(len);
        }

        MoveSequence {
            map_size,
            win_point,
            coords,
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let MoveSequence {
            map_size,
            win_point,
            coords,
        } = self.clone();
        Box::new((0..coords.len()).rev().map(move |len| MoveSequence {
            map_size,
            win_point,
            coords: coords[..len].to_vec(),
        }))
    }
}
