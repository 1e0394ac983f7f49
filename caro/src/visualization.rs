use crate::{Game, Side};

/// Draws the board as a box of `O`, `X` and `.` with column indices on top
/// and row indices on the left.
pub fn visualize_board(game: &Game) -> String {
    let size = game.map_size();
    let mut result = String::from("     ");
    for x in 0..size {
        result += &format!(" {:>2}", x);
    }
    result += "\n    ╭";
    for _ in 0..size {
        result += "───";
    }
    result += "─╮";

    for (y, row) in game.board().rows().enumerate() {
        result += &format!("\n{:>3} │", y);
        for &cell in row {
            let mark = match game.config().side_of(cell) {
                Some(Side::O) => 'O',
                Some(Side::X) => 'X',
                None => '.',
            };
            result += &format!("  {}", mark);
        }
        result += " │";
    }

    result += "\n    ╰";
    for _ in 0..size {
        result += "───";
    }
    result += "─╯";
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, GameConfig};

    #[test]
    fn small_board() {
        let config = GameConfig {
            map_size: 2,
            win_point: 2,
            ..GameConfig::default()
        };
        let mut game = Game::new(config, Side::O).unwrap();
        game.update(Coord::new(0, 0)).unwrap();
        game.update(Coord::new(1, 1)).unwrap();
        let expected = [
            "       0  1",
            "    ╭───────╮",
            "  0 │  O  . │",
            "  1 │  .  X │",
            "    ╰───────╯",
        ]
        .join("\n");
        assert_eq!(visualize_board(&game), expected);
    }
}
