use serde::{Deserialize, Serialize};

use crate::{Move, Player};

/// The persisted form of a game.
///
/// Neither the board nor the player to move are stored: loading replays
/// `history` onto an empty board, see [`Game::from_saved()`](crate::Game::from_saved).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub o_player: Player,
    pub x_player: Player,
    pub map_size: usize,
    pub win_point: usize,
    /// Must agree with the number of full turns in `history`.
    pub turn: usize,
    /// In the order the moves were played.
    pub history: Vec<Move>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Game, GameConfig, Side};

    #[test]
    fn json_layout() {
        let mut game = Game::new(GameConfig::default(), Side::O).unwrap();
        game.update(Coord::new(3, 1)).unwrap();
        let value = serde_json::to_value(game.to_saved()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "o_player": { "id": 2, "name": "O-Player" },
                "x_player": { "id": 1, "name": "X-Player" },
                "map_size": 6,
                "win_point": 5,
                "turn": 0,
                "history": [
                    { "player": 2, "coord": { "x": 3, "y": 1 }, "turn": 0 }
                ]
            })
        );
    }

    #[test]
    fn hand_written_save_loads() {
        let json = r#"{
            "o_player": { "id": 5, "name": "Ann" },
            "x_player": { "id": 6, "name": "Bob" },
            "map_size": 3,
            "win_point": 3,
            "turn": 1,
            "history": [
                { "player": 6, "coord": { "x": 1, "y": 1 }, "turn": 0 },
                { "player": 5, "coord": { "x": 0, "y": 0 }, "turn": 0 }
            ]
        }"#;
        let saved: SavedGame = serde_json::from_str(json).unwrap();
        let game = Game::from_saved(saved, None).unwrap();
        assert_eq!(game.first_to_move(), Side::X);
        assert_eq!(game.player_to_move(), Side::X);
        assert_eq!(game.side_at(Coord::new(1, 1)), Some(Side::X));
        assert_eq!(game.side_at(Coord::new(0, 0)), Some(Side::O));
        assert_eq!(game.turn(), 1);
    }
}
