use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{Board, Coord, IllegalMove, InitError, Line, Player, SavedGame, Side, EMPTY_CELL};

pub const DEFAULT_MAP_SIZE: usize = 6;
pub const DEFAULT_WIN_POINT: usize = 5;
/// Larger boards are refused, both when starting a game and when loading one.
pub const MAX_MAP_SIZE: usize = 1024;

/// Everything about a game that is fixed before the first move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub o_player: Player,
    pub x_player: Player,
    /// The board is `map_size` x `map_size` cells.
    pub map_size: usize,
    /// The net number of marks a side needs on a full line to win.
    pub win_point: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            o_player: Player::new(2, "O-Player"),
            x_player: Player::new(1, "X-Player"),
            map_size: DEFAULT_MAP_SIZE,
            win_point: DEFAULT_WIN_POINT,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), InitError> {
        let reason = if self.map_size == 0 {
            "the map size must be at least 1"
        } else if self.map_size > MAX_MAP_SIZE {
            "the map size must be at most 1024"
        } else if self.win_point == 0 {
            "the win point must be at least 1"
        } else if self.o_player.id == EMPTY_CELL || self.x_player.id == EMPTY_CELL {
            "player ids must be non-zero"
        } else if self.o_player.id == self.x_player.id {
            "the two players must have different ids"
        } else {
            return Ok(());
        };
        Err(InitError::InvalidConfig { reason })
    }

    pub fn player(&self, side: Side) -> &Player {
        match side {
            Side::O => &self.o_player,
            Side::X => &self.x_player,
        }
    }

    /// Which side a player id (or cell value) belongs to.
    pub fn side_of(&self, id: u8) -> Option<Side> {
        if id == EMPTY_CELL {
            None
        } else if id == self.o_player.id {
            Some(Side::O)
        } else if id == self.x_player.id {
            Some(Side::X)
        } else {
            None
        }
    }
}

/// A single recorded ply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The id of the player who moved.
    pub player: u8,
    pub coord: Coord,
    /// The turn this ply belongs to. Two plies make one turn.
    pub turn: usize,
}

/// The move that ended the game, and which line it completed for whom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Win {
    pub winning_move: Move,
    pub winner: Side,
    pub line: Line,
}

/// Summarizes where a game stands.
///
/// This is derived on demand from [`Game::is_over()`] and
/// [`Game::has_empty_grid()`], it is never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won(Win),
    Draw,
}

/// The rule engine for one game.
///
/// The move history is the source of truth. The board, the turn counter and
/// the player to move are all derived from it, either incrementally in
/// [`Self::update()`] or in bulk by [`Self::initialize()`].
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: Board,
    history: Vec<Move>,
    turn: usize,
    /// 0 or 1: how many plies of the current turn have been played.
    plies_this_turn: u8,
    /// The side that opened the game. [`Self::reset()`] hands the first move back to it.
    first_to_move: Side,
    player_to_move: Side,
}

/// The state obtained by replaying a history onto an empty board.
struct Replay {
    board: Board,
    turn: usize,
    plies_this_turn: u8,
    first_to_move: Side,
    player_to_move: Side,
}

impl Game {
    /// Creates a game with an empty board where `first_to_move` opens.
    pub fn new(config: GameConfig, first_to_move: Side) -> Result<Self, InitError> {
        config.validate()?;
        let board = Board::new(config.map_size);
        let game = Self {
            config,
            board,
            history: Vec::new(),
            turn: 0,
            plies_this_turn: 0,
            first_to_move,
            player_to_move: first_to_move,
        };
        game.log_setup();
        Ok(game)
    }

    /// Rebuilds a game from its persisted form by replaying the history.
    ///
    /// If the history is not empty, its first move decides who opened the game
    /// and `first_to_move` is ignored. Otherwise `first_to_move` is required.
    pub fn from_saved(saved: SavedGame, first_to_move: Option<Side>) -> Result<Self, InitError> {
        let SavedGame {
            o_player,
            x_player,
            map_size,
            win_point,
            turn,
            history,
        } = saved;
        let config = GameConfig {
            o_player,
            x_player,
            map_size,
            win_point,
        };
        config.validate()?;
        let replay = replay(&config, &history, turn, first_to_move)?;
        let game = Self {
            config,
            board: replay.board,
            history,
            turn: replay.turn,
            plies_this_turn: replay.plies_this_turn,
            first_to_move: replay.first_to_move,
            player_to_move: replay.player_to_move,
        };
        game.log_setup();
        Ok(game)
    }

    /// The persisted form of this game. Board and player to move are not part of it.
    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            o_player: self.config.o_player.clone(),
            x_player: self.config.x_player.clone(),
            map_size: self.config.map_size,
            win_point: self.config.win_point,
            turn: self.turn,
            history: self.history.clone(),
        }
    }

    /// Discards the board and rebuilds it, together with the turn counter and
    /// the player to move, from the move history.
    ///
    /// On error the game is left exactly as it was.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        let replay = replay(
            &self.config,
            &self.history,
            self.turn,
            Some(self.first_to_move),
        )?;
        self.board = replay.board;
        self.turn = replay.turn;
        self.plies_this_turn = replay.plies_this_turn;
        self.first_to_move = replay.first_to_move;
        self.player_to_move = replay.player_to_move;
        self.log_setup();
        Ok(())
    }

    /// Starts over with an empty board. Players and configuration are kept,
    /// and the side that opened the previous game opens again.
    pub fn reset(&mut self) {
        self.history.clear();
        self.board = Board::new(self.config.map_size);
        self.turn = 0;
        self.plies_this_turn = 0;
        self.player_to_move = self.first_to_move;
        debug!("Game reset");
    }

    /// Plays a move for [`Self::player_to_move()`].
    ///
    /// Either the move is fully applied (board, history, turn counter and
    /// player to move) and returned, or an error is returned and nothing changes.
    pub fn update(&mut self, coord: Coord) -> Result<Move, IllegalMove> {
        if self.outcome() != Outcome::InProgress {
            return Err(IllegalMove::GameAlreadyOver);
        }
        let side = self.player_to_move;
        let player = self.config.player(side);
        self.board.place(coord, player.id)?;

        let mv = Move {
            player: player.id,
            coord,
            turn: self.turn,
        };
        self.history.push(mv);
        debug!(turn = self.turn, player = %player.name, x = coord.x, y = coord.y, "Move played");

        self.plies_this_turn += 1;
        if self.plies_this_turn >= 2 {
            self.plies_this_turn = 0;
            self.turn += 1;
        }
        self.player_to_move = side.other();

        if let Some(win) = self.is_over() {
            debug!(winner = %self.config.player(win.winner).name, line = %win.line, "Winning move");
        }
        Ok(mv)
    }

    /// Checks whether the most recent move completed a line.
    ///
    /// Only the four lines through that move are looked at, so this costs
    /// `O(map_size)` no matter how full the board is.
    pub fn is_over(&self) -> Option<Win> {
        let last = *self.history.last()?;
        Line::ALL.into_iter().find_map(|line| {
            self.line_winner(line, last.coord).map(|winner| Win {
                winning_move: last,
                winner,
                line,
            })
        })
    }

    /// The side that owns `line` through `coord`, if any.
    ///
    /// Every cell of the full line is scanned: an O mark adds 1 to the O
    /// accumulator, an X mark subtracts 1, an empty cell adds nothing. The X
    /// accumulator is the negation. A side owns the line when its accumulator
    /// is exactly the win point, so a line with more marks than that does not
    /// count, and neither does a run broken up by opponent marks.
    pub fn line_winner(&self, line: Line, coord: Coord) -> Option<Side> {
        let o_sum: i64 = self
            .board
            .line_through(line, coord)
            .filter_map(|c| self.side_at(c))
            .map(Side::sign)
            .sum();
        let x_sum = -o_sum;
        let win_point = i64::try_from(self.config.win_point).ok()?;
        if o_sum == win_point {
            Some(Side::O)
        } else if x_sum == win_point {
            Some(Side::X)
        } else {
            None
        }
    }

    /// Whether a cell is still free, judged by the number of moves played.
    pub fn has_empty_grid(&self) -> bool {
        self.history.len() < self.config.map_size * self.config.map_size
    }

    /// A draw is a full board without a winning last move.
    pub fn outcome(&self) -> Outcome {
        if let Some(win) = self.is_over() {
            Outcome::Won(win)
        } else if !self.has_empty_grid() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn map_size(&self) -> usize {
        self.config.map_size
    }

    pub fn win_point(&self) -> usize {
        self.config.win_point
    }

    pub fn player(&self, side: Side) -> &Player {
        self.config.player(side)
    }

    pub fn player_to_move(&self) -> Side {
        self.player_to_move
    }

    pub fn first_to_move(&self) -> Side {
        self.first_to_move
    }

    /// Counts full turns, i.e. pairs of moves.
    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Which side marked the cell, if any.
    pub fn side_at(&self, coord: Coord) -> Option<Side> {
        self.board
            .get(coord)
            .and_then(|id| self.config.side_of(id))
    }

    fn log_setup(&self) {
        debug!(
            map_size = self.config.map_size,
            win_point = self.config.win_point,
            o_id = self.config.o_player.id,
            o_name = %self.config.o_player.name,
            x_id = self.config.x_player.id,
            x_name = %self.config.x_player.name,
            moves = self.history.len(),
            to_move = %self.player(self.player_to_move).name,
            "Game ready"
        );
    }
}

fn replay(
    config: &GameConfig,
    history: &[Move],
    recorded_turn: usize,
    first_to_move: Option<Side>,
) -> Result<Replay, InitError> {
    let mut board = Board::new(config.map_size);
    let Some(first) = history.first() else {
        let first_to_move = first_to_move.ok_or(InitError::NoStartingPlayer)?;
        if recorded_turn != 0 {
            return Err(InitError::StateMismatch {
                recorded_turn,
                replayed_turn: 0,
            });
        }
        return Ok(Replay {
            board,
            turn: 0,
            plies_this_turn: 0,
            first_to_move,
            player_to_move: first_to_move,
        });
    };

    debug!(moves = history.len(), "Detected that game has been loaded");
    let first_to_move = config
        .side_of(first.player)
        .ok_or(InitError::UnknownPlayer {
            ply: 0,
            id: first.player,
        })?;
    let mut player_to_move = first_to_move;
    let mut turn = 0;
    let mut plies_this_turn = 0;
    for (ply, mv) in history.iter().enumerate() {
        let side = config.side_of(mv.player).ok_or(InitError::UnknownPlayer {
            ply,
            id: mv.player,
        })?;
        if side != player_to_move {
            return Err(InitError::MoveOutOfTurn {
                ply,
                expected: player_to_move,
            });
        }
        board
            .place(mv.coord, mv.player)
            .map_err(|err| InitError::InvalidHistory { ply, err })?;
        trace!(turn, player = %config.player(side).name, x = mv.coord.x, y = mv.coord.y, "Replayed move");

        plies_this_turn += 1;
        if plies_this_turn >= 2 {
            plies_this_turn = 0;
            turn += 1;
        }
        player_to_move = side.other();
    }

    if turn != recorded_turn {
        return Err(InitError::StateMismatch {
            recorded_turn,
            replayed_turn: turn,
        });
    }
    Ok(Replay {
        board,
        turn,
        plies_this_turn,
        first_to_move,
        player_to_move,
    })
}
