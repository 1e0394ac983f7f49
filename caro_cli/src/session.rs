use std::io::{BufRead, Write};

use caro::{visualize_board, Game, Outcome, Side};
use tracing::{debug, warn};

use crate::command::Command;
use crate::save_file::{load_game, save_game};

/// Why a session stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    EndOfInput,
}

/// Plays one game after another on a text stream.
pub struct Session {
    game: Game,
    /// Opens a loaded game whose history is empty.
    default_first: Side,
}

impl Session {
    pub fn new(game: Game, default_first: Side) -> Self {
        Self {
            game,
            default_first,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Reads commands line by line until `quit` or the end of `input`.
    ///
    /// A command that fails is reported on `output` and the session goes on.
    /// Only I/O errors on the streams themselves end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<SessionEnd> {
        self.print_board(&mut output)?;
        self.print_status(&mut output)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "error: {}", err)?;
                    continue;
                }
            };
            debug!(?command, "Received command");
            if command == Command::Quit {
                return Ok(SessionEnd::Quit);
            }
            if let Err(err) = self.execute(command, &mut output) {
                warn!("{:#}", err);
                writeln!(output, "error: {:#}", err)?;
            }
            output.flush()?;
        }
        Ok(SessionEnd::EndOfInput)
    }

    /// Carries out a single command, printing its effect.
    pub fn execute<W: Write>(&mut self, command: Command, output: &mut W) -> anyhow::Result<()> {
        match command {
            Command::Play(coord) => {
                let name = self.game.player(self.game.player_to_move()).name.clone();
                if let Err(err) = self.game.update(coord) {
                    writeln!(output, "illegal move by {}: {}", name, err)?;
                    return Ok(());
                }
                self.print_board(output)?;
                self.print_status(output)?;
            }
            Command::Show => {
                self.print_board(output)?;
                self.print_status(output)?;
            }
            Command::Restart => {
                self.game.reset();
                writeln!(output, "game restarted")?;
                self.print_board(output)?;
                self.print_status(output)?;
            }
            Command::Save(path) => {
                save_game(&self.game, &path)?;
                writeln!(output, "saved to {}", path.display())?;
            }
            Command::Load(path) => {
                self.game = load_game(&path, self.default_first)?;
                writeln!(output, "loaded {}", path.display())?;
                self.print_board(output)?;
                self.print_status(output)?;
            }
            Command::Quit => {}
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        writeln!(output, "{}", visualize_board(&self.game))?;
        Ok(())
    }

    fn print_status<W: Write>(&self, output: &mut W) -> anyhow::Result<()> {
        match self.game.outcome() {
            Outcome::InProgress => {
                let side = self.game.player_to_move();
                writeln!(
                    output,
                    "turn {}: {} ({}) to move",
                    self.game.turn(),
                    self.game.player(side).name,
                    side
                )?;
            }
            Outcome::Won(win) => {
                let announcement = format!("winner: {}", self.game.player(win.winner).name);
                writeln!(output, "{}", announcement.to_uppercase())?;
                writeln!(output, "type 'restart' to play again")?;
            }
            Outcome::Draw => {
                writeln!(output, "GAME DRAW")?;
                writeln!(output, "type 'restart' to play again")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use caro::{Coord, GameConfig};

    use super::*;

    fn run(session: &mut Session, input: &str) -> (SessionEnd, String) {
        let mut output = Vec::new();
        let end = session.run(input.as_bytes(), &mut output).unwrap();
        (end, String::from_utf8(output).unwrap())
    }

    fn new_session() -> Session {
        Session::new(Game::new(GameConfig::default(), Side::O).unwrap(), Side::O)
    }

    #[test]
    fn plays_until_a_win() {
        let mut session = new_session();
        let input = "0 0\n0 1\n1 1\n0 2\n2 2\n0 3\n3 3\n0 4\n4 4\n5 5\n";
        let (end, output) = run(&mut session, input);
        assert_eq!(end, SessionEnd::EndOfInput);
        assert!(output.contains("WINNER: O-PLAYER"));
        assert!(output.contains("illegal move by X-Player: The game is already over"));
        assert_eq!(session.game().history().len(), 9);
    }

    #[test]
    fn bad_input_does_not_end_the_session() {
        let mut session = new_session();
        let (end, output) = run(&mut session, "hello\n\n9 9\n1 1\n1 1\nquit\n2 2\n");
        assert_eq!(end, SessionEnd::Quit);
        assert!(output.contains("error: Unknown command 'hello'"));
        assert!(output.contains("illegal move by O-Player: Move [9, 9] is outside of the playing field"));
        assert!(output.contains("illegal move by X-Player: Move [1, 1] was played on a cell already taken"));
        assert_eq!(session.game().history().len(), 1);
        assert_eq!(session.game().side_at(Coord::new(1, 1)), Some(Side::O));
    }

    #[test]
    fn draw_is_announced() {
        let config = GameConfig {
            map_size: 3,
            win_point: 3,
            ..GameConfig::default()
        };
        let mut session = Session::new(Game::new(config, Side::O).unwrap(), Side::O);
        let input = "0 0\n1 0\n2 0\n1 1\n0 1\n2 1\n1 2\n0 2\n2 2\n";
        let (_, output) = run(&mut session, input);
        assert!(output.contains("GAME DRAW"));
    }

    #[test]
    fn restart_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.caro");
        let mut session = new_session();
        let input = format!(
            "2 2\n3 3\nsave {path}\nrestart\n0 0\nload {path}\nshow\n",
            path = path.display()
        );
        let (_, output) = run(&mut session, &input);
        assert!(output.contains("game restarted"));
        assert!(output.contains("loaded"));
        let game = session.game();
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.side_at(Coord::new(0, 0)), None);
        assert_eq!(game.side_at(Coord::new(3, 3)), Some(Side::X));
        assert_eq!(game.player_to_move(), Side::O);
        assert_eq!(game.turn(), 1);
    }

    #[test]
    fn failed_load_keeps_the_current_game() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = new_session();
        let input = format!("1 1\nload {}\n", dir.path().join("missing.caro").display());
        let (_, output) = run(&mut session, &input);
        assert!(output.contains("error: Could not open save file"));
        assert_eq!(session.game().history().len(), 1);
    }
}
