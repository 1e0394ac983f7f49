use std::path::PathBuf;
use std::str::FromStr;

use caro::Coord;

/// One line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Place a mark for the player to move, written as `<x> <y>`.
    Play(Coord),
    Show,
    Restart,
    Save(PathBuf),
    Load(PathBuf),
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word {
            "show" => Command::Show,
            "restart" | "r" => Command::Restart,
            "quit" | "q" => Command::Quit,
            "save" | "load" => {
                if rest.is_empty() {
                    anyhow::bail!("'{}' needs a file path", word);
                }
                let path = PathBuf::from(rest);
                if word == "save" {
                    Command::Save(path)
                } else {
                    Command::Load(path)
                }
            }
            _ => {
                let coords: Vec<&str> = line.split_whitespace().collect();
                let [x, y] = coords[..] else {
                    anyhow::bail!("Unknown command '{}'", line);
                };
                let x: i32 = x
                    .parse()
                    .map_err(|_| anyhow::anyhow!("'{}' is not a column number", x))?;
                let y: i32 = y
                    .parse()
                    .map_err(|_| anyhow::anyhow!("'{}' is not a row number", y))?;
                Command::Play(Coord::new(x, y))
            }
        };
        if matches!(command, Command::Show | Command::Restart | Command::Quit) && !rest.is_empty() {
            anyhow::bail!("'{}' takes no arguments", word);
        }
        Ok(command)
    }
}
