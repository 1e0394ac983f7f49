use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use caro::{Game, SavedGame, Side};
use tracing::info;

/// Writes the game's history and settings as pretty-printed JSON.
pub fn save_game(game: &Game, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create save file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &game.to_saved())?;
    writeln!(writer)?;
    writer.flush()?;
    info!(path = %path.display(), moves = game.history().len(), "Game saved");
    Ok(())
}

/// Reads a save file and replays it into a game.
///
/// `default_first` opens the game if the saved history is empty.
pub fn load_game(path: &Path, default_first: Side) -> anyhow::Result<Game> {
    let file = File::open(path)
        .with_context(|| format!("Could not open save file '{}'", path.display()))?;
    let saved: SavedGame = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("'{}' is not a valid save file", path.display()))?;
    let game = Game::from_saved(saved, Some(default_first))
        .with_context(|| format!("Could not restore the game from '{}'", path.display()))?;
    info!(path = %path.display(), moves = game.history().len(), "Game loaded");
    Ok(game)
}
