use std::path::PathBuf;

use caro::{Game, GameConfig, Side, DEFAULT_MAP_SIZE, DEFAULT_WIN_POINT};
use caro_cli::{load_game, Session, SessionEnd};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FirstPlayer {
    O,
    X,
    Random,
}

#[derive(Parser)]
struct Args {
    /// Number of rows and columns of the board
    #[arg(short, long, default_value_t = DEFAULT_MAP_SIZE)]
    map_size: usize,

    /// Net number of marks on a full line needed to win
    #[arg(short, long, default_value_t = DEFAULT_WIN_POINT)]
    win_point: usize,

    /// Who opens a new game
    #[arg(short, long, value_enum, default_value_t = FirstPlayer::O)]
    first: FirstPlayer,

    /// RNG seed, used with `--first random`
    #[arg(long)]
    seed: Option<u64>,

    /// Resume the game saved in this file
    #[arg(long)]
    load: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    let first = match args.first {
        FirstPlayer::O => Side::O,
        FirstPlayer::X => Side::X,
        FirstPlayer::Random => {
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            if rng.gen::<bool>() {
                Side::X
            } else {
                Side::O
            }
        }
    };

    let game = if let Some(path) = &args.load {
        load_game(path, first)?
    } else {
        let config = GameConfig {
            map_size: args.map_size,
            win_point: args.win_point,
            ..GameConfig::default()
        };
        Game::new(config, first)?
    };

    eprintln!("Commands: '<x> <y>' to play, 'show', 'restart', 'save <file>', 'load <file>', 'quit'");
    let mut session = Session::new(game, first);
    let end = session.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    debug!(?end, "Session finished");
    if end == SessionEnd::EndOfInput {
        eprintln!("End of input");
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(format),
        )
        .with(filter)
        .init();
}
