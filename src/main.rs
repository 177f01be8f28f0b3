use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use snake_arcade::config::{
    DEFAULT_ARENA_HEIGHT, DEFAULT_ARENA_WIDTH, DEFAULT_FOOD_COUNT, DEFAULT_ROCKS_MAX,
    DEFAULT_ROCKS_MIN, DEFAULT_SPAWN_MARGIN, DEFAULT_TICK_INTERVAL_MS, GameConfig,
};
use snake_arcade::driver::TickDriver;
use snake_arcade::game::GameState;
use snake_arcade::grid::Arena;
use snake_arcade::input::{GameInput, InputHandler};
use snake_arcade::logging;
use snake_arcade::terminal_runtime::TerminalSession;

/// Longest the loop waits for a key before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Arena width in cells.
    #[arg(long, default_value_t = DEFAULT_ARENA_WIDTH)]
    width: u16,

    /// Arena height in cells.
    #[arg(long, default_value_t = DEFAULT_ARENA_HEIGHT)]
    height: u16,

    /// Cells kept clear along each wall when placing food and rocks.
    #[arg(long, default_value_t = DEFAULT_SPAWN_MARGIN)]
    margin: u16,

    /// Milliseconds between game ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Number of food items on the board.
    #[arg(long, default_value_t = DEFAULT_FOOD_COUNT)]
    foods: u16,

    /// Fewest rocks per round.
    #[arg(long = "rocks-min", default_value_t = DEFAULT_ROCKS_MIN)]
    rocks_min: u16,

    /// Most rocks per round.
    #[arg(long = "rocks-max", default_value_t = DEFAULT_ROCKS_MAX)]
    rocks_max: u16,

    /// Fixed RNG seed for a reproducible board.
    #[arg(long)]
    seed: Option<u64>,

    /// Where to write the log file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            arena: Arena {
                width: self.width,
                height: self.height,
                spawn_margin: self.margin,
            },
            tick_interval_ms: self.tick_ms,
            food_count: self.foods,
            rocks_min: self.rocks_min,
            rocks_max: self.rocks_max,
            seed: self.seed,
            ..GameConfig::default()
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    if let Err(error) = logging::init(&log_path) {
        eprintln!("Logging disabled ({}): {error}", log_path.display());
    }

    let config = cli.game_config();
    match serde_json::to_string(&config) {
        Ok(json) => tracing::info!(config = %json, "configuration loaded"),
        Err(error) => tracing::warn!(%error, "could not serialize configuration"),
    }

    let state = match GameState::new(config) {
        Ok(state) => state,
        Err(error) => {
            tracing::error!(%error, "invalid configuration");
            eprintln!("snake-arcade: {error}");
            return ExitCode::FAILURE;
        }
    };

    match run(state) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "terminal error");
            eprintln!("snake-arcade: {error}");
            ExitCode::FAILURE
        }
    }
}

/// Single-threaded event loop: read input, drain commands, tick when due,
/// draw.
fn run(mut state: GameState) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let mut input = InputHandler::new(FRAME_INTERVAL);
    let mut driver = TickDriver::new(state.config().tick_interval());

    loop {
        session.draw(&state)?;

        if let Some(game_input) = input.poll_input()? {
            if game_input == GameInput::Quit {
                break;
            }
            state.enqueue(game_input);
        }

        state.process_commands();
        let now = Instant::now();
        driver.sync(state.wants_ticks(), now);

        if driver.poll(now) {
            state.tick();
            driver.sync(state.wants_ticks(), now);
        }
    }

    tracing::info!(best = state.scoreboard.best, "quit");
    Ok(())
}
