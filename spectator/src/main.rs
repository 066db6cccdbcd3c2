mod config;
mod observer;
mod session;

use std::time::Duration;

use clap::Parser;

use snake_engine::{BotController, GameRng, GameState, log, logger};

use observer::LoggingObserver;
use session::SpectatedGame;

#[derive(Parser)]
#[command(name = "snake_spectator")]
struct Args {
    #[arg(long, default_value = config::DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    games: Option<usize>,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Spectator".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let mut config = config::load_config(&args.config)?;
    if let Some(games) = args.games {
        config.game_count = games;
    }
    config.validate()?;

    let base_seed = args.seed.unwrap_or_else(|| GameRng::from_random().seed());
    log!(
        "Spectating {} autonomous game(s) in {:?} mode, base seed {}",
        config.game_count,
        config.mode,
        base_seed
    );

    let mut handles = Vec::new();
    for game_id in 0..config.game_count {
        let mut rng = GameRng::new(base_seed.wrapping_add(game_id as u64));
        let state = GameState::new(config.mode, &config.game, &mut rng)?;
        let game = SpectatedGame {
            game_id,
            state,
            bot: BotController::new(config.game.exploration_rate),
            rng,
            tick_interval: Duration::from_millis(config.tick_interval_ms),
        };
        let max_ticks = config.max_ticks;

        handles.push(tokio::spawn(async move {
            session::run_spectated_game(game, LoggingObserver, max_ticks).await
        }));
    }

    for (game_id, handle) in handles.into_iter().enumerate() {
        match handle.await? {
            Ok(state) => log!(
                "[game:{}] finished with score {} (length {})",
                game_id,
                state.score,
                state.snake.len()
            ),
            Err(e) => log!("[game:{}] aborted: {}", game_id, e),
        }
    }

    Ok(())
}
