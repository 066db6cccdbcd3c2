use std::time::Duration;
use tokio::time::interval;

use snake_engine::{BotController, GameRng, GameState};

use crate::observer::StateObserver;

pub struct SpectatedGame {
    pub game_id: usize,
    pub state: GameState,
    pub bot: BotController,
    pub rng: GameRng,
    pub tick_interval: Duration,
}

pub async fn run_spectated_game(
    mut game: SpectatedGame,
    observer: impl StateObserver,
    max_ticks: u64,
) -> Result<GameState, String> {
    let mut ticker = interval(game.tick_interval);

    for _ in 0..max_ticks {
        ticker.tick().await;

        let direction = game.bot.choose_move(&game.state, &mut game.rng);
        game.state = game
            .state
            .set_pending_direction(direction)
            .advance(&mut game.rng)?;

        observer.on_tick(game.game_id, &game.state);

        if game.state.game_over {
            observer.on_game_over(game.game_id, &game.state);
            break;
        }
    }

    Ok(game.state)
}
