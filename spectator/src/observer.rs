use snake_engine::GameState;

pub trait StateObserver {
    fn on_tick(&self, game_id: usize, state: &GameState);
    fn on_game_over(&self, game_id: usize, state: &GameState);
}

pub struct LoggingObserver;

impl StateObserver for LoggingObserver {
    fn on_tick(&self, _game_id: usize, _state: &GameState) {}

    fn on_game_over(&self, game_id: usize, state: &GameState) {
        snake_engine::log!(
            "[game:{}] over with score {} (length {})",
            game_id,
            state.score,
            state.snake.len()
        );
    }
}
