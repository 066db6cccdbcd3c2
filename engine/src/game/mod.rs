mod bot;
mod food;
mod grid;
mod settings;
mod state;
mod types;

pub use bot::BotController;
pub use food::{MAX_PLACEMENT_ATTEMPTS, place_food};
pub use grid::{is_occupied, is_turn_allowed, next_position};
pub use settings::{
    DEFAULT_EXPLORATION_RATE, DEFAULT_FOOD_REWARD, DEFAULT_GRID_SIZE, GameSettings,
    INITIAL_SNAKE_LENGTH,
};
pub use state::GameState;
pub use types::{BoundaryMode, Direction, Point};
