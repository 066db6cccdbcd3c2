pub mod game;
pub mod logger;
pub mod rng;

pub use game::{
    BotController, BoundaryMode, Direction, GameSettings, GameState, Point, place_food,
};
pub use rng::GameRng;
