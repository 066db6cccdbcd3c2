use crate::rng::GameRng;

use super::grid::{is_occupied, is_turn_allowed, next_position};
use super::settings::DEFAULT_EXPLORATION_RATE;
use super::state::GameState;
use super::types::{Direction, Point};

pub struct BotController {
    exploration_rate: f32,
}

impl Default for BotController {
    fn default() -> Self {
        Self {
            exploration_rate: DEFAULT_EXPLORATION_RATE,
        }
    }
}

impl BotController {
    pub fn new(exploration_rate: f32) -> Self {
        Self {
            exploration_rate: exploration_rate.clamp(0.0, 1.0),
        }
    }

    pub fn choose_move(&self, state: &GameState, rng: &mut GameRng) -> Direction {
        let head = state.head();
        let body_len = state.snake.len();

        let mut safe_moves: Vec<(Direction, Point)> = Vec::new();
        for direction in Direction::ALL {
            if !is_turn_allowed(state.direction, direction) {
                continue;
            }
            let Some(next) = next_position(head, direction, state.mode, state.grid_size) else {
                continue;
            };
            if is_occupied(next, state.snake.iter().take(body_len - 1)) {
                continue;
            }
            safe_moves.push((direction, next));
        }

        if safe_moves.is_empty() {
            // Nothing is survivable; keep going rather than reverse.
            return state.direction;
        }

        if rng.random::<f32>() < self.exploration_rate {
            return safe_moves[rng.random_range(0..safe_moves.len())].0;
        }

        let mut best_direction = safe_moves[0].0;
        let mut best_distance = manhattan_distance(safe_moves[0].1, state.food);
        for &(direction, next) in safe_moves.iter().skip(1) {
            let distance = manhattan_distance(next, state.food);
            if distance < best_distance {
                best_distance = distance;
                best_direction = direction;
            }
        }
        best_direction
    }
}

fn manhattan_distance(a: Point, b: Point) -> usize {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}
