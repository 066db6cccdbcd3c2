use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::log;
use crate::rng::GameRng;

use super::food::place_food;
use super::grid::{is_occupied, is_turn_allowed, next_position};
use super::settings::GameSettings;
use super::types::{BoundaryMode, Direction, Point};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub snake: VecDeque<Point>,
    pub food: Point,
    pub direction: Direction,
    pub pending_direction: Direction,
    pub score: u32,
    pub game_over: bool,
    pub paused: bool,
    pub mode: BoundaryMode,
    pub grid_size: usize,
    pub food_reward: u32,
}

impl GameState {
    pub fn new(
        mode: BoundaryMode,
        settings: &GameSettings,
        rng: &mut GameRng,
    ) -> Result<Self, String> {
        settings.validate()?;

        let center = settings.grid_size / 2;
        let snake: VecDeque<Point> = (0..settings.initial_snake_length)
            .map(|i| Point::new(center - i, center))
            .collect();
        let food = place_food(&snake, settings.grid_size, rng)?;

        Ok(Self {
            snake,
            food,
            direction: Direction::Right,
            pending_direction: Direction::Right,
            score: 0,
            game_over: false,
            paused: false,
            mode,
            grid_size: settings.grid_size,
            food_reward: settings.food_reward,
        })
    }

    pub fn reset(
        mode: BoundaryMode,
        settings: &GameSettings,
        rng: &mut GameRng,
    ) -> Result<Self, String> {
        Self::new(mode, settings, rng)
    }

    pub fn head(&self) -> Point {
        *self
            .snake
            .front()
            .expect("snake body should never be empty")
    }

    // Legality is checked against the last committed direction, not the
    // pending one, so queued illegal inputs never accumulate into a reversal.
    pub fn set_pending_direction(&self, requested: Direction) -> Self {
        if !is_turn_allowed(self.direction, requested) {
            return self.clone();
        }
        Self {
            pending_direction: requested,
            ..self.clone()
        }
    }

    pub fn toggle_pause(&self) -> Self {
        if self.game_over {
            return self.clone();
        }
        Self {
            paused: !self.paused,
            ..self.clone()
        }
    }

    pub fn advance(&self, rng: &mut GameRng) -> Result<Self, String> {
        if self.game_over || self.paused {
            return Ok(self.clone());
        }

        let Some(new_head) =
            next_position(self.head(), self.pending_direction, self.mode, self.grid_size)
        else {
            return Ok(self.collided());
        };

        // The tail cell vacates this tick, so it is not part of the collision body.
        let body_without_tail = self.snake.iter().take(self.snake.len() - 1);
        if is_occupied(new_head, body_without_tail) {
            return Ok(self.collided());
        }

        let mut next = self.clone();
        next.direction = self.pending_direction;
        next.snake.push_front(new_head);

        if new_head == self.food {
            next.score += self.food_reward;
            next.food = place_food(&next.snake, self.grid_size, rng)?;
            log!(
                "ate food at ({}, {}). Score: {}",
                new_head.x,
                new_head.y,
                next.score
            );
        } else {
            next.snake.pop_back();
        }

        Ok(next)
    }

    // Snake, food and score stay frozen at the moment of collision.
    fn collided(&self) -> Self {
        let mut next = self.clone();
        next.game_over = true;
        next.direction = self.pending_direction;
        log!(
            "game over at ({}, {}) heading {:?}. Final score: {}",
            self.head().x,
            self.head().y,
            self.pending_direction,
            self.score
        );
        next
    }
}
