use std::collections::VecDeque;

use crate::rng::GameRng;

use super::grid::is_occupied;
use super::types::Point;

pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

pub fn place_food(
    snake: &VecDeque<Point>,
    grid_size: usize,
    rng: &mut GameRng,
) -> Result<Point, String> {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let pos = Point::new(rng.random_range(0..grid_size), rng.random_range(0..grid_size));
        if !is_occupied(pos, snake.iter()) {
            return Ok(pos);
        }
    }

    // Rejection sampling stalls on a nearly full board; enumerate what is left.
    let free: Vec<Point> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Point::new(x, y)))
        .filter(|pos| !is_occupied(*pos, snake.iter()))
        .collect();

    if free.is_empty() {
        return Err("no free cell left to place food on".to_string());
    }

    Ok(free[rng.random_range(0..free.len())])
}
