use super::types::{BoundaryMode, Direction, Point};

pub fn is_occupied<'a>(pos: Point, mut cells: impl Iterator<Item = &'a Point>) -> bool {
    cells.any(|cell| *cell == pos)
}

pub fn is_turn_allowed(current: Direction, requested: Direction) -> bool {
    requested != current.opposite()
}

pub fn wrapping_inc(value: usize, max: usize) -> usize {
    if value + 1 >= max { 0 } else { value + 1 }
}

pub fn wrapping_dec(value: usize, max: usize) -> usize {
    if value == 0 { max - 1 } else { value - 1 }
}

// None means the move leaves a walled board; wrap boards always yield a cell.
pub fn next_position(
    from: Point,
    direction: Direction,
    mode: BoundaryMode,
    grid_size: usize,
) -> Option<Point> {
    match mode {
        BoundaryMode::Walled => match direction {
            Direction::Up if from.y > 0 => Some(Point::new(from.x, from.y - 1)),
            Direction::Down if from.y < grid_size - 1 => Some(Point::new(from.x, from.y + 1)),
            Direction::Left if from.x > 0 => Some(Point::new(from.x - 1, from.y)),
            Direction::Right if from.x < grid_size - 1 => Some(Point::new(from.x + 1, from.y)),
            _ => None,
        },
        BoundaryMode::Wrap => match direction {
            Direction::Up => Some(Point::new(from.x, wrapping_dec(from.y, grid_size))),
            Direction::Down => Some(Point::new(from.x, wrapping_inc(from.y, grid_size))),
            Direction::Left => Some(Point::new(wrapping_dec(from.x, grid_size), from.y)),
            Direction::Right => Some(Point::new(wrapping_inc(from.x, grid_size), from.y)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_occupied_scans_all_segments() {
        let snake = [Point::new(5, 5), Point::new(4, 5)];
        assert!(is_occupied(Point::new(5, 5), snake.iter()));
        assert!(is_occupied(Point::new(4, 5), snake.iter()));
        assert!(!is_occupied(Point::new(6, 5), snake.iter()));
        assert!(!is_occupied(Point::new(5, 6), snake.iter()));
    }

    #[test]
    fn test_reversal_is_never_allowed() {
        for direction in Direction::ALL {
            assert!(!is_turn_allowed(direction, direction.opposite()));
        }
    }

    #[test]
    fn test_same_and_perpendicular_turns_are_allowed() {
        for current in Direction::ALL {
            let allowed = Direction::ALL
                .into_iter()
                .filter(|&requested| is_turn_allowed(current, requested))
                .count();
            assert!(is_turn_allowed(current, current));
            assert_eq!(allowed, 3);
        }
    }

    #[test]
    fn test_next_position_wraps_on_every_edge() {
        let grid_size = 10;
        assert_eq!(
            next_position(Point::new(9, 5), Direction::Right, BoundaryMode::Wrap, grid_size),
            Some(Point::new(0, 5))
        );
        assert_eq!(
            next_position(Point::new(0, 5), Direction::Left, BoundaryMode::Wrap, grid_size),
            Some(Point::new(9, 5))
        );
        assert_eq!(
            next_position(Point::new(5, 0), Direction::Up, BoundaryMode::Wrap, grid_size),
            Some(Point::new(5, 9))
        );
        assert_eq!(
            next_position(Point::new(5, 9), Direction::Down, BoundaryMode::Wrap, grid_size),
            Some(Point::new(5, 0))
        );
    }

    #[test]
    fn test_next_position_is_none_outside_walled_board() {
        let grid_size = 10;
        assert_eq!(
            next_position(Point::new(9, 5), Direction::Right, BoundaryMode::Walled, grid_size),
            None
        );
        assert_eq!(
            next_position(Point::new(0, 5), Direction::Left, BoundaryMode::Walled, grid_size),
            None
        );
        assert_eq!(
            next_position(Point::new(5, 0), Direction::Up, BoundaryMode::Walled, grid_size),
            None
        );
        assert_eq!(
            next_position(Point::new(5, 9), Direction::Down, BoundaryMode::Walled, grid_size),
            None
        );
    }

    #[test]
    fn test_next_position_interior_moves_match_in_both_modes() {
        let from = Point::new(5, 5);
        for direction in Direction::ALL {
            let wrapped = next_position(from, direction, BoundaryMode::Wrap, 10);
            let walled = next_position(from, direction, BoundaryMode::Walled, 10);
            assert_eq!(wrapped, walled);
        }
    }
}
