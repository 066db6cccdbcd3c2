use serde::{Deserialize, Serialize};

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const INITIAL_SNAKE_LENGTH: usize = 3;
pub const DEFAULT_FOOD_REWARD: u32 = 10;
pub const DEFAULT_EXPLORATION_RATE: f32 = 0.1;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub grid_size: usize,
    pub initial_snake_length: usize,
    pub food_reward: u32,
    pub exploration_rate: f32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            food_reward: DEFAULT_FOOD_REWARD,
            exploration_rate: DEFAULT_EXPLORATION_RATE,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_size < 10 || self.grid_size > 100 {
            return Err("Grid size must be between 10 and 100".to_string());
        }
        if self.initial_snake_length < 1 {
            return Err("Initial snake length must be at least 1".to_string());
        }
        if self.initial_snake_length > self.grid_size / 2 {
            return Err("Initial snake length must fit the centered spawn".to_string());
        }
        if self.food_reward == 0 {
            return Err("Food reward must be positive".to_string());
        }
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err("Exploration rate must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        assert!(GameSettings::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_grid() {
        let settings = GameSettings {
            grid_size: 4,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_snake_longer_than_spawn_area() {
        let settings = GameSettings {
            grid_size: 10,
            initial_snake_length: 8,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_exploration_rate() {
        let settings = GameSettings {
            exploration_rate: 1.5,
            ..GameSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
