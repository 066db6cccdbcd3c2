use serde::{Deserialize, Serialize};

use snake_engine::{BoundaryMode, GameSettings};

pub const DEFAULT_CONFIG_FILE: &str = "snake_spectator_config.yaml";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpectatorConfig {
    pub mode: BoundaryMode,
    pub game_count: usize,
    pub tick_interval_ms: u64,
    pub max_ticks: u64,
    #[serde(default)]
    pub game: GameSettings,
}

impl Default for SpectatorConfig {
    fn default() -> Self {
        Self {
            mode: BoundaryMode::Wrap,
            game_count: 4,
            tick_interval_ms: 150,
            max_ticks: 2000,
            game: GameSettings::default(),
        }
    }
}

impl SpectatorConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.game_count < 1 || self.game_count > 32 {
            return Err("Game count must be between 1 and 32".to_string());
        }
        if self.tick_interval_ms < 50 || self.tick_interval_ms > 5000 {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        if self.max_ticks < 1 {
            return Err("Max ticks must be at least 1".to_string());
        }
        self.game.validate()
    }
}

pub fn load_config(path: &str) -> Result<SpectatorConfig, String> {
    if !std::path::Path::new(path).exists() {
        return Ok(SpectatorConfig::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file {}: {}", path, e))?;
    let config: SpectatorConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to parse config file {}: {}", path, e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}
