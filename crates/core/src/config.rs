//! Session configuration - board geometry, speed curve, difficulty presets
//!
//! A [`GameConfig`] is handed to [`crate::GameState::new`] and stays immutable for the
//! whole session. Intervals are stored in seconds so config files stay readable;
//! the engine converts them to [`Duration`] once at construction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rng::RandomizerKind;
use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, INITIAL_DROP_INTERVAL_SECS, LEVEL_SPEED_INCREASE_SECS,
    LINES_PER_LEVEL, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MAX_STARTING_LEVEL, MIN_DROP_INTERVAL_SECS,
    SPEED_INCREASE_SECS, START_Y, WALL_KICK_ATTEMPTS, WALL_KICK_OFFSETS,
};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Validation(String),
}

/// Named speed presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Parse difficulty from string (case-insensitive)
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "normal" => Some(Difficulty::Normal),
            "hard" => Some(Difficulty::Hard),
            "expert" => Some(Difficulty::Expert),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// `(initial interval, per-tick increase, per-level increase, lines per level)`
    fn speed_table(&self) -> (f64, f64, f64, u32) {
        match self {
            Difficulty::Easy => (1.2, 0.0003, 0.08, 12),
            Difficulty::Normal => (1.0, 0.0005, 0.1, 10),
            Difficulty::Hard => (0.8, 0.0008, 0.12, 8),
            Difficulty::Expert => (0.6, 0.001, 0.15, 6),
        }
    }
}

/// Everything a session needs to know up front
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_width: usize,
    pub board_height: usize,
    /// Spawn anchor column
    pub spawn_x: i32,
    /// Spawn anchor row
    pub spawn_y: i32,
    pub starting_level: u32,
    /// Seconds per gravity drop at level 1
    pub initial_drop_interval: f64,
    /// Seconds shaved off the interval after every gravity drop
    pub speed_increase: f64,
    /// Seconds shaved off the interval on every level-up
    pub level_speed_increase: f64,
    /// Floor for the drop interval, in seconds
    pub min_drop_interval: f64,
    pub lines_per_level: u32,
    /// How many entries of the kick table a rotation may try
    pub wall_kick_attempts: usize,
    pub randomizer: RandomizerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            spawn_x: BOARD_WIDTH as i32 / 2 - 1,
            spawn_y: START_Y,
            starting_level: 1,
            initial_drop_interval: INITIAL_DROP_INTERVAL_SECS,
            speed_increase: SPEED_INCREASE_SECS,
            level_speed_increase: LEVEL_SPEED_INCREASE_SECS,
            min_drop_interval: MIN_DROP_INTERVAL_SECS,
            lines_per_level: LINES_PER_LEVEL,
            wall_kick_attempts: WALL_KICK_ATTEMPTS,
            randomizer: RandomizerKind::Uniform,
        }
    }
}

impl GameConfig {
    /// Default config with the board resized and the spawn column re-centered
    pub fn with_board_size(mut self, width: usize, height: usize) -> Self {
        self.board_width = width;
        self.board_height = height;
        self.spawn_x = width as i32 / 2 - 1;
        self
    }

    /// Overlay a difficulty preset's speed parameters
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        let (initial, per_tick, per_level, lines) = difficulty.speed_table();
        self.initial_drop_interval = initial;
        self.speed_increase = per_tick;
        self.level_speed_increase = per_level;
        self.lines_per_level = lines;
        self
    }

    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Serialize as pretty JSON
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < 4 || self.board_height < 4 {
            return Err(ConfigError::Validation(format!(
                "board must be at least 4x4, got {}x{}",
                self.board_width, self.board_height
            )));
        }
        if self.board_width > MAX_BOARD_WIDTH || self.board_height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::Validation(format!(
                "board must be at most {}x{}, got {}x{}",
                MAX_BOARD_WIDTH, MAX_BOARD_HEIGHT, self.board_width, self.board_height
            )));
        }
        if self.spawn_x < 0 || self.spawn_x as usize >= self.board_width {
            return Err(ConfigError::Validation(format!(
                "spawn_x {} is outside the board",
                self.spawn_x
            )));
        }
        if self.spawn_y < 0 || self.spawn_y as usize >= self.board_height {
            return Err(ConfigError::Validation(format!(
                "spawn_y {} is outside the board",
                self.spawn_y
            )));
        }
        if !(1..=MAX_STARTING_LEVEL).contains(&self.starting_level) {
            return Err(ConfigError::Validation(format!(
                "starting_level must be between 1 and {}",
                MAX_STARTING_LEVEL
            )));
        }
        for (name, value) in [
            ("initial_drop_interval", self.initial_drop_interval),
            ("min_drop_interval", self.min_drop_interval),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Validation(format!("{name} must be > 0")));
            }
        }
        for (name, value) in [
            ("speed_increase", self.speed_increase),
            ("level_speed_increase", self.level_speed_increase),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Validation(format!("{name} must be >= 0")));
            }
        }
        if self.min_drop_interval > self.initial_drop_interval {
            return Err(ConfigError::Validation(
                "min_drop_interval must not exceed initial_drop_interval".into(),
            ));
        }
        if self.lines_per_level == 0 {
            return Err(ConfigError::Validation(
                "lines_per_level must be > 0".into(),
            ));
        }
        if self.wall_kick_attempts > WALL_KICK_OFFSETS.len() {
            return Err(ConfigError::Validation(format!(
                "wall_kick_attempts must be at most {}",
                WALL_KICK_OFFSETS.len()
            )));
        }
        Ok(())
    }

    /// Drop interval at session start: the base interval divided by the starting level
    pub fn starting_drop_interval(&self) -> Duration {
        let level = self.starting_level.max(1) as f64;
        secs(self.initial_drop_interval / level).max(self.min_drop_interval())
    }

    pub fn min_drop_interval(&self) -> Duration {
        secs(self.min_drop_interval)
    }

    pub fn speed_increase(&self) -> Duration {
        secs(self.speed_increase)
    }

    pub fn level_speed_increase(&self) -> Duration {
        secs(self.level_speed_increase)
    }

    /// The kick offsets a rotation may try, in order
    pub fn wall_kicks(&self) -> &'static [(i32, i32)] {
        &WALL_KICK_OFFSETS[..self.wall_kick_attempts.min(WALL_KICK_OFFSETS.len())]
    }
}

/// Seconds to `Duration`, treating anything negative or non-finite as zero
fn secs(value: f64) -> Duration {
    Duration::try_from_secs_f64(value).unwrap_or(Duration::ZERO)
}
