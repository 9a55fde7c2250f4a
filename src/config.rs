//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Starfield animation tuning.
    starfield: StarfieldConfig,

    /// Terminal front end settings.
    tui: TuiConfig,
}

/// Tuning for the starfield background.
///
/// Distances are in pixels of the virtual canvas the starfield moves in.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Stroke width of a star at depth 1.
    star_size: f64,

    /// Smallest depth a freshly spawned star may get.
    star_min_scale: f64,

    /// How far past the edge a star may drift before it is recycled.
    overflow_threshold: f64,

    /// One star per this many pixels of (width + height).
    star_density: f64,

    /// Depth gained per frame; also drives the outward zoom.
    zoom_speed: f64,

    /// Per-frame decay of the pointer-driven target velocity.
    target_damping: f64,

    /// Fraction of the gap to the target velocity closed each frame.
    velocity_easing: f64,

    /// Pointer movement is divided by this before it becomes velocity.
    pointer_sensitivity: f64,

    /// Fixed RNG seed; random when absent.
    seed: Option<u64>,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            star_size: 3.0,
            star_min_scale: 0.2,
            overflow_threshold: 50.0,
            star_density: 5.0,
            zoom_speed: 0.005,
            target_damping: 0.76,
            velocity_easing: 0.8,
            pointer_sensitivity: 8.0,
            seed: None,
        }
    }
}

impl StarfieldConfig {
    /// Returns this config with the RNG seed fixed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Terminal front end settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Frame budget in milliseconds.
    frame_millis: u64,

    /// Where logs go while the terminal is in the alternate screen.
    log_file: PathBuf,

    /// Virtual pixels per terminal column.
    cell_width_px: f64,

    /// Virtual pixels per terminal row.
    cell_height_px: f64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            frame_millis: 33,
            log_file: PathBuf::from("starfield_tictactoe.log"),
            cell_width_px: 8.0,
            cell_height_px: 16.0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!("Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the starfield seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.starfield = self.starfield.with_seed(seed);
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
