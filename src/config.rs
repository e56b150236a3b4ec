//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`W4D_SECTION__KEY`)
//!
//! Command-line arguments override all of the above; the merge happens in
//! the binary.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Render configuration
    #[serde(default)]
    pub render: RenderConfig,
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            render: RenderConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`W4D_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // Environment variables override everything
        // W4D_RENDER__FRAMES=60 -> render.frames = 60
        figment = figment.merge(Env::prefixed("W4D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// Render configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Number of frames in the animation
    pub frames: usize,
    /// Base size; frames are rendered at (size*8) x (size*8) pixels
    pub size: usize,
    /// Worker count; 0 means use the available hardware parallelism
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            frames: 1800,
            size: 50,
            workers: 0,
        }
    }
}

impl RenderConfig {
    /// Frame width in pixels
    #[inline]
    pub fn width(&self) -> usize {
        self.size * 8
    }

    /// Frame height in pixels
    #[inline]
    pub fn height(&self) -> usize {
        self.size * 8
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory the PPM frames are written to
    pub dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: "images".to_string(),
        }
    }
}

/// Optional per-run overrides applied on top of the loaded configuration
///
/// The binary fills this from command-line arguments. Set fields replace
/// the corresponding config values; unset fields leave them alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub frames: Option<usize>,
    pub size: Option<usize>,
    pub workers: Option<usize>,
    pub output_dir: Option<String>,
}

impl AppConfig {
    /// Apply command-line overrides; these win over files and environment
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(frames) = overrides.frames {
            self.render.frames = frames;
        }
        if let Some(size) = overrides.size {
            self.render.size = size;
        }
        if let Some(workers) = overrides.workers {
            self.render.workers = workers;
        }
        if let Some(dir) = &overrides.output_dir {
            self.output.dir = dir.clone();
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
