//! Editor configuration.
//!
//! Configuration is read from a JSON file. Every field has a default, so a
//! partial file (or `{}`) is valid:
//!
//! ```json
//! {
//!   "history_limit": 50,
//!   "canvas_size": { "width": 1024, "height": 700 },
//!   "available_stickers": [{ "name": "Star", "src": "/star.svg" }]
//! }
//! ```

use crate::constants::{DEFAULT_STICKER_CATALOG, MAX_HISTORY_STATES};
use crate::error::{ConfigError, ConfigResult};
use crate::types::{AvailableSticker, CanvasSize};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Name of the config directory under the platform config dir
const CONFIG_DIR_NAME: &str = "stickerboard";

/// Config file name
const CONFIG_FILE_NAME: &str = "editor.json";

/// Settings used to construct an `EditorStore`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Maximum number of undo steps kept in history
    pub history_limit: usize,
    /// Initial logical canvas size
    pub canvas_size: CanvasSize,
    /// Initial sticker catalog
    pub available_stickers: Vec<AvailableSticker>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY_STATES,
            canvas_size: CanvasSize::default(),
            available_stickers: (*DEFAULT_STICKER_CATALOG).clone(),
        }
    }
}

impl EditorConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: EditorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        debug!(path = %path.display(), "Loaded editor config");
        Ok(config)
    }

    /// Load the config at the default location, falling back to defaults
    /// if it is missing or unreadable.
    pub fn load_or_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Invalid editor config, using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.history_limit == 0 {
            return Err(ConfigError::InvalidHistoryLimit(self.history_limit));
        }
        if self.canvas_size.width == 0 || self.canvas_size.height == 0 {
            return Err(ConfigError::InvalidCanvasSize {
                width: self.canvas_size.width,
                height: self.canvas_size.height,
            });
        }
        Ok(())
    }
}

/// Default config file location (`<config dir>/stickerboard/editor.json`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
