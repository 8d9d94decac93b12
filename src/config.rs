//! Grid configuration persistence
//!
//! Stores user preferences in `~/.config/gridlens/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gesture::DEFAULT_DRAG_THRESHOLD;

/// Configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Pointer travel (px, per axis) before a press becomes a drag
    #[serde(default = "default_drag_threshold")]
    pub drag_threshold_px: f64,
    /// Put rows back in load order when a column returns to unsorted
    #[serde(default = "default_true")]
    pub restore_order_on_unsort: bool,
    /// Rows shown by the text viewport
    #[serde(default = "default_viewport_rows")]
    pub viewport_rows: usize,
    /// Copy to the system clipboard (otherwise print the copied text)
    #[serde(default = "default_true")]
    pub clipboard: bool,
}

fn default_drag_threshold() -> f64 {
    DEFAULT_DRAG_THRESHOLD
}

fn default_true() -> bool {
    true
}

fn default_viewport_rows() -> usize {
    20
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            drag_threshold_px: default_drag_threshold(),
            restore_order_on_unsort: true,
            viewport_rows: default_viewport_rows(),
            clipboard: true,
        }
    }
}

impl GridConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str::<GridConfig>(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config.sanitized()
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Replace out-of-range values with defaults
    fn sanitized(mut self) -> Self {
        if !self.drag_threshold_px.is_finite() || self.drag_threshold_px < 0.0 {
            tracing::warn!(
                value = self.drag_threshold_px,
                "Invalid drag_threshold_px, using default"
            );
            self.drag_threshold_px = default_drag_threshold();
        }
        if self.viewport_rows == 0 {
            tracing::warn!("viewport_rows must be positive, using default");
            self.viewport_rows = default_viewport_rows();
        }
        self
    }
}
