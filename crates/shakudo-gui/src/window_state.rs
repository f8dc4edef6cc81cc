//! Persist and restore window geometry and theme mode across sessions.
//!
//! Saves a small JSON file to `~/.local/share/shakudo/window.json`
//! (or platform equivalent via `directories` crate). This is app
//! chrome, kept separate from the design-token settings files.

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeMode;

const FILE_NAME: &str = "window.json";

/// Persisted window geometry plus the chosen appearance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowState {
    pub width: f32,
    pub height: f32,
    pub x: f32,
    pub y: f32,
    pub theme_mode: ThemeMode,
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            width: 1480.0,
            height: 900.0,
            x: -1.0,
            y: -1.0,
            theme_mode: ThemeMode::System,
        }
    }
}

impl WindowState {
    /// Convert to an iced `Size`.
    pub fn size(&self) -> Size {
        Size::new(self.width.max(720.0), self.height.max(480.0))
    }

    /// Convert to an iced window `Position`, if we have a valid saved position.
    pub fn position(&self) -> Option<Point> {
        if self.x >= 0.0 && self.y >= 0.0 {
            Some(Point::new(self.x, self.y))
        } else {
            None
        }
    }

    /// Load from disk, returning default if file doesn't exist or is invalid.
    pub fn load() -> Self {
        state_path()
            .and_then(|path| std::fs::read_to_string(&path).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save to disk. Errors are logged but not propagated.
    pub fn save(&self) {
        if let Some(path) = state_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            match serde_json::to_string_pretty(self) {
                Ok(json) => {
                    if let Err(e) = std::fs::write(&path, json) {
                        tracing::warn!("Failed to save window state: {e}");
                    }
                }
                Err(e) => tracing::warn!("Failed to serialize window state: {e}"),
            }
        }
    }
}

/// Path to the window state JSON file.
fn state_path() -> Option<std::path::PathBuf> {
    directories::ProjectDirs::from("", "", "shakudo").map(|dirs| dirs.data_dir().join(FILE_NAME))
}
