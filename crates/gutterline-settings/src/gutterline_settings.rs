//! Gutterline Settings
//!
//! Provides the persisted configuration for the code editor gutters:
//! - Font settings (family, default size, zoom bounds)
//! - Zoom gesture debounce
//! - Breakpoint gutter metrics (width, glyph size, padding)
//! - Line number gutter metrics
//!
//! Settings are stored as pretty-printed JSON under the user's config directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

mod validation;

pub use validation::SettingsError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GutterSettings {
    pub font: FontSettings,
    pub zoom: ZoomSettings,
    pub breakpoint_gutter: BreakpointGutterSettings,
    pub line_numbers: LineNumberSettings,
    /// Paint a full-width background behind the caret line.
    pub highlight_current_line: bool,
}

impl GutterSettings {
    /// Load settings from the default location, falling back to defaults when
    /// no settings file has been written yet.
    pub fn load() -> Result<Self> {
        let path = Self::settings_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {:?}", path))?;
        let settings: Self =
            serde_json::from_str(&content).with_context(|| "Failed to parse settings JSON")?;
        settings
            .validate()
            .with_context(|| format!("Invalid settings in {:?}", path))?;
        tracing::info!(path = %path.display(), "Loaded gutter settings");
        Ok(settings)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::settings_path()?;
        self.save_to(path)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;
        tracing::info!(path = %path.display(), "Saved gutter settings");
        Ok(())
    }

    pub fn settings_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not find config directory")?;
        Ok(config_dir.join("gutterline").join("settings.json"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSettings {
    pub family: String,
    /// Initial point size
    pub size: u32,
    /// Smallest size the zoom gesture may reach
    pub min_size: u32,
    /// Largest size the zoom gesture may reach
    pub max_size: u32,
}

impl Default for FontSettings {
    fn default() -> Self {
        Self {
            family: "Monospace".to_string(),
            size: 10,
            min_size: 6,
            max_size: 30,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomSettings {
    /// Window in which repeated wheel notifications count as one gesture
    pub debounce_ms: u64,
}

impl ZoomSettings {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for ZoomSettings {
    fn default() -> Self {
        Self { debounce_ms: 50 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointGutterSettings {
    pub width: f32,
    /// Horizontal offset of the glyph from the gutter's left edge
    pub padding: f32,
    pub glyph_width: f32,
    pub glyph_height: f32,
}

impl Default for BreakpointGutterSettings {
    fn default() -> Self {
        Self {
            width: 25.0,
            padding: 4.0,
            glyph_width: 16.0,
            glyph_height: 16.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineNumberSettings {
    /// Space added to the digit run when sizing the gutter
    pub right_padding: f32,
    /// Gap between the right edge of the numbers and the gutter edge
    pub text_inset: f32,
}

impl Default for LineNumberSettings {
    fn default() -> Self {
        Self {
            right_padding: 6.0,
            text_inset: 3.0,
        }
    }
}
