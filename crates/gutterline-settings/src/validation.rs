use thiserror::Error;

use crate::GutterSettings;

/// Reasons a settings file is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("font family must not be empty")]
    EmptyFontFamily,

    #[error("invalid font size range {min}..={max}")]
    InvalidSizeRange { min: u32, max: u32 },

    #[error("font size {size} is outside the zoom range {min}..={max}")]
    SizeOutOfRange { size: u32, min: u32, max: u32 },

    #[error("breakpoint glyph ({glyph}px + {padding}px padding) does not fit a {width}px gutter")]
    GlyphTooWide { glyph: f32, padding: f32, width: f32 },
}

impl GutterSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let font = &self.font;
        if font.family.trim().is_empty() {
            return Err(SettingsError::EmptyFontFamily);
        }
        if font.min_size == 0 || font.min_size > font.max_size {
            return Err(SettingsError::InvalidSizeRange {
                min: font.min_size,
                max: font.max_size,
            });
        }
        if !(font.min_size..=font.max_size).contains(&font.size) {
            return Err(SettingsError::SizeOutOfRange {
                size: font.size,
                min: font.min_size,
                max: font.max_size,
            });
        }

        let gutter = &self.breakpoint_gutter;
        if gutter.padding + gutter.glyph_width > gutter.width {
            return Err(SettingsError::GlyphTooWide {
                glyph: gutter.glyph_width,
                padding: gutter.padding,
                width: gutter.width,
            });
        }
        Ok(())
    }
}
