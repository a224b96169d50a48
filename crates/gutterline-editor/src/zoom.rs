//! Display font state and the modifier+wheel zoom gesture.
//!
//! A single physical wheel gesture arrives as a burst of small notifications.
//! The first one steps the size and opens a short window; notifications inside
//! that window are swallowed. The window is not extended by them, so a long
//! continuous scroll steps once per window.

use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

use gutterline_settings::GutterSettings;

/// Family and point size of the text area font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSpec {
    pub family: String,
    pub point_size: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, point_size: u32) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }
}

/// What a zoom notification did to the font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomOutcome {
    /// The size changed to `new_size`.
    Resized { old_size: u32, new_size: u32 },
    /// The step was accepted but the size is already at the bound.
    AtLimit,
    /// A previous notification of the same gesture already stepped the size.
    Debounced,
    /// No vertical movement.
    Ignored,
}

impl ZoomOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, ZoomOutcome::Resized { .. })
    }
}

/// Font size state owned by the editor, mutated only by the zoom gesture.
#[derive(Debug, Clone)]
pub struct FontZoom {
    font: FontSpec,
    range: RangeInclusive<u32>,
    debounce: Duration,
    /// End of the current gesture window, if one is open.
    window_end: Option<Instant>,
}

impl FontZoom {
    pub fn new(font: FontSpec, range: RangeInclusive<u32>, debounce: Duration) -> Self {
        let (min, max) = (*range.start(), (*range.end()).max(*range.start()));
        let font = FontSpec {
            point_size: font.point_size.clamp(min, max),
            ..font
        };
        Self {
            font,
            range: min..=max,
            debounce,
            window_end: None,
        }
    }

    pub fn from_settings(settings: &GutterSettings) -> Self {
        Self::new(
            FontSpec::new(settings.font.family.clone(), settings.font.size),
            settings.font.min_size..=settings.font.max_size,
            settings.zoom.debounce(),
        )
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn point_size(&self) -> u32 {
        self.font.point_size
    }

    pub fn range(&self) -> &RangeInclusive<u32> {
        &self.range
    }

    /// Whether a notification at `now` falls inside an open gesture window.
    pub fn is_debouncing(&self, now: Instant) -> bool {
        self.window_end.is_some_and(|end| now < end)
    }

    /// Handle one wheel notification with vertical delta `delta_y`
    /// (positive zooms in) arriving at `now`.
    pub fn zoom(&mut self, delta_y: f32, now: Instant) -> ZoomOutcome {
        if delta_y == 0.0 || delta_y.is_nan() {
            return ZoomOutcome::Ignored;
        }
        if self.is_debouncing(now) {
            return ZoomOutcome::Debounced;
        }
        self.window_end = Some(now + self.debounce);

        let old_size = self.font.point_size;
        let new_size = if delta_y > 0.0 {
            old_size.saturating_add(1)
        } else {
            old_size.saturating_sub(1)
        };
        if !self.range.contains(&new_size) {
            return ZoomOutcome::AtLimit;
        }

        self.font.point_size = new_size;
        tracing::debug!(old_size, new_size, "Display font zoomed");
        ZoomOutcome::Resized { old_size, new_size }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(50);

    fn zoom_at(size: u32) -> FontZoom {
        FontZoom::new(FontSpec::new("Monospace", size), 6..=30, WINDOW)
    }

    #[test]
    fn test_single_notification_steps_once() {
        let mut zoom = zoom_at(10);
        let now = Instant::now();
        assert_eq!(
            zoom.zoom(120.0, now),
            ZoomOutcome::Resized {
                old_size: 10,
                new_size: 11
            }
        );
        assert_eq!(zoom.point_size(), 11);
    }

    #[test]
    fn test_burst_inside_window_steps_once() {
        let mut zoom = zoom_at(10);
        let start = Instant::now();
        let changes = (0..8)
            .filter(|i| zoom.zoom(15.0, start + Duration::from_millis(i * 5)).changed())
            .count();
        assert_eq!(changes, 1);
        assert_eq!(zoom.point_size(), 11);
    }

    #[test]
    fn test_spaced_notifications_each_step() {
        let mut zoom = zoom_at(10);
        let start = Instant::now();
        for i in 0..4 {
            assert!(zoom.zoom(-15.0, start + WINDOW * i).changed());
        }
        assert_eq!(zoom.point_size(), 6);
    }

    #[test]
    fn test_window_is_not_extended_by_swallowed_notifications() {
        let mut zoom = zoom_at(10);
        let start = Instant::now();
        assert!(zoom.zoom(1.0, start).changed());
        assert_eq!(zoom.zoom(1.0, start + Duration::from_millis(40)), ZoomOutcome::Debounced);
        assert!(zoom.zoom(1.0, start + Duration::from_millis(50)).changed());
        assert_eq!(zoom.point_size(), 12);
    }

    #[test]
    fn test_size_never_leaves_range() {
        let mut zoom = zoom_at(30);
        let now = Instant::now();
        assert_eq!(zoom.zoom(1.0, now), ZoomOutcome::AtLimit);
        assert_eq!(zoom.point_size(), 30);

        let mut zoom = zoom_at(6);
        assert_eq!(zoom.zoom(-1.0, now), ZoomOutcome::AtLimit);
        assert_eq!(zoom.point_size(), 6);
    }

    #[test]
    fn test_zero_delta_does_not_open_window() {
        let mut zoom = zoom_at(10);
        let now = Instant::now();
        assert_eq!(zoom.zoom(0.0, now), ZoomOutcome::Ignored);
        assert!(!zoom.is_debouncing(now));
        assert!(zoom.zoom(1.0, now).changed());
    }

    #[test]
    fn test_initial_size_is_clamped() {
        let zoom = FontZoom::new(FontSpec::new("Monospace", 64), 6..=30, WINDOW);
        assert_eq!(zoom.point_size(), 30);
    }

    #[test]
    fn test_from_settings() {
        let mut settings = GutterSettings::default();
        settings.font.size = 12;
        settings.zoom.debounce_ms = 10;
        let zoom = FontZoom::from_settings(&settings);
        assert_eq!(zoom.font(), &FontSpec::new("Monospace", 12));
        assert_eq!(zoom.range(), &(6..=30));
    }
}
