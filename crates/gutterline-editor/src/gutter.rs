//! State common to both gutter panels: placement and pending repaints.

use crate::geometry::Rect;

/// A repaint request for one gutter, drained by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Damage {
    /// Shift the already painted pixels vertically by `dy`.
    Scroll(f32),
    /// Repaint this rectangle (gutter-local coordinates).
    Rect(Rect),
    /// Repaint the whole gutter.
    Full,
}

/// Geometry and outstanding damage of a gutter panel.
#[derive(Debug, Clone, Default)]
pub struct GutterPanel {
    geometry: Rect,
    damage: Vec<Damage>,
}

impl GutterPanel {
    /// Placement in the editor's widget space.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    pub fn set_geometry(&mut self, geometry: Rect) {
        if self.geometry != geometry {
            self.geometry = geometry;
            self.damage.push(Damage::Full);
        }
    }

    /// The gutter's own coordinate space.
    pub fn local_rect(&self) -> Rect {
        self.geometry.at_origin()
    }

    pub fn width(&self) -> f32 {
        self.geometry.width
    }

    pub fn scroll(&mut self, dy: f32) {
        self.damage.push(Damage::Scroll(dy));
    }

    /// Mark the rows `[top, top + height)` across the full gutter width dirty.
    pub fn update_rows(&mut self, top: f32, height: f32) {
        self.damage
            .push(Damage::Rect(Rect::new(0.0, top, self.geometry.width, height)));
    }

    pub fn repaint(&mut self) {
        self.damage.push(Damage::Full);
    }

    pub fn has_damage(&self) -> bool {
        !self.damage.is_empty()
    }

    pub fn take_damage(&mut self) -> Vec<Damage> {
        std::mem::take(&mut self.damage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_geometry_change_requests_full_repaint() {
        let mut panel = GutterPanel::default();
        panel.set_geometry(Rect::new(0.0, 0.0, 25.0, 300.0));
        assert_eq!(panel.take_damage(), vec![Damage::Full]);

        panel.set_geometry(Rect::new(0.0, 0.0, 25.0, 300.0));
        assert!(!panel.has_damage());
    }

    #[test]
    fn test_update_rows_spans_width() {
        let mut panel = GutterPanel::default();
        panel.set_geometry(Rect::new(25.0, 0.0, 30.0, 300.0));
        panel.take_damage();

        panel.update_rows(16.0, 16.0);
        panel.scroll(-16.0);
        assert_eq!(
            panel.take_damage(),
            vec![
                Damage::Rect(Rect::new(0.0, 16.0, 30.0, 16.0)),
                Damage::Scroll(-16.0)
            ]
        );
        assert!(panel.take_damage().is_empty());
    }
}
