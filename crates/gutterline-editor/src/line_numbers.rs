//! Line number gutter: right-aligned, 1-based numbers for each visible block.

use gutterline_settings::LineNumberSettings;

use crate::geometry::{Color, Rect};
use crate::gutter::GutterPanel;
use crate::host::TextHost;
use crate::layout::lines_in_band;
use crate::paint::{Fill, Painter, TextAlign};

/// Light grey panel behind the numbers.
const BACKGROUND: Color = Color::from_hex(0xC0C0C0);
/// Pen for the numbers.
const FOREGROUND: Color = Color::from_hex(0xA0A0A4);

/// Number of decimal digits needed for the highest line number.
pub fn digit_count(block_count: usize) -> usize {
    block_count.max(1).ilog10() as usize + 1
}

#[derive(Debug, Clone)]
pub struct LineNumberGutter {
    panel: GutterPanel,
    right_padding: f32,
    text_inset: f32,
    background: Color,
    foreground: Color,
}

impl LineNumberGutter {
    pub fn new(settings: &LineNumberSettings) -> Self {
        Self {
            panel: GutterPanel::default(),
            right_padding: settings.right_padding,
            text_inset: settings.text_inset,
            background: BACKGROUND.lighter(120),
            foreground: FOREGROUND.darker(130),
        }
    }

    pub fn panel(&self) -> &GutterPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut GutterPanel {
        &mut self.panel
    }

    /// Width needed to show every line number of the host's document.
    pub fn required_width<H: TextHost + ?Sized>(&self, host: &H) -> f32 {
        self.right_padding + host.digit_advance() * digit_count(host.block_count()) as f32
    }

    /// Paint the numbers overlapping `clip` (gutter-local coordinates).
    pub fn paint<H: TextHost + ?Sized>(&self, host: &H, clip: Rect, painter: &mut dyn Painter) {
        painter.fill_rect(clip, &Fill::Solid(self.background));

        let text_width = (self.panel.width() - self.text_inset).max(0.0);
        let text_height = host.text_line_height();
        let mut painted = 0usize;
        for line in lines_in_band(host, clip.top(), clip.bottom()) {
            let label = (line.index + 1).to_string();
            painter.draw_text(
                Rect::new(0.0, line.top, text_width, text_height),
                TextAlign::Right,
                self.foreground,
                &label,
            );
            painted += 1;
        }
        tracing::trace!(painted, clip_top = clip.top(), clip_bottom = clip.bottom(), "Painted line numbers");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InMemoryDocument;
    use crate::paint::{DisplayList, PaintCommand};
    use pretty_assertions::assert_eq;

    fn gutter_for(doc: &InMemoryDocument) -> LineNumberGutter {
        let mut gutter = LineNumberGutter::new(&LineNumberSettings::default());
        let width = gutter.required_width(doc);
        gutter
            .panel_mut()
            .set_geometry(Rect::new(25.0, 0.0, width, doc.viewport_rect().height));
        gutter
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn test_width_grows_one_glyph_at_power_of_ten() {
        let gutter = LineNumberGutter::new(&LineNumberSettings::default());
        let nine = InMemoryDocument::from_lines(9).with_digit_advance(8.0);
        let ten = InMemoryDocument::from_lines(10).with_digit_advance(8.0);
        assert_eq!(gutter.required_width(&nine), 14.0);
        assert_eq!(gutter.required_width(&ten), 22.0);
    }

    #[test]
    fn test_paints_visible_numbers_right_aligned() {
        let doc = InMemoryDocument::from_lines(3)
            .with_line_height(16.0)
            .with_viewport_height(160.0);
        let gutter = gutter_for(&doc);

        let mut list = DisplayList::new();
        gutter.paint(&doc, gutter.panel().local_rect(), &mut list);

        assert_eq!(list.texts(), vec!["1", "2", "3"]);
        let PaintCommand::Text { rect, align, .. } = &list.commands()[2] else {
            panic!("expected text command");
        };
        assert_eq!(*align, TextAlign::Right);
        assert_eq!(rect.top(), 16.0);
        assert_eq!(rect.width, gutter.panel().width() - 3.0);
    }

    #[test]
    fn test_paints_only_clipped_rows() {
        let mut doc = InMemoryDocument::from_lines(200)
            .with_line_height(10.0)
            .with_viewport_height(100.0);
        doc.scroll_to_block(41);
        let gutter = gutter_for(&doc);

        let mut list = DisplayList::new();
        gutter.paint(&doc, Rect::new(0.0, 20.0, gutter.panel().width(), 20.0), &mut list);

        assert_eq!(list.texts(), vec!["44", "45"]);
        assert!(matches!(
            list.commands()[0],
            PaintCommand::FillRect { fill: Fill::Solid(_), .. }
        ));
    }
}
