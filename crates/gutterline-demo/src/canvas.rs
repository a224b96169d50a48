//! A character-cell [`Painter`] that turns gutter paint commands into rows of
//! plain text.

use gutterline_editor::{
    Color, Fill, InMemoryDocument, Painter, Rect, TextAlign, TextHost, lines_in_band,
};

const GLYPH: &str = "●";

#[derive(Debug, Default, Clone, PartialEq)]
struct Row {
    glyph: bool,
    number: String,
}

/// Collects what the gutters paint, one entry per text row.
#[derive(Debug)]
pub struct TextCanvas {
    row_height: f32,
    rows: Vec<Row>,
    backgrounds: Vec<Color>,
}

impl TextCanvas {
    pub fn new(row_height: f32, row_count: usize) -> Self {
        Self {
            row_height,
            rows: vec![Row::default(); row_count],
            backgrounds: Vec::new(),
        }
    }

    fn row_mut(&mut self, top: f32) -> Option<&mut Row> {
        if self.row_height <= 0.0 || top < 0.0 {
            return None;
        }
        let index = (top / self.row_height).round() as usize;
        self.rows.get_mut(index)
    }

    /// Every colour a gutter filled with, in paint order.
    pub fn backgrounds(&self) -> &[Color] {
        &self.backgrounds
    }

    /// Compose the gutter rows with the document text visible beside them.
    pub fn render(&self, doc: &InMemoryDocument) -> String {
        let number_width = self
            .rows
            .iter()
            .map(|row| row.number.chars().count())
            .max()
            .unwrap_or(1);
        let viewport = doc.viewport_rect();

        let mut out = String::new();
        for line in lines_in_band(doc, viewport.top(), viewport.bottom()) {
            let Some(row) = self.rows.get((line.top / self.row_height).round() as usize) else {
                continue;
            };
            let glyph = if row.glyph { GLYPH } else { " " };
            let text = doc.line(line.index).unwrap_or_default();
            out.push_str(&format!(
                "{glyph} {:>number_width$} | {text}\n",
                row.number
            ));
        }
        out
    }
}

impl Painter for TextCanvas {
    fn fill_rect(&mut self, _rect: Rect, fill: &Fill) {
        let color = match fill {
            Fill::Solid(color) => *color,
            Fill::Gradient(gradient) => match gradient.stops.first() {
                Some((_, color)) => *color,
                None => return,
            },
        };
        self.backgrounds.push(color);
    }

    fn draw_text(&mut self, rect: Rect, _align: TextAlign, _color: Color, text: &str) {
        if let Some(row) = self.row_mut(rect.top()) {
            row.number = text.to_string();
        }
    }

    fn draw_breakpoint_glyph(&mut self, rect: Rect) {
        if let Some(row) = self.row_mut(rect.top()) {
            row.glyph = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gutterline_editor::{CodeEditor, Point, ToggleMode};
    use gutterline_settings::GutterSettings;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_renders_numbers_glyphs_and_text() {
        let mut doc = InMemoryDocument::from_text(indoc! {"
            addi a0, zero, 1
            addi a1, zero, 2
            add a2, a0, a1"})
        .with_line_height(16.0)
        .with_size(400.0, 64.0);
        let mut editor = CodeEditor::new(&GutterSettings::default(), &mut doc);
        editor.breakpoint_click(&doc, Point::new(4.0, 20.0), ToggleMode::Toggle);

        let mut canvas = TextCanvas::new(doc.text_line_height(), doc.visible_block_capacity());
        let clip = editor.breakpoint_gutter().panel().local_rect();
        editor.paint_breakpoint_gutter(&doc, clip, &mut canvas);
        let clip = editor.line_number_gutter().panel().local_rect();
        editor.paint_line_numbers(&doc, clip, &mut canvas);

        assert_eq!(
            canvas.render(&doc),
            "  1 | addi a0, zero, 1\n● 2 | addi a1, zero, 2\n  3 | add a2, a0, a1\n"
        );
        assert_eq!(canvas.backgrounds().len(), 2);
    }
}
