//! Drawing seam between the gutters and the host's rendering backend.
//!
//! The gutters only ever issue the handful of primitives in [`Painter`]. A host
//! adapts them onto its own canvas; [`DisplayList`] records them instead, which
//! is what the tests and the headless demo use.

use crate::geometry::{Color, LinearGradient, Rect};

/// How a rectangle is filled.
#[derive(Debug, Clone, PartialEq)]
pub enum Fill {
    Solid(Color),
    Gradient(LinearGradient),
}

/// Horizontal placement of text inside its layout rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Right,
}

/// Rendering primitives the gutters need from the host.
pub trait Painter {
    fn fill_rect(&mut self, rect: Rect, fill: &Fill);

    /// Draw a single line of text inside `rect` using `color` as the pen.
    fn draw_text(&mut self, rect: Rect, align: TextAlign, color: Color, text: &str);

    /// Draw the breakpoint marker scaled into `rect`.
    fn draw_breakpoint_glyph(&mut self, rect: Rect);
}

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    FillRect {
        rect: Rect,
        fill: Fill,
    },
    Text {
        rect: Rect,
        align: TextAlign,
        color: Color,
        text: String,
    },
    BreakpointGlyph {
        rect: Rect,
    },
}

/// A [`Painter`] that records every command in order.
#[derive(Debug, Default, Clone)]
pub struct DisplayList {
    commands: Vec<PaintCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<PaintCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Text strings in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles of every breakpoint glyph, in draw order.
    pub fn glyph_rects(&self) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::BreakpointGlyph { rect } => Some(*rect),
                _ => None,
            })
            .collect()
    }
}

impl Painter for DisplayList {
    fn fill_rect(&mut self, rect: Rect, fill: &Fill) {
        self.commands.push(PaintCommand::FillRect {
            rect,
            fill: fill.clone(),
        });
    }

    fn draw_text(&mut self, rect: Rect, align: TextAlign, color: Color, text: &str) {
        self.commands.push(PaintCommand::Text {
            rect,
            align,
            color,
            text: text.to_string(),
        });
    }

    fn draw_breakpoint_glyph(&mut self, rect: Rect) {
        self.commands.push(PaintCommand::BreakpointGlyph { rect });
    }
}
