//! Breakpoint gutter: a fixed-width strip left of the line numbers that shows
//! a glyph on every line with a breakpoint and offers a right-click menu.
//!
//! The background gradient spans the whole strip, so every paint request
//! repaints all of it, including the one-row requests sent on caret blink.

use gutterline_settings::BreakpointGutterSettings;

use crate::breakpoints::{BreakpointSet, ToggleMode};
use crate::geometry::{Color, LinearGradient, Point, Rect};
use crate::gutter::GutterPanel;
use crate::host::TextHost;
use crate::layout::lines_in_band;
use crate::paint::{Fill, Painter};

/// Accent blue of the gutter background.
pub const FOUNDERS_ROCK: Color = Color::from_hex(0x3B7EA1);

/// Pointer shape the host should show while hovering a gutter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Arrow,
    PointingHand,
}

/// Entries of the breakpoint gutter's context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GutterAction {
    AddBreakpoint,
    RemoveBreakpoint,
    RemoveAllBreakpoints,
}

impl GutterAction {
    pub const ALL: [GutterAction; 3] = [
        GutterAction::AddBreakpoint,
        GutterAction::RemoveBreakpoint,
        GutterAction::RemoveAllBreakpoints,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GutterAction::AddBreakpoint => "Add breakpoint",
            GutterAction::RemoveBreakpoint => "Remove breakpoint",
            GutterAction::RemoveAllBreakpoints => "Remove all breakpoints",
        }
    }

    /// Toggle mode for the single-line actions.
    pub fn toggle_mode(&self) -> Option<ToggleMode> {
        match self {
            GutterAction::AddBreakpoint => Some(ToggleMode::ForceSet),
            GutterAction::RemoveBreakpoint => Some(ToggleMode::ForceClear),
            GutterAction::RemoveAllBreakpoints => None,
        }
    }
}

/// A context menu ready to be shown by the host at `position`.
#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenu {
    /// Where the menu was requested, in gutter-local coordinates.
    pub position: Point,
    pub items: Vec<GutterAction>,
}

#[derive(Debug, Clone)]
pub struct BreakpointGutter {
    panel: GutterPanel,
    width: f32,
    padding: f32,
    glyph_width: f32,
    glyph_height: f32,
    gradient_start: Color,
    gradient_end: Color,
    /// Position of the last right-click, consumed by the single-line menu actions.
    pending_click: Option<Point>,
}

impl BreakpointGutter {
    pub fn new(settings: &BreakpointGutterSettings) -> Self {
        Self {
            panel: GutterPanel::default(),
            width: settings.width,
            padding: settings.padding,
            glyph_width: settings.glyph_width,
            glyph_height: settings.glyph_height,
            gradient_start: FOUNDERS_ROCK.lighter(120),
            gradient_end: FOUNDERS_ROCK,
            pending_click: None,
        }
    }

    pub fn panel(&self) -> &GutterPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut GutterPanel {
        &mut self.panel
    }

    /// Fixed width, independent of the document.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn cursor_style(&self) -> CursorStyle {
        CursorStyle::PointingHand
    }

    pub fn pending_click(&self) -> Option<Point> {
        self.pending_click
    }

    /// Record a right-click and build the menu to show for it.
    pub fn open_context_menu(&mut self, position: Point) -> ContextMenu {
        self.pending_click = Some(position);
        ContextMenu {
            position,
            items: GutterAction::ALL.to_vec(),
        }
    }

    /// Take the right-click position a menu action applies to.
    pub fn take_pending_click(&mut self) -> Option<Point> {
        self.pending_click.take()
    }

    fn background(&self) -> Fill {
        let area = self.panel.local_rect();
        Fill::Gradient(
            LinearGradient::new(area.top_left(), area.bottom_right())
                .with_stop(0.0, self.gradient_start)
                .with_stop(1.0, self.gradient_end),
        )
    }

    /// Paint the strip. The whole strip is repainted whatever `clip` is;
    /// `clip` only limits which rows are checked for glyphs.
    pub fn paint<H: TextHost + ?Sized>(
        &self,
        host: &H,
        breakpoints: &BreakpointSet,
        clip: Rect,
        painter: &mut dyn Painter,
    ) {
        let area = self.panel.local_rect();
        painter.fill_rect(area, &self.background());

        if breakpoints.is_empty() {
            return;
        }
        for line in lines_in_band(host, clip.top(), clip.bottom()) {
            if breakpoints.contains(line.index) {
                painter.draw_breakpoint_glyph(Rect::new(
                    self.padding,
                    line.top,
                    self.glyph_width,
                    self.glyph_height,
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InMemoryDocument;
    use crate::paint::{DisplayList, PaintCommand};
    use pretty_assertions::assert_eq;

    fn gutter(height: f32) -> BreakpointGutter {
        let mut gutter = BreakpointGutter::new(&BreakpointGutterSettings::default());
        let width = gutter.width();
        gutter
            .panel_mut()
            .set_geometry(Rect::new(0.0, 0.0, width, height));
        gutter
    }

    #[test]
    fn test_menu_lists_actions_in_order() {
        let mut gutter = gutter(100.0);
        let menu = gutter.open_context_menu(Point::new(3.0, 40.0));
        let labels: Vec<&str> = menu.items.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec!["Add breakpoint", "Remove breakpoint", "Remove all breakpoints"]
        );
        assert_eq!(gutter.pending_click(), Some(Point::new(3.0, 40.0)));
    }

    #[test]
    fn test_pending_click_is_replaced_and_consumed() {
        let mut gutter = gutter(100.0);
        gutter.open_context_menu(Point::new(3.0, 40.0));
        gutter.open_context_menu(Point::new(3.0, 70.0));
        assert_eq!(gutter.take_pending_click(), Some(Point::new(3.0, 70.0)));
        assert_eq!(gutter.take_pending_click(), None);
    }

    #[test]
    fn test_action_modes() {
        assert_eq!(GutterAction::AddBreakpoint.toggle_mode(), Some(ToggleMode::ForceSet));
        assert_eq!(GutterAction::RemoveBreakpoint.toggle_mode(), Some(ToggleMode::ForceClear));
        assert_eq!(GutterAction::RemoveAllBreakpoints.toggle_mode(), None);
    }

    #[test]
    fn test_background_always_covers_whole_strip() {
        let doc = InMemoryDocument::from_lines(20)
            .with_line_height(16.0)
            .with_viewport_height(320.0);
        let gutter = gutter(320.0);

        let mut list = DisplayList::new();
        // A caret-blink sized request still repaints the full strip.
        gutter.paint(&doc, &BreakpointSet::new(), Rect::new(0.0, 48.0, 25.0, 16.0), &mut list);

        let [PaintCommand::FillRect { rect, fill: Fill::Gradient(gradient) }] = list.commands()
        else {
            panic!("expected a single gradient fill, got {:?}", list.commands());
        };
        assert_eq!(*rect, Rect::new(0.0, 0.0, 25.0, 320.0));
        assert_eq!(gradient.start, Point::new(0.0, 0.0));
        assert_eq!(gradient.end, Point::new(25.0, 320.0));
        assert_eq!(gradient.stops.len(), 2);
        assert_eq!(gradient.stops[1].1, FOUNDERS_ROCK);
    }

    #[test]
    fn test_glyphs_for_breakpoint_lines_in_clip() {
        let doc = InMemoryDocument::from_lines(20)
            .with_line_height(16.0)
            .with_viewport_height(320.0);
        let gutter = gutter(320.0);
        let breakpoints: BreakpointSet = [1, 3, 19].into_iter().collect();

        let mut list = DisplayList::new();
        gutter.paint(&doc, &breakpoints, gutter.panel().local_rect(), &mut list);
        assert_eq!(
            list.glyph_rects(),
            vec![
                Rect::new(4.0, 16.0, 16.0, 16.0),
                Rect::new(4.0, 48.0, 16.0, 16.0),
                Rect::new(4.0, 304.0, 16.0, 16.0),
            ]
        );

        list.clear();
        gutter.paint(&doc, &breakpoints, Rect::new(0.0, 40.0, 25.0, 16.0), &mut list);
        assert_eq!(list.glyph_rects(), vec![Rect::new(4.0, 48.0, 16.0, 16.0)]);
    }

    #[test]
    fn test_pointer_cursor() {
        assert_eq!(gutter(10.0).cursor_style(), CursorStyle::PointingHand);
    }
}
