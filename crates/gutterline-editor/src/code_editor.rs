//! The editor controller: places both gutters beside the host's text area,
//! routes host notifications to them, and owns the breakpoint and font state.

use std::time::Instant;

use gutterline_settings::GutterSettings;

use crate::breakpoint_gutter::{BreakpointGutter, ContextMenu, CursorStyle, GutterAction};
use crate::breakpoints::{BreakpointSet, ToggleMode};
use crate::geometry::{Color, Point, Rect};
use crate::hit_test::block_at;
use crate::host::{LineHighlight, TextHost};
use crate::input::{MouseButton, WheelEvent};
use crate::line_numbers::LineNumberGutter;
use crate::paint::Painter;
use crate::zoom::{FontSpec, FontZoom, ZoomOutcome};

/// Accent gold used for the current-line highlight.
pub const MEDALIST: Color = Color::from_hex(0xC4820E);

/// Mutable per-editor state, touched only from the UI thread.
#[derive(Debug, Clone)]
pub struct EditorState {
    pub breakpoints: BreakpointSet,
    pub zoom: FontZoom,
}

/// Line-numbered, breakpoint-settable sidebar for a host text widget.
///
/// Every handler takes the host explicitly; the editor keeps no reference to
/// it between calls.
#[derive(Debug, Clone)]
pub struct CodeEditor {
    state: EditorState,
    line_numbers: LineNumberGutter,
    breakpoint_gutter: BreakpointGutter,
    sidebar_width: f32,
    highlight_current_line: bool,
    current_line_color: Color,
}

impl CodeEditor {
    /// Attach to `host`: apply the configured font, reserve the sidebar and
    /// lay out both gutters.
    pub fn new<H: TextHost + ?Sized>(settings: &GutterSettings, host: &mut H) -> Self {
        let mut editor = Self {
            state: EditorState {
                breakpoints: BreakpointSet::new(),
                zoom: FontZoom::from_settings(settings),
            },
            line_numbers: LineNumberGutter::new(&settings.line_numbers),
            breakpoint_gutter: BreakpointGutter::new(&settings.breakpoint_gutter),
            sidebar_width: 0.0,
            highlight_current_line: settings.highlight_current_line,
            current_line_color: MEDALIST.lighter(160),
        };
        host.set_font(editor.state.zoom.font());
        editor.update_sidebar_width(host);
        if editor.highlight_current_line {
            editor.highlight_current_line(host);
        }
        editor
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn breakpoints(&self) -> &BreakpointSet {
        &self.state.breakpoints
    }

    pub fn font(&self) -> &FontSpec {
        self.state.zoom.font()
    }

    /// Line number width plus breakpoint strip width.
    pub fn sidebar_width(&self) -> f32 {
        self.sidebar_width
    }

    pub fn line_number_gutter(&self) -> &LineNumberGutter {
        &self.line_numbers
    }

    pub fn line_number_gutter_mut(&mut self) -> &mut LineNumberGutter {
        &mut self.line_numbers
    }

    pub fn breakpoint_gutter(&self) -> &BreakpointGutter {
        &self.breakpoint_gutter
    }

    pub fn breakpoint_gutter_mut(&mut self) -> &mut BreakpointGutter {
        &mut self.breakpoint_gutter
    }

    /// Recompute the sidebar width from the document's digit count and
    /// reserve it as the host's left margin.
    pub fn update_sidebar_width<H: TextHost + ?Sized>(&mut self, host: &mut H) {
        let width = self.line_numbers.required_width(host) + self.breakpoint_gutter.width();
        if width != self.sidebar_width {
            tracing::debug!(old = self.sidebar_width, new = width, "Sidebar width changed");
            self.sidebar_width = width;
        }
        host.set_left_margin(width);
        // A margin change resizes the viewport, which moves the gutters.
        self.layout_gutters(host);
    }

    pub fn on_block_count_changed<H: TextHost + ?Sized>(&mut self, host: &mut H) {
        self.update_sidebar_width(host);
    }

    /// The host repainted or scrolled `rect` of its viewport. A non-zero `dy`
    /// means the content moved vertically by that many pixels.
    pub fn on_update_request<H: TextHost + ?Sized>(&mut self, host: &mut H, rect: Rect, dy: f32) {
        if dy != 0.0 {
            self.line_numbers.panel_mut().scroll(dy);
            self.breakpoint_gutter.panel_mut().scroll(dy);
        } else {
            self.line_numbers.panel_mut().update_rows(rect.y, rect.height);
            self.breakpoint_gutter.panel_mut().update_rows(rect.y, rect.height);
        }
        tracing::trace!(?rect, dy, "Routed update request to gutters");

        if rect.contains_rect(&host.viewport_rect()) {
            self.update_sidebar_width(host);
        }

        let pruned = self.state.breakpoints.prune(host.block_count());
        if pruned > 0 {
            tracing::debug!(pruned, block_count = host.block_count(), "Pruned breakpoints past document end");
            self.breakpoint_gutter.panel_mut().repaint();
        }
    }

    pub fn on_resize<H: TextHost + ?Sized>(&mut self, host: &mut H) {
        self.layout_gutters(host);
    }

    fn layout_gutters<H: TextHost + ?Sized>(&mut self, host: &H) {
        let contents = host.contents_rect();
        let breakpoint_width = self.breakpoint_gutter.width();
        self.breakpoint_gutter.panel_mut().set_geometry(Rect::new(
            contents.left(),
            contents.top(),
            breakpoint_width,
            contents.height,
        ));
        let line_number_width = self.line_numbers.required_width(host);
        self.line_numbers.panel_mut().set_geometry(Rect::new(
            contents.left() + breakpoint_width,
            contents.top(),
            line_number_width,
            contents.height,
        ));
    }

    /// Handle a wheel notification over the text area at time `now`.
    ///
    /// Returns `None` when the event is an ordinary scroll the host should
    /// process. A zoom gesture is always consumed, even when debounced or
    /// already at a size bound.
    pub fn on_wheel<H: TextHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &WheelEvent,
        now: Instant,
    ) -> Option<ZoomOutcome> {
        if !event.modifiers.is_zoom() {
            return None;
        }
        let outcome = self.state.zoom.zoom(event.delta_y, now);
        if outcome.changed() {
            host.set_font(self.state.zoom.font());
            self.update_sidebar_width(host);
        }
        Some(outcome)
    }

    /// Mouse press inside the breakpoint gutter at gutter-local `position`.
    /// Returns the toggled block, if any.
    pub fn on_breakpoint_mouse_press<H: TextHost + ?Sized>(
        &mut self,
        host: &H,
        position: Point,
        button: MouseButton,
    ) -> Option<usize> {
        match button {
            MouseButton::Left => self.breakpoint_click(host, position, ToggleMode::Toggle),
            MouseButton::Right | MouseButton::Middle => None,
        }
    }

    /// Right-click inside the breakpoint gutter. The returned menu's actions
    /// are delivered back through [`CodeEditor::trigger_gutter_action`].
    pub fn on_breakpoint_context_menu(&mut self, position: Point) -> ContextMenu {
        self.breakpoint_gutter.open_context_menu(position)
    }

    /// Run a context menu action. Returns whether the breakpoint set changed.
    pub fn trigger_gutter_action<H: TextHost + ?Sized>(
        &mut self,
        host: &H,
        action: GutterAction,
    ) -> bool {
        match action.toggle_mode() {
            Some(mode) => {
                let Some(position) = self.breakpoint_gutter.take_pending_click() else {
                    tracing::debug!(?action, "Gutter action without a pending click");
                    return false;
                };
                let before = self.state.breakpoints.len();
                let toggled = self.breakpoint_click(host, position, mode);
                toggled.is_some() && before != self.state.breakpoints.len()
            }
            None => self.clear_breakpoints() > 0,
        }
    }

    /// Resolve `position` to a block and apply `mode` to it. Clicks past the
    /// end of the document do nothing.
    pub fn breakpoint_click<H: TextHost + ?Sized>(
        &mut self,
        host: &H,
        position: Point,
        mode: ToggleMode,
    ) -> Option<usize> {
        let block = block_at(host, position.y)?;
        let changed = self.state.breakpoints.toggle(block, mode);
        tracing::debug!(block, ?mode, changed, "Breakpoint click");
        self.breakpoint_gutter.panel_mut().repaint();
        Some(block)
    }

    /// Remove every breakpoint. Returns how many were removed.
    pub fn clear_breakpoints(&mut self) -> usize {
        let removed = self.state.breakpoints.clear_all();
        tracing::debug!(removed, "Cleared all breakpoints");
        self.breakpoint_gutter.panel_mut().repaint();
        removed
    }

    pub fn paint_line_numbers<H: TextHost + ?Sized>(
        &self,
        host: &H,
        clip: Rect,
        painter: &mut dyn Painter,
    ) {
        self.line_numbers.paint(host, clip, painter);
    }

    pub fn paint_breakpoint_gutter<H: TextHost + ?Sized>(
        &self,
        host: &H,
        clip: Rect,
        painter: &mut dyn Painter,
    ) {
        self.breakpoint_gutter
            .paint(host, &self.state.breakpoints, clip, painter);
    }

    /// Pointer shape for a position in the editor's widget space.
    pub fn cursor_style_at(&self, position: Point) -> CursorStyle {
        if self.breakpoint_gutter.panel().geometry().contains_point(position) {
            self.breakpoint_gutter.cursor_style()
        } else {
            CursorStyle::Arrow
        }
    }

    pub fn highlights_current_line(&self) -> bool {
        self.highlight_current_line
    }

    pub fn set_highlight_current_line<H: TextHost + ?Sized>(&mut self, host: &mut H, enabled: bool) {
        self.highlight_current_line = enabled;
        if enabled {
            self.highlight_current_line(host);
        } else {
            host.set_line_highlights(Vec::new());
        }
    }

    pub fn on_cursor_position_changed<H: TextHost + ?Sized>(&mut self, host: &mut H) {
        if self.highlight_current_line {
            self.highlight_current_line(host);
        }
    }

    /// Give the caret's block a full-width background. Read-only editors get
    /// no highlight.
    pub fn highlight_current_line<H: TextHost + ?Sized>(&self, host: &mut H) {
        let mut highlights = Vec::new();
        if !host.is_read_only() {
            highlights.push(LineHighlight {
                block: host.caret_block(),
                background: self.current_line_color,
                full_width: true,
            });
        }
        host.set_line_highlights(highlights);
    }
}
