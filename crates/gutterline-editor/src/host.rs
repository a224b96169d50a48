//! The text-editing widget the gutters are attached to.
//!
//! The host owns the document, its layout and the viewport. The gutters only
//! read block geometry from it and push back the few things the controller is
//! responsible for: the left margin that makes room for the sidebar, the
//! display font, and the current-line highlight.

use crate::geometry::{Color, Point, Rect};
use crate::zoom::FontSpec;

/// A full-width background decoration on one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineHighlight {
    pub block: usize,
    pub background: Color,
    pub full_width: bool,
}

/// Queries and mutations the gutters need from the host text widget.
///
/// Block indices are 0-based. Geometry is in the host's viewport space except
/// for [`TextHost::block_top`], which is in document space and becomes
/// viewport space once [`TextHost::content_offset`] is added.
pub trait TextHost {
    /// Total number of blocks (logical lines) in the document.
    fn block_count(&self) -> usize;

    /// Index of the topmost block intersecting the viewport.
    fn first_visible_block(&self) -> usize;

    /// Top edge of `block` in document coordinates.
    fn block_top(&self, block: usize) -> f32;

    /// Rendered height of `block`, including wrapped rows.
    fn block_height(&self, block: usize) -> f32;

    /// Offset that maps document coordinates into the viewport.
    fn content_offset(&self) -> Point;

    /// Folded or otherwise hidden blocks are skipped by the gutters.
    fn is_block_visible(&self, _block: usize) -> bool {
        true
    }

    /// The scrollable area the text is rendered into.
    fn viewport_rect(&self) -> Rect;

    /// The widget's contents rect; gutters are laid out against its left edge.
    fn contents_rect(&self) -> Rect;

    fn is_read_only(&self) -> bool;

    /// Block containing the caret.
    fn caret_block(&self) -> usize;

    /// Advance of the widest decimal digit in the current font.
    fn digit_advance(&self) -> f32;

    /// Height of one text row in the current font.
    fn text_line_height(&self) -> f32;

    /// Reserve `width` pixels to the left of the text area.
    fn set_left_margin(&mut self, width: f32);

    fn set_font(&mut self, font: &FontSpec);

    fn set_line_highlights(&mut self, highlights: Vec<LineHighlight>);
}
