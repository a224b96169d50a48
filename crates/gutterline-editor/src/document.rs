//! An in-memory [`TextHost`] used for headless rendering and tests.
//!
//! Models a plain-text widget with one row per block, whole-block scrolling,
//! a top document margin on the first block, and monospace font metrics that
//! scale linearly with the point size.

use std::collections::BTreeSet;
use std::ops::Range;

use crate::geometry::{Point, Rect};
use crate::host::{LineHighlight, TextHost};
use crate::zoom::FontSpec;

const DEFAULT_POINT_SIZE: u32 = 10;

#[derive(Debug, Clone)]
pub struct InMemoryDocument {
    lines: Vec<String>,
    hidden: BTreeSet<usize>,
    first_visible: usize,
    caret: usize,
    read_only: bool,
    document_margin: f32,
    width: f32,
    height: f32,
    left_margin: f32,
    font: FontSpec,
    /// Metrics measured at `base_point_size`.
    base_point_size: u32,
    base_line_height: f32,
    base_digit_advance: f32,
    highlights: Vec<LineHighlight>,
}

impl Default for InMemoryDocument {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl InMemoryDocument {
    /// A document with one block per `\n`-separated line. Empty text is one
    /// empty block.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_string).collect(),
            hidden: BTreeSet::new(),
            first_visible: 0,
            caret: 0,
            read_only: false,
            document_margin: 0.0,
            width: 640.0,
            height: 480.0,
            left_margin: 0.0,
            font: FontSpec::new("Monospace", DEFAULT_POINT_SIZE),
            base_point_size: DEFAULT_POINT_SIZE,
            base_line_height: 16.0,
            base_digit_advance: 8.0,
            highlights: Vec::new(),
        }
    }

    /// A document of `count` numbered placeholder lines.
    pub fn from_lines(count: usize) -> Self {
        let mut doc = Self::from_text("");
        doc.lines = (0..count).map(|i| format!("line {}", i + 1)).collect();
        doc
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.base_point_size = self.font.point_size;
        self.base_line_height = line_height;
        self
    }

    pub fn with_digit_advance(mut self, advance: f32) -> Self {
        self.base_point_size = self.font.point_size;
        self.base_digit_advance = advance;
        self
    }

    pub fn with_document_margin(mut self, margin: f32) -> Self {
        self.document_margin = margin;
        self
    }

    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn line(&self, block: usize) -> Option<&str> {
        self.lines.get(block).map(String::as_str)
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.hidden.clear();
        self.clamp_positions();
    }

    /// Insert `lines` before block `at` (clamped to the end).
    pub fn insert_lines<I, S>(&mut self, at: usize, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let at = at.min(self.lines.len());
        let inserted: Vec<String> = lines.into_iter().map(Into::into).collect();
        let count = inserted.len();
        self.lines.splice(at..at, inserted);
        self.hidden = self
            .hidden
            .iter()
            .map(|&b| if b >= at { b + count } else { b })
            .collect();
    }

    /// Remove the blocks in `range`. At least one (empty) block always remains.
    pub fn remove_lines(&mut self, range: Range<usize>) {
        let start = range.start.min(self.lines.len());
        let end = range.end.min(self.lines.len());
        if start >= end {
            return;
        }
        self.lines.drain(start..end);
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        let removed = end - start;
        self.hidden = self
            .hidden
            .iter()
            .filter(|&&b| b < start || b >= end)
            .map(|&b| if b >= end { b - removed } else { b })
            .collect();
        self.clamp_positions();
    }

    pub fn set_block_hidden(&mut self, block: usize, hidden: bool) {
        if hidden {
            self.hidden.insert(block);
        } else {
            self.hidden.remove(&block);
        }
    }

    /// Scroll so that `block` is the first visible one.
    pub fn scroll_to_block(&mut self, block: usize) {
        self.first_visible = block.min(self.lines.len().saturating_sub(1));
    }

    pub fn set_caret_block(&mut self, block: usize) {
        self.caret = block.min(self.lines.len().saturating_sub(1));
    }

    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Width reserved left of the text by the last `set_left_margin` call.
    pub fn left_margin(&self) -> f32 {
        self.left_margin
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn line_highlights(&self) -> &[LineHighlight] {
        &self.highlights
    }

    /// Number of whole blocks that fit in the viewport.
    pub fn visible_block_capacity(&self) -> usize {
        let line_height = self.line_height();
        if line_height <= 0.0 {
            return 0;
        }
        (self.height / line_height).floor() as usize
    }

    fn line_height(&self) -> f32 {
        self.scaled(self.base_line_height)
    }

    fn scaled(&self, base: f32) -> f32 {
        if self.font.point_size == self.base_point_size {
            base
        } else {
            base * self.font.point_size as f32 / self.base_point_size as f32
        }
    }

    fn clamp_positions(&mut self) {
        let last = self.lines.len().saturating_sub(1);
        self.first_visible = self.first_visible.min(last);
        self.caret = self.caret.min(last);
    }
}

impl TextHost for InMemoryDocument {
    fn block_count(&self) -> usize {
        self.lines.len()
    }

    fn first_visible_block(&self) -> usize {
        self.first_visible
    }

    fn block_top(&self, block: usize) -> f32 {
        let first = self.first_visible;
        if block >= first {
            (first..block).map(|b| self.block_height(b)).sum()
        } else {
            -(block..first).map(|b| self.block_height(b)).sum::<f32>()
        }
    }

    fn block_height(&self, block: usize) -> f32 {
        if block >= self.lines.len() || self.hidden.contains(&block) {
            0.0
        } else {
            self.line_height()
        }
    }

    fn content_offset(&self) -> Point {
        let y = if self.first_visible == 0 {
            self.document_margin
        } else {
            0.0
        };
        Point::new(0.0, y)
    }

    fn is_block_visible(&self, block: usize) -> bool {
        !self.hidden.contains(&block)
    }

    fn viewport_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, (self.width - self.left_margin).max(0.0), self.height)
    }

    fn contents_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn caret_block(&self) -> usize {
        self.caret
    }

    fn digit_advance(&self) -> f32 {
        self.scaled(self.base_digit_advance)
    }

    fn text_line_height(&self) -> f32 {
        self.line_height()
    }

    fn set_left_margin(&mut self, width: f32) {
        self.left_margin = width;
    }

    fn set_font(&mut self, font: &FontSpec) {
        self.font = font.clone();
    }

    fn set_line_highlights(&mut self, highlights: Vec<LineHighlight>) {
        self.highlights = highlights;
    }
}
