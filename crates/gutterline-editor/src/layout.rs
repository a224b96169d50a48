//! Visible-line iteration shared by both gutter paint passes.

use crate::host::TextHost;

/// One block's vertical extent in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleLine {
    pub index: usize,
    pub top: f32,
    pub bottom: f32,
    /// False for blocks the host has hidden (for example folded ones).
    pub visible: bool,
}

impl VisibleLine {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Walks blocks downward from the first visible one, accumulating each
/// block's top and bottom from its rendered height. Ends at the last block.
pub struct VisibleLines<'a, H: TextHost + ?Sized> {
    host: &'a H,
    next: usize,
    top: f32,
    block_count: usize,
}

impl<'a, H: TextHost + ?Sized> VisibleLines<'a, H> {
    pub fn new(host: &'a H) -> Self {
        let first = host.first_visible_block();
        let top = host.block_top(first) + host.content_offset().y;
        Self {
            host,
            next: first,
            top,
            block_count: host.block_count(),
        }
    }
}

impl<H: TextHost + ?Sized> Iterator for VisibleLines<'_, H> {
    type Item = VisibleLine;

    fn next(&mut self) -> Option<VisibleLine> {
        if self.next >= self.block_count {
            return None;
        }
        let index = self.next;
        let top = self.top;
        let bottom = top + self.host.block_height(index);
        self.next += 1;
        self.top = bottom;
        Some(VisibleLine {
            index,
            top,
            bottom,
            visible: self.host.is_block_visible(index),
        })
    }
}

/// Visible lines overlapping the row band `[clip_top, clip_bottom)`.
///
/// Iteration stops at the first line starting at or below `clip_bottom`.
pub fn lines_in_band<H: TextHost + ?Sized>(
    host: &H,
    clip_top: f32,
    clip_bottom: f32,
) -> impl Iterator<Item = VisibleLine> + '_ {
    VisibleLines::new(host)
        .take_while(move |line| line.top < clip_bottom)
        .filter(move |line| line.visible && line.bottom > clip_top)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::InMemoryDocument;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_walks_from_first_visible_block() {
        let mut doc = InMemoryDocument::from_lines(10).with_line_height(16.0);
        doc.scroll_to_block(3);

        let lines: Vec<VisibleLine> = VisibleLines::new(&doc).take(2).collect();
        assert_eq!(lines[0].index, 3);
        assert_eq!(lines[0].top, 0.0);
        assert_eq!(lines[0].bottom, 16.0);
        assert_eq!(lines[1].index, 4);
        assert_eq!(lines[1].top, 16.0);
    }

    #[test]
    fn test_first_block_includes_document_margin() {
        let doc = InMemoryDocument::from_lines(3)
            .with_line_height(10.0)
            .with_document_margin(4.0);

        let tops: Vec<f32> = VisibleLines::new(&doc).map(|line| line.top).collect();
        assert_eq!(tops, vec![4.0, 14.0, 24.0]);
    }

    #[test]
    fn test_band_filters_and_stops() {
        let doc = InMemoryDocument::from_lines(100).with_line_height(10.0);

        let indices: Vec<usize> = lines_in_band(&doc, 25.0, 45.0).map(|l| l.index).collect();
        assert_eq!(indices, vec![2, 3, 4]);
    }

    #[test]
    fn test_band_skips_hidden_blocks() {
        let mut doc = InMemoryDocument::from_lines(5).with_line_height(10.0);
        doc.set_block_hidden(1, true);

        let indices: Vec<usize> = lines_in_band(&doc, 0.0, 50.0).map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 2, 3, 4]);
    }
}
