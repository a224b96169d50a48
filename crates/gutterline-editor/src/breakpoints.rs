//! Breakpoint bookkeeping.
//!
//! Pure data-structure logic with no host dependencies: the set of 0-based
//! line indices that carry a breakpoint, and the three ways a click or menu
//! action can change membership.

use std::collections::BTreeSet;

/// How a single-line breakpoint action treats the current membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToggleMode {
    /// Remove when present, insert otherwise.
    #[default]
    Toggle,
    /// Insert; no-op when already present.
    ForceSet,
    /// Remove; no-op when absent.
    ForceClear,
}

/// Lines with an active breakpoint, kept in ascending order.
///
/// Every member is expected to be `< total line count`; callers restore that
/// after the document shrinks by calling [`BreakpointSet::prune`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BreakpointSet {
    lines: BTreeSet<usize>,
}

impl BreakpointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `mode` to `line`. Returns whether membership changed.
    pub fn toggle(&mut self, line: usize, mode: ToggleMode) -> bool {
        match mode {
            ToggleMode::ForceSet => self.lines.insert(line),
            ToggleMode::ForceClear => self.lines.remove(&line),
            ToggleMode::Toggle => {
                if !self.lines.remove(&line) {
                    self.lines.insert(line);
                }
                true
            }
        }
    }

    /// Remove every breakpoint. Returns how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.lines.len();
        self.lines.clear();
        removed
    }

    /// Drop every line `>= total_lines`. Returns how many were removed.
    pub fn prune(&mut self, total_lines: usize) -> usize {
        let mut removed = 0;
        while self.lines.last().is_some_and(|&last| last >= total_lines) {
            self.lines.pop_last();
            removed += 1;
        }
        removed
    }

    pub fn contains(&self, line: usize) -> bool {
        self.lines.contains(&line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Breakpoint lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().copied()
    }
}

impl FromIterator<usize> for BreakpointSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BreakpointSet {
    type Item = usize;
    type IntoIter = std::iter::Copied<std::collections::btree_set::Iter<'a, usize>>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter().copied()
    }
}
