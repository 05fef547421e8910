//! Windowing engine for long lists.
//!
//! [`VirtualWindow`] tracks which contiguous slice of a list is on screen.
//! Only that slice needs to be rendered; moving the focus scrolls the window
//! just enough to keep the focused row visible, the same minimal-scroll rule
//! the viewport component uses for its cursor.
//!
//! Scroll changes are reported back to the caller as the new start index, so
//! an owner can remember the position across open/close cycles.
//!
//! ```rust
//! use bubbletea_dropdown::window::VirtualWindow;
//!
//! let mut window = VirtualWindow::new(100, 5, 0);
//! assert_eq!(window.visible_range(), 0..5);
//!
//! // Row 7 is below the window: scroll so it is the last visible row.
//! assert_eq!(window.scroll_to_index(7), Some(3));
//! assert_eq!(window.visible_range(), 3..8);
//!
//! // Already visible: nothing moves.
//! assert_eq!(window.scroll_to_index(4), None);
//! ```

use std::ops::Range;

/// The visible slice of a list of `len` rows, `height` rows tall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VirtualWindow {
    len: usize,
    height: usize,
    start: usize,
}

impl VirtualWindow {
    /// Creates a window over `len` rows showing `height` rows, with
    /// `initial_top` as the first visible row (clamped to the scrollable
    /// range).
    pub fn new(len: usize, height: usize, initial_top: usize) -> Self {
        let mut window = Self {
            len,
            height: height.max(1),
            start: 0,
        };
        window.start = window.clamp_start(initial_top);
        window
    }

    /// Number of rows in the underlying list.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the underlying list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of rows the window can show at once.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Index of the first visible row.
    pub fn start(&self) -> usize {
        self.start
    }

    /// The half-open range of visible row indices.
    pub fn visible_range(&self) -> Range<usize> {
        self.start..(self.start + self.height).min(self.len)
    }

    /// Whether `index` is currently rendered.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible_range().contains(&index)
    }

    /// Scrolls the minimum amount needed to make `index` visible.
    ///
    /// Returns the new start index when the window moved, `None` when
    /// `index` was already visible or is out of bounds.
    pub fn scroll_to_index(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let new_start = if index < self.start {
            index
        } else if index >= self.start + self.height {
            index + 1 - self.height
        } else {
            return None;
        };
        self.set_start(new_start)
    }

    /// Updates the row count, clamping the start so the window stays
    /// filled. Returns the new start when it changed.
    pub fn set_len(&mut self, len: usize) -> Option<usize> {
        self.len = len;
        self.set_start(self.start)
    }

    fn set_start(&mut self, start: usize) -> Option<usize> {
        let clamped = self.clamp_start(start);
        if clamped == self.start {
            return None;
        }
        self.start = clamped;
        Some(clamped)
    }

    fn clamp_start(&self, start: usize) -> usize {
        start.min(self.len.saturating_sub(self.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_top_is_clamped() {
        let w = VirtualWindow::new(10, 4, 9);
        assert_eq!(w.start(), 6);
        assert_eq!(w.visible_range(), 6..10);

        let short = VirtualWindow::new(3, 4, 2);
        assert_eq!(short.start(), 0);
        assert_eq!(short.visible_range(), 0..3);
    }

    #[test]
    fn test_scroll_up_and_down() {
        let mut w = VirtualWindow::new(20, 5, 10);
        assert_eq!(w.scroll_to_index(8), Some(8));
        assert_eq!(w.visible_range(), 8..13);
        assert_eq!(w.scroll_to_index(13), Some(9));
        assert!(w.is_visible(13));
        assert!(!w.is_visible(8));
    }

    #[test]
    fn test_scroll_out_of_bounds_is_ignored() {
        let mut w = VirtualWindow::new(5, 2, 0);
        assert_eq!(w.scroll_to_index(5), None);
        assert_eq!(w.start(), 0);
    }

    #[test]
    fn test_set_len_shrinks_start() {
        let mut w = VirtualWindow::new(20, 5, 15);
        assert_eq!(w.set_len(8), Some(3));
        assert_eq!(w.visible_range(), 3..8);
        assert_eq!(w.set_len(30), None);
    }

    #[test]
    fn test_zero_height_shows_one_row() {
        let w = VirtualWindow::new(3, 0, 0);
        assert_eq!(w.height(), 1);
        assert_eq!(w.visible_range(), 0..1);
    }
}
