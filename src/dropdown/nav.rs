//! Keyboard navigation over option rows.
//!
//! Navigation works on row indices through the [`RowFocus`] capability, so
//! one key table serves both rendering modes:
//!
//! | Action | On the trigger | On a row |
//! |--------|----------------|----------|
//! | `Down` | focus the entry row | focus the next row, if any |
//! | `Up`   | nothing | focus the previous row, if any |
//! | `Select` | nothing | select the focused row |
//!
//! The two implementations differ only in where the entry row is and in
//! what focusing a row costs: [`PlainRows`] enters at row 0, while
//! [`VirtualRows`] enters at the first row of the visible window and scrolls
//! the window to whatever row gains focus.
//!
//! A missing target is never an error; focus simply stays where it was.

use crate::window::VirtualWindow;

/// Mode-independent access to the focusable option rows.
pub trait RowFocus {
    /// Number of rows that can be focused.
    fn row_count(&self) -> usize;

    /// Row that gains focus when moving down from the trigger.
    fn entry_index(&self) -> Option<usize>;

    /// Moves focus to `index`. Returns `false` when no such row exists.
    fn focus_row(&mut self, index: usize) -> bool;

    /// Row that currently holds focus, if any.
    fn current_focused_index(&self) -> Option<usize>;
}

/// A navigation request decoded from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    /// Move towards the start of the list.
    Up,
    /// Move towards the end of the list, or into it from the trigger.
    Down,
    /// Activate the focused row.
    Select,
}

/// What navigation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Focus did not move.
    Unchanged,
    /// Focus moved to this row.
    Focused(usize),
    /// The row at this index should be selected.
    Select(usize),
}

/// Applies `action` given whether the trigger holds focus.
pub fn navigate(action: NavAction, on_trigger: bool, rows: &mut dyn RowFocus) -> NavOutcome {
    let current = rows.current_focused_index();
    let target = match (action, current) {
        (NavAction::Select, Some(i)) => return NavOutcome::Select(i),
        (NavAction::Down, None) if on_trigger => rows.entry_index(),
        (NavAction::Down, Some(i)) => i.checked_add(1),
        (NavAction::Up, Some(i)) => i.checked_sub(1),
        _ => None,
    };
    match target {
        Some(i) if i < rows.row_count() && rows.focus_row(i) => NavOutcome::Focused(i),
        _ => NavOutcome::Unchanged,
    }
}

/// Rows of a plain list: every row is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlainRows {
    count: usize,
    focused: Option<usize>,
}

impl PlainRows {
    /// Creates the capability for `count` rows with `focused` holding focus.
    pub fn new(count: usize, focused: Option<usize>) -> Self {
        Self { count, focused }
    }
}

impl RowFocus for PlainRows {
    fn row_count(&self) -> usize {
        self.count
    }

    fn entry_index(&self) -> Option<usize> {
        (self.count > 0).then_some(0)
    }

    fn focus_row(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.focused = Some(index);
        true
    }

    fn current_focused_index(&self) -> Option<usize> {
        self.focused
    }
}

/// Rows of a windowed list: only the visible window is rendered.
#[derive(Debug)]
pub struct VirtualRows<'a> {
    window: &'a mut VirtualWindow,
    focused: Option<usize>,
    scrolled_to: Option<usize>,
}

impl<'a> VirtualRows<'a> {
    /// Creates the capability over `window` with `focused` holding focus.
    pub fn new(window: &'a mut VirtualWindow, focused: Option<usize>) -> Self {
        Self {
            window,
            focused,
            scrolled_to: None,
        }
    }

    /// New window start if focusing scrolled the window.
    pub fn scrolled_to(&self) -> Option<usize> {
        self.scrolled_to
    }
}

impl RowFocus for VirtualRows<'_> {
    fn row_count(&self) -> usize {
        self.window.len()
    }

    fn entry_index(&self) -> Option<usize> {
        let range = self.window.visible_range();
        (!range.is_empty()).then_some(range.start)
    }

    fn focus_row(&mut self, index: usize) -> bool {
        if index >= self.window.len() {
            return false;
        }
        if let Some(start) = self.window.scroll_to_index(index) {
            self.scrolled_to = Some(start);
        }
        self.focused = Some(index);
        true
    }

    fn current_focused_index(&self) -> Option<usize> {
        self.focused
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_from_trigger_enters_first_row() {
        let mut rows = PlainRows::new(3, None);
        assert_eq!(
            navigate(NavAction::Down, true, &mut rows),
            NavOutcome::Focused(0)
        );
        assert_eq!(rows.current_focused_index(), Some(0));
    }

    #[test]
    fn test_down_outside_widget_does_nothing() {
        let mut rows = PlainRows::new(3, None);
        assert_eq!(
            navigate(NavAction::Down, false, &mut rows),
            NavOutcome::Unchanged
        );
    }

    #[test]
    fn test_up_on_trigger_is_noop() {
        let mut rows = PlainRows::new(3, None);
        assert_eq!(navigate(NavAction::Up, true, &mut rows), NavOutcome::Unchanged);
        assert_eq!(
            navigate(NavAction::Select, true, &mut rows),
            NavOutcome::Unchanged
        );
    }

    #[test]
    fn test_boundaries_leave_focus_unchanged() {
        let mut first = PlainRows::new(3, Some(0));
        assert_eq!(navigate(NavAction::Up, false, &mut first), NavOutcome::Unchanged);
        assert_eq!(first.current_focused_index(), Some(0));

        let mut last = PlainRows::new(3, Some(2));
        assert_eq!(navigate(NavAction::Down, false, &mut last), NavOutcome::Unchanged);
        assert_eq!(last.current_focused_index(), Some(2));
    }

    #[test]
    fn test_empty_list_has_no_entry() {
        let mut rows = PlainRows::new(0, None);
        assert_eq!(navigate(NavAction::Down, true, &mut rows), NavOutcome::Unchanged);
    }

    #[test]
    fn test_select_reports_focused_row() {
        let mut rows = PlainRows::new(3, Some(1));
        assert_eq!(
            navigate(NavAction::Select, false, &mut rows),
            NavOutcome::Select(1)
        );
    }

    #[test]
    fn test_virtual_entry_is_window_start() {
        let mut window = VirtualWindow::new(50, 5, 20);
        let mut rows = VirtualRows::new(&mut window, None);
        assert_eq!(
            navigate(NavAction::Down, true, &mut rows),
            NavOutcome::Focused(20)
        );
        assert_eq!(rows.scrolled_to(), None);
    }

    #[test]
    fn test_virtual_focus_scrolls_window() {
        let mut window = VirtualWindow::new(50, 5, 0);
        {
            let mut rows = VirtualRows::new(&mut window, Some(4));
            assert_eq!(
                navigate(NavAction::Down, false, &mut rows),
                NavOutcome::Focused(5)
            );
            assert_eq!(rows.scrolled_to(), Some(1));
        }
        assert_eq!(window.visible_range(), 1..6);
    }

    #[test]
    fn test_virtual_boundaries() {
        let mut window = VirtualWindow::new(3, 5, 0);
        let mut rows = VirtualRows::new(&mut window, Some(2));
        assert_eq!(navigate(NavAction::Down, false, &mut rows), NavOutcome::Unchanged);
        let mut rows = VirtualRows::new(&mut window, Some(0));
        assert_eq!(navigate(NavAction::Up, false, &mut rows), NavOutcome::Unchanged);
    }
}
