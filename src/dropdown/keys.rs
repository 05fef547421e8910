//! Key bindings for the dropdown.
//!
//! - `↑/k` move to the previous option
//! - `↓/j` move into the list or to the next option
//! - `enter` select the focused option
//! - `space` open or close the list while the trigger is focused

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for dropdown navigation.
#[derive(Debug, Clone)]
pub struct DropdownKeyMap {
    /// Focus the previous option.
    pub up: key::Binding,
    /// Focus the first option from the trigger, or the next option.
    pub down: key::Binding,
    /// Select the focused option.
    pub select: key::Binding,
    /// Open or close the list from the trigger.
    pub toggle: key::Binding,
}

impl Default for DropdownKeyMap {
    fn default() -> Self {
        Self {
            up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            toggle: key::Binding::new(vec![KeyCode::Char(' ')]).with_help("space", "open/close"),
        }
    }
}

impl key::KeyMap for DropdownKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.up, &self.down], vec![&self.select, &self.toggle]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;

    #[test]
    fn test_help_lists_bindings() {
        let km = DropdownKeyMap::default();
        let short: Vec<_> = km.short_help().iter().map(|b| b.help().key.clone()).collect();
        assert_eq!(short, vec!["↑/k", "↓/j", "enter"]);
        assert_eq!(km.full_help().len(), 2);
    }
}
