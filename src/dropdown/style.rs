//! Default look of the dropdown.
//!
//! ```rust
//! use bubbletea_dropdown::dropdown::DropdownStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = DropdownStyles::default();
//! styles.selected_option = Style::new().foreground(Color::from("#7D56F4")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Arrow shown on the trigger while the list is closed.
pub const ARROW_DOWN: &str = "▾";
/// Arrow shown on the trigger while the list is open.
pub const ARROW_UP: &str = "▴";
/// Clear mark shown when the selection can be cleared.
pub const CLEAR_MARK: &str = "×";
/// Check mark for selected rows in multi-select mode.
pub const CHECK_MARK: &str = "✓";
/// Marks text cut to fit the width.
pub const ELLIPSIS: &str = "…";

/// Styles for each visual element of the dropdown.
#[derive(Debug, Clone)]
pub struct DropdownStyles {
    /// Trigger line when focus is elsewhere.
    pub trigger: Style,
    /// Trigger line while it holds focus.
    pub trigger_focused: Style,
    /// Placeholder text shown with an empty selection.
    pub placeholder: Style,
    /// Unselected, unfocused option row.
    pub option: Style,
    /// Selected option row.
    pub selected_option: Style,
    /// Option row holding focus.
    pub focused_option: Style,
    /// Arrow and clear marks.
    pub icon: Style,
}

impl Default for DropdownStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };
        let accent = AdaptiveColor {
            Light: "#EE6FF8",
            Dark: "#EE6FF8",
        };

        Self {
            trigger: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            trigger_focused: Style::new().foreground(accent.clone()).bold(true),
            placeholder: Style::new().foreground(subdued.clone()),
            option: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_option: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            focused_option: Style::new().foreground(accent).reverse(true),
            icon: Style::new().foreground(subdued),
        }
    }
}
