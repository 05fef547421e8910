//! Core value types shared by the dropdown submodules.

use std::fmt;

/// Identity of a dropdown option. Options may be keyed by number or string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionId {
    /// Numeric id.
    Num(i64),
    /// String id.
    Str(String),
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionId::Num(n) => write!(f, "{n}"),
            OptionId::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for OptionId {
    fn from(n: i64) -> Self {
        OptionId::Num(n)
    }
}

impl From<&str> for OptionId {
    fn from(s: &str) -> Self {
        OptionId::Str(s.to_string())
    }
}

impl From<String> for OptionId {
    fn from(s: String) -> Self {
        OptionId::Str(s)
    }
}

/// One selectable entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownItem {
    /// Identity used by selections.
    pub id: OptionId,
    /// Label shown in the option row and in the trigger when selected.
    pub value: String,
}

impl DropdownItem {
    /// Creates an item from anything convertible into an id and a label.
    ///
    /// ```rust
    /// use bubbletea_dropdown::dropdown::{DropdownItem, OptionId};
    ///
    /// let item = DropdownItem::new(1, "Apple");
    /// assert_eq!(item.id, OptionId::Num(1));
    /// ```
    pub fn new(id: impl Into<OptionId>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// How option rows are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Every row is rendered.
    Plain,
    /// Only the rows inside the visible window are rendered.
    Virtual,
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RenderMode::Plain => "plain",
            RenderMode::Virtual => "virtual",
        })
    }
}

/// The element inside the widget that currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Focus is somewhere else in the application.
    #[default]
    Outside,
    /// The trigger control that opens and closes the list.
    Trigger,
    /// The option row at this position in the option list.
    Row(usize),
}

impl FocusTarget {
    /// Row position, if focus is on an option row.
    pub fn row(self) -> Option<usize> {
        match self {
            FocusTarget::Row(i) => Some(i),
            _ => None,
        }
    }

    /// Basic ARIA-style role of the focused element.
    pub fn role(self) -> Option<&'static str> {
        match self {
            FocusTarget::Outside => None,
            FocusTarget::Trigger => Some("button"),
            FocusTarget::Row(_) => Some("option"),
        }
    }
}

/// Receives the next selection. `None` means "no selection" and is only
/// produced by clearing a single-select dropdown.
pub type SelectFn = Box<dyn FnMut(Option<Vec<OptionId>>) + Send>;

/// Parameterless notification (clear, focus, blur).
pub type NotifyFn = Box<dyn FnMut() + Send>;

/// Role of the options container.
pub const LISTBOX_ROLE: &str = "listbox";

/// Element id of the options container.
pub fn container_element_id(name: &str) -> String {
    format!("{name}-container")
}

/// Element id of the trigger control.
pub fn trigger_element_id(name: &str) -> String {
    format!("{name}-dropdown-button")
}

/// Element id of the selected-values label.
pub fn value_item_element_id(name: &str) -> String {
    format!("{name}-value-item")
}

/// Element id of the placeholder label.
pub fn placeholder_element_id(name: &str) -> String {
    format!("{name}-placeholder")
}

/// Element id of an option row.
pub fn option_element_id(name: &str, id: &OptionId) -> String {
    format!("{name}-option-{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ids_are_derived_from_name() {
        assert_eq!(trigger_element_id("fruit"), "fruit-dropdown-button");
        assert_eq!(container_element_id("fruit"), "fruit-container");
        assert_eq!(
            option_element_id("fruit", &OptionId::from(3)),
            "fruit-option-3"
        );
        assert_eq!(
            option_element_id("fruit", &OptionId::from("kiwi")),
            "fruit-option-kiwi"
        );
    }

    #[test]
    fn test_focus_target_roles() {
        assert_eq!(FocusTarget::Outside.role(), None);
        assert_eq!(FocusTarget::Trigger.role(), Some("button"));
        assert_eq!(FocusTarget::Row(2).role(), Some("option"));
        assert_eq!(FocusTarget::Row(2).row(), Some(2));
        assert_eq!(FocusTarget::Trigger.row(), None);
    }
}
