//! Errors reported by the dropdown.

use thiserror::Error;

/// Errors from addressing dropdown elements by id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropdownError {
    /// The id does not name the trigger or any option of this dropdown.
    #[error("no element with id `{0}` in this dropdown")]
    UnknownElement(String),
    /// The option exists but its row is not rendered (list closed, or
    /// outside the visible window).
    #[error("option row `{0}` is not rendered")]
    OptionNotRendered(String),
}
