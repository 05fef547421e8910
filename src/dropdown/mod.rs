//! Single and multi-select dropdown component.
//!
//! The dropdown shows a trigger line with the current selection (or a
//! placeholder) and, while open, a list of options. Options can be picked
//! with the keyboard or through [`Model::select`].
//!
//! ## Architecture
//!
//! - **Option index** (`index`): id-keyed lookup with selected state, rebuilt
//!   whenever options or values change.
//! - **Selection** (`selection`): pure transitions for select and clear.
//! - **Focus machine** (`focus`): open/closed and focus-within flags with a
//!   blur that is only finalized one tick later, so focus moving inside the
//!   widget never closes it.
//! - **Render mode** (`mode`): after each focus, a deferred measurement
//!   decides between rendering every row and rendering a virtual window.
//! - **Navigation** (`nav`): arrow keys and enter operate on row indices via
//!   the [`nav::RowFocus`] capability, identical in both render modes.
//!
//! ## Message flow
//!
//! [`Model::handle_focus`], [`Model::handle_blur`] and
//! [`Model::click_trigger`] return commands carrying a [`MeasureMsg`] or
//! [`BlurMsg`]. Route those, and key presses, back through
//! [`Model::update`]:
//!
//! ```rust
//! use bubbletea_dropdown::dropdown::{DropdownItem, Model};
//! use bubbletea_rs::{Cmd, Msg};
//!
//! struct App {
//!     dropdown: Model,
//! }
//!
//! impl App {
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.dropdown.update(msg)
//!     }
//! }
//!
//! let app = App {
//!     dropdown: Model::new(|_values| {}).with_options(vec![DropdownItem::new(1, "One")]),
//! };
//! assert!(!app.dropdown.is_open());
//! ```
//!
//! ## Element ids
//!
//! Elements carry ids derived from the configured name: the trigger is
//! `{name}-dropdown-button` and each option row `{name}-option-{id}`. They
//! are exposed through [`Model::focused_element_id`] and accepted by
//! [`Model::focus_element`].

mod error;
pub mod focus;
pub mod index;
pub mod keys;
pub mod mode;
mod model;
pub mod nav;
mod rendering;
pub mod selection;
pub mod style;
mod types;


pub use error::DropdownError;
pub use focus::{BlurMsg, OpenState};
pub use index::{IndexedItem, OptionIndex};
pub use keys::DropdownKeyMap;
pub use mode::MeasureMsg;
pub use model::Model;
pub use style::DropdownStyles;
pub use types::{
    container_element_id, option_element_id, placeholder_element_id, trigger_element_id,
    value_item_element_id, DropdownItem, FocusTarget, NotifyFn, OptionId, RenderMode, SelectFn,
    LISTBOX_ROLE,
};
