#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-dropdown/")]

//! # bubbletea-dropdown
//!
//! A single and multi-select dropdown component for terminal applications
//! built with [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The dropdown follows the Elm Architecture like every bubbletea
//! component: it is updated with messages and rendered with `view()`.
//! It keeps track of:
//!
//! - whether the option list is open, and whether focus is inside it
//! - which option row holds keyboard focus
//! - whether options render plainly or through a virtual window
//! - the scroll position of the virtual window across open/close cycles
//!
//! Selections are reported through a callback; the dropdown itself never
//! changes the values it was given.
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_dropdown::prelude::*;
//! use bubbletea_rs::{KeyMsg, Msg};
//! use crossterm::event::{KeyCode, KeyModifiers};
//! use std::sync::{Arc, Mutex};
//!
//! let picked = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&picked);
//!
//! let mut dropdown = Dropdown::new(move |values| sink.lock().unwrap().push(values))
//!     .with_name("color")
//!     .with_multi(true)
//!     .with_options(vec![
//!         DropdownItem::new("red", "Red"),
//!         DropdownItem::new("green", "Green"),
//!     ]);
//!
//! let _measure = dropdown.focus();
//! let down: Msg = Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE });
//! dropdown.update(down);
//! let enter: Msg = Box::new(KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE });
//! dropdown.update(enter);
//!
//! assert_eq!(
//!     picked.lock().unwrap().last().cloned(),
//!     Some(Some(vec![OptionId::from("red")]))
//! );
//! ```
//!
//! ## Key Bindings
//!
//! | Keys | Action |
//! |------|--------|
//! | `↓`, `j` | Enter the list from the trigger, or move down |
//! | `↑`, `k` | Move up |
//! | `enter` | Select the focused option |
//! | `space` | Open or close from the trigger |

pub mod dropdown;
pub mod key;
pub mod window;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command for
///   deferred work (the dropdown returns its layout measurement).
/// - `blur()` unsets the focused state.
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
///
/// fn cycle<T: Component>(component: &mut T) {
///     let _cmd = component.focus();
///     assert!(component.focused());
///     component.blur();
///     assert!(!component.focused());
/// }
///
/// let mut dropdown = Dropdown::new(|_| {});
/// cycle(&mut dropdown);
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use dropdown::Model as Dropdown;
pub use dropdown::{
    BlurMsg, DropdownError, DropdownItem, DropdownKeyMap, DropdownStyles, FocusTarget,
    MeasureMsg, OpenState, OptionId, RenderMode,
};
pub use key::{matches_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use window::VirtualWindow;

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_dropdown::prelude::*;
/// ```
pub mod prelude {
    pub use crate::dropdown::{
        BlurMsg, DropdownError, DropdownItem, DropdownKeyMap, DropdownStyles, FocusTarget,
        MeasureMsg, Model as Dropdown, OpenState, OptionId, RenderMode,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::window::VirtualWindow;
    pub use crate::Component;
}
