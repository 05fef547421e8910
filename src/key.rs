//! Type-safe key bindings.
//!
//! A [`Binding`] groups one or more key presses under a single action and
//! carries the short help text shown by help views. Components expose their
//! bindings through a keymap struct implementing [`KeyMap`].
//!
//! ```rust
//! use bubbletea_dropdown::key::{Binding, KeyMap};
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//! let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)])
//!     .with_help("ctrl+s", "save");
//!
//! struct MyKeyMap {
//!     confirm: Binding,
//!     save: Binding,
//! }
//!
//! impl KeyMap for MyKeyMap {
//!     fn short_help(&self) -> Vec<&Binding> {
//!         vec![&self.confirm, &self.save]
//!     }
//!
//!     fn full_help(&self) -> Vec<Vec<&Binding>> {
//!         vec![vec![&self.confirm], vec![&self.save]]
//!     }
//! }
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus the modifiers held with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, modifiers): (KeyCode, KeyModifiers)) -> Self {
        Self { code, modifiers }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Human readable key label, e.g. `"↑"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key presses bound to one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text.
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Returns the key presses of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Returns the help text.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding. Disabled bindings never match.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Whether the binding can match and should be listed in help.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Reports whether `msg` is one of this binding's key presses.
    ///
    /// A press without modifiers in the binding also matches a press with
    /// `SHIFT`, since terminals report shifted characters inconsistently.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if !self.enabled() {
            return false;
        }
        self.keys.iter().any(|k| {
            k.code == msg.key
                && (k.modifiers == msg.modifiers
                    || (k.modifiers == KeyModifiers::NONE && msg.modifiers == KeyModifiers::SHIFT))
        })
    }
}

/// Reports whether `msg` matches any of `bindings`.
pub fn matches_binding(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Implemented by keymaps that can describe themselves to help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings grouped into columns for the expanded help.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers,
        }
    }

    #[test]
    fn test_binding_matches_plain_key() {
        let b = Binding::new(vec![KeyCode::Down, KeyCode::Char('j')]);
        assert!(b.matches(&press(KeyCode::Down, KeyModifiers::NONE)));
        assert!(b.matches(&press(KeyCode::Char('j'), KeyModifiers::NONE)));
        assert!(!b.matches(&press(KeyCode::Up, KeyModifiers::NONE)));
    }

    #[test]
    fn test_binding_respects_modifiers() {
        let b = Binding::new(vec![(KeyCode::Char('c'), KeyModifiers::CONTROL)]);
        assert!(b.matches(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!b.matches(&press(KeyCode::Char('c'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
        b.set_enabled(false);
        assert!(!b.enabled());
        assert!(!b.matches(&press(KeyCode::Enter, KeyModifiers::NONE)));
        assert_eq!(b.help().desc, "select");
    }

    #[test]
    fn test_matches_binding_any() {
        let up = Binding::new(vec![KeyCode::Up]);
        let down = Binding::new(vec![KeyCode::Down]);
        assert!(matches_binding(
            &press(KeyCode::Down, KeyModifiers::NONE),
            &[&up, &down]
        ));
        assert!(!matches_binding(
            &press(KeyCode::Left, KeyModifiers::NONE),
            &[&up, &down]
        ));
    }
}
