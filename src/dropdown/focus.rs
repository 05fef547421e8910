//! Open/focus state machine with a debounced blur.
//!
//! Moving focus inside the widget can produce a blur immediately followed by
//! a focus. Closing on the blur would make the list flicker, so a blur only
//! *starts* a pending close: it hands out a [`BlurMsg`] that the owner
//! delivers on the next tick. A focus arriving first cancels it.
//!
//! At most one blur is pending. The machine remembers the tag of the live
//! one; messages carrying any other tag, or another widget's id, are stale
//! and ignored. This is the same id/tag scheme the cursor uses for blink
//! messages.

use tracing::{debug, trace};

/// Delivered one tick after a blur to finish closing the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlurMsg {
    /// Widget that issued the blur.
    pub id: usize,
    /// Sequence tag of the blur; only the live tag is honoured.
    pub tag: usize,
}

/// Observable open/focus state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenState {
    /// The option list is hidden.
    Closed,
    /// Open, but focus has left and a close is pending (or focus never
    /// entered).
    OpenUnfocused,
    /// Open with focus inside the widget.
    OpenFocused,
}

/// Owns `is_open`, `focus_within` and the pending blur handle.
#[derive(Debug, Clone)]
pub struct FocusMachine {
    id: usize,
    is_open: bool,
    focus_within: bool,
    blur_tag: usize,
    pending_blur: Option<usize>,
}

impl FocusMachine {
    /// Creates a closed, unfocused machine for widget `id`.
    pub fn new(id: usize) -> Self {
        Self {
            id,
            is_open: false,
            focus_within: false,
            blur_tag: 0,
            pending_blur: None,
        }
    }

    /// Widget id stamped on the messages this machine issues.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Whether the option list is shown.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether focus is inside the widget.
    pub fn focus_within(&self) -> bool {
        self.focus_within
    }

    /// Whether a blur is waiting to be finalized.
    pub fn has_pending_blur(&self) -> bool {
        self.pending_blur.is_some()
    }

    /// Current state.
    pub fn state(&self) -> OpenState {
        if !self.is_open {
            OpenState::Closed
        } else if self.focus_within && self.pending_blur.is_none() {
            OpenState::OpenFocused
        } else {
            OpenState::OpenUnfocused
        }
    }

    /// Handles a focus event: cancels any pending blur and opens.
    ///
    /// Returns `true` when this opened a closed list.
    pub fn focus(&mut self) -> bool {
        if let Some(tag) = self.pending_blur.take() {
            trace!(id = self.id, tag, "pending blur cancelled by focus");
        }
        self.focus_within = true;
        let opened = !self.is_open;
        self.is_open = true;
        if opened {
            debug!(id = self.id, "dropdown opened");
        }
        opened
    }

    /// Handles a blur event: starts a pending close, superseding any earlier
    /// one, and returns the message that finalizes it.
    pub fn start_blur(&mut self) -> BlurMsg {
        self.blur_tag += 1;
        self.pending_blur = Some(self.blur_tag);
        BlurMsg {
            id: self.id,
            tag: self.blur_tag,
        }
    }

    /// Whether `msg` is the pending blur of this machine.
    pub fn is_live(&self, msg: &BlurMsg) -> bool {
        msg.id == self.id && self.pending_blur == Some(msg.tag)
    }

    /// Finalizes a pending blur.
    ///
    /// Returns `true` when focus actually left, i.e. the caller should notify
    /// its blur listener.
    pub fn finalize_blur(&mut self, msg: &BlurMsg) -> bool {
        if !self.is_live(msg) {
            trace!(id = self.id, tag = msg.tag, "ignoring stale blur");
            return false;
        }
        self.pending_blur = None;
        if !self.focus_within {
            return false;
        }
        self.focus_within = false;
        self.is_open = false;
        debug!(id = self.id, "dropdown closed by blur");
        true
    }

    /// Hides the list without touching focus (used after a single-select
    /// pick).
    pub fn close(&mut self) {
        if self.is_open {
            debug!(id = self.id, "dropdown closed");
        }
        self.is_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_closed() {
        let m = FocusMachine::new(1);
        assert_eq!(m.state(), OpenState::Closed);
        assert!(!m.focus_within());
        assert!(!m.has_pending_blur());
    }

    #[test]
    fn test_focus_opens() {
        let mut m = FocusMachine::new(1);
        assert!(m.focus());
        assert_eq!(m.state(), OpenState::OpenFocused);
        // Already open.
        assert!(!m.focus());
    }

    #[test]
    fn test_blur_closes_after_finalize() {
        let mut m = FocusMachine::new(1);
        m.focus();
        let msg = m.start_blur();
        assert_eq!(m.state(), OpenState::OpenUnfocused);
        assert!(m.finalize_blur(&msg));
        assert_eq!(m.state(), OpenState::Closed);
        assert!(!m.focus_within());
    }

    #[test]
    fn test_focus_cancels_pending_blur() {
        let mut m = FocusMachine::new(1);
        m.focus();
        let msg = m.start_blur();
        m.focus();
        assert!(!m.finalize_blur(&msg));
        assert_eq!(m.state(), OpenState::OpenFocused);
    }

    #[test]
    fn test_new_blur_supersedes_old() {
        let mut m = FocusMachine::new(1);
        m.focus();
        let first = m.start_blur();
        let second = m.start_blur();
        assert_ne!(first.tag, second.tag);
        assert!(!m.finalize_blur(&first));
        assert!(m.has_pending_blur());
        assert!(m.finalize_blur(&second));
    }

    #[test]
    fn test_blur_for_other_widget_is_ignored() {
        let mut m = FocusMachine::new(1);
        m.focus();
        let msg = m.start_blur();
        let foreign = BlurMsg { id: 2, tag: msg.tag };
        assert!(!m.finalize_blur(&foreign));
        assert!(m.is_open());
    }

    #[test]
    fn test_blur_without_focus_does_not_notify() {
        let mut m = FocusMachine::new(1);
        let msg = m.start_blur();
        assert!(!m.finalize_blur(&msg));
        assert!(!m.has_pending_blur());
    }

    #[test]
    fn test_close_keeps_focus() {
        let mut m = FocusMachine::new(1);
        m.focus();
        m.close();
        assert_eq!(m.state(), OpenState::Closed);
        assert!(m.focus_within());
    }
}
