//! Choosing between plain and virtual rendering after layout.
//!
//! Virtual rendering only pays off when the rows overflow the container.
//! After each focus the dropdown measures its rows against the container
//! and flips the mode when the current one no longer fits:
//!
//! - virtual, but every row fits without scrolling: go plain;
//! - plain, virtualization allowed, and the rows overflow: go virtual.
//!
//! Equal heights keep whichever mode is current, so a list sitting exactly
//! at the container height does not flip back and forth.

use super::types::RenderMode;
use tracing::debug;

/// Delivered one tick after a focus so the mode is chosen against the
/// settled layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeasureMsg {
    /// Widget that scheduled the measurement.
    pub id: usize,
    /// Focus cycle the measurement belongs to.
    pub cycle: usize,
}

/// Heights in terminal rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    /// Total height of all option rows.
    pub content_height: usize,
    /// Visible height of the options container.
    pub container_height: usize,
}

/// Returns the mode to switch to, or `None` to keep `current`.
///
/// ```rust
/// use bubbletea_dropdown::dropdown::{mode, RenderMode};
/// use bubbletea_dropdown::dropdown::mode::Measurement;
///
/// let short = Measurement { content_height: 3, container_height: 6 };
/// assert_eq!(mode::select_mode(RenderMode::Virtual, short, true), Some(RenderMode::Plain));
///
/// let long = Measurement { content_height: 40, container_height: 6 };
/// assert_eq!(mode::select_mode(RenderMode::Plain, long, true), Some(RenderMode::Virtual));
/// assert_eq!(mode::select_mode(RenderMode::Plain, long, false), None);
/// ```
pub fn select_mode(
    current: RenderMode,
    measurement: Measurement,
    virtualize: bool,
) -> Option<RenderMode> {
    let next = match current {
        RenderMode::Virtual if measurement.content_height < measurement.container_height => {
            RenderMode::Plain
        }
        RenderMode::Plain
            if virtualize && measurement.content_height > measurement.container_height =>
        {
            RenderMode::Virtual
        }
        _ => return None,
    };
    debug!(
        from = %current,
        to = %next,
        content = measurement.content_height,
        container = measurement.container_height,
        "switching render mode"
    );
    Some(next)
}
