//! The dropdown `Model`: configuration, event handling and update loop.

use super::error::DropdownError;
use super::focus::{BlurMsg, FocusMachine, OpenState};
use super::index::OptionIndex;
use super::keys::DropdownKeyMap;
use super::mode::{self, MeasureMsg, Measurement};
use super::nav::{self, NavAction, NavOutcome, PlainRows, VirtualRows};
use super::selection;
use super::style::DropdownStyles;
use super::types::{
    container_element_id, option_element_id, placeholder_element_id, trigger_element_id,
    value_item_element_id, DropdownItem, FocusTarget, NotifyFn, OptionId, RenderMode, SelectFn,
    LISTBOX_ROLE,
};
use crate::window::VirtualWindow;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace};

// Messages are stamped with the widget id so several dropdowns can share one
// program without reacting to each other's deferred messages.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

const DEFAULT_NAME: &str = "dropdown";
const DEFAULT_MAX_HEIGHT: usize = 6;
const DEFAULT_WIDTH: usize = 24;

/// Delivers `msg` once the current update has returned.
fn defer<M: Send + 'static>(msg: M) -> Cmd {
    Box::pin(async move { Some(Box::new(msg) as Msg) })
}

/// A single or multi-select dropdown.
///
/// The dropdown is a controlled component: it never changes its own
/// selection. Every pick or clear is reported through `on_select`, and the
/// owner passes the accepted values back with [`Model::set_values`].
///
/// Focus and blur come from the host through [`Model::handle_focus`] and
/// [`Model::handle_blur`] (or the [`Component`](crate::Component) trait).
/// Both return commands whose messages must be routed back into
/// [`Model::update`] together with key presses.
///
/// # Examples
///
/// ```rust
/// use bubbletea_dropdown::dropdown::{DropdownItem, Model, OptionId};
/// use std::sync::{Arc, Mutex};
///
/// let picked = Arc::new(Mutex::new(None));
/// let sink = Arc::clone(&picked);
///
/// let mut dropdown = Model::new(move |values| *sink.lock().unwrap() = values)
///     .with_name("fruit")
///     .with_placeholder("Pick a fruit")
///     .with_options(vec![
///         DropdownItem::new(1, "Apple"),
///         DropdownItem::new(2, "Banana"),
///     ]);
///
/// let _measure = dropdown.handle_focus();
/// assert!(dropdown.is_open());
///
/// dropdown.select(&OptionId::from(2));
/// assert_eq!(*picked.lock().unwrap(), Some(vec![OptionId::from(2)]));
/// assert!(!dropdown.is_open());
/// ```
pub struct Model {
    /// Visual styles.
    pub styles: DropdownStyles,
    /// Key bindings.
    pub keymap: DropdownKeyMap,

    pub(super) id: usize,
    pub(super) name: String,
    pub(super) placeholder: String,
    pub(super) multi: bool,
    pub(super) options: Vec<DropdownItem>,
    pub(super) values: Vec<OptionId>,
    pub(super) index: OptionIndex,

    pub(super) remember_scroll_position: bool,
    pub(super) virtualize_options: bool,
    pub(super) max_height: usize,
    pub(super) row_height: usize,
    pub(super) width: usize,

    // State
    pub(super) focus: FocusMachine,
    pub(super) target: FocusTarget,
    pub(super) render_mode: RenderMode,
    pub(super) window: VirtualWindow,
    pub(super) scroll_index: usize,
    pub(super) measure_cycle: usize,
    pub(super) measured_cycle: usize,

    // Callbacks
    pub(super) on_select: SelectFn,
    pub(super) on_clear: Option<NotifyFn>,
    pub(super) on_focus: Option<NotifyFn>,
    pub(super) on_blur: Option<NotifyFn>,
}

impl Model {
    /// Creates a closed, empty dropdown reporting selections to `on_select`.
    ///
    /// Defaults: single-select, name `"dropdown"`, virtualization on,
    /// scroll position remembered, a 6-row options container, one row per
    /// option and a width of 24 columns.
    pub fn new<F>(on_select: F) -> Self
    where
        F: FnMut(Option<Vec<OptionId>>) + Send + 'static,
    {
        let id = next_id();
        Self {
            styles: DropdownStyles::default(),
            keymap: DropdownKeyMap::default(),
            id,
            name: DEFAULT_NAME.to_string(),
            placeholder: String::new(),
            multi: false,
            options: Vec::new(),
            values: Vec::new(),
            index: OptionIndex::default(),
            remember_scroll_position: true,
            virtualize_options: true,
            max_height: DEFAULT_MAX_HEIGHT,
            row_height: 1,
            width: DEFAULT_WIDTH,
            focus: FocusMachine::new(id),
            target: FocusTarget::Outside,
            render_mode: RenderMode::Virtual,
            window: VirtualWindow::new(0, DEFAULT_MAX_HEIGHT, 0),
            scroll_index: 0,
            measure_cycle: 0,
            measured_cycle: 0,
            on_select: Box::new(on_select),
            on_clear: None,
            on_focus: None,
            on_blur: None,
        }
    }

    /// Allows several values to be selected.
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    /// Sets the name element ids are derived from.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Text shown on the trigger while nothing is selected.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Sets the options.
    pub fn with_options(mut self, options: Vec<DropdownItem>) -> Self {
        self.set_options(options);
        self
    }

    /// Sets the selected values.
    pub fn with_values(mut self, values: Vec<OptionId>) -> Self {
        self.set_values(values);
        self
    }

    /// Whether reopening a virtual list scrolls back to where it was.
    pub fn with_remember_scroll_position(mut self, remember: bool) -> Self {
        self.remember_scroll_position = remember;
        self
    }

    /// Whether long lists may render virtually. Also resets the current
    /// render mode.
    pub fn with_virtualize_options(mut self, virtualize: bool) -> Self {
        self.set_virtualize_options(virtualize);
        self
    }

    /// Visible height of the options container, in rows.
    pub fn with_max_height(mut self, rows: usize) -> Self {
        self.max_height = rows.max(1);
        self.window = VirtualWindow::new(self.options.len(), self.visible_rows(), 0);
        self
    }

    /// Height of one option row, in rows.
    pub fn with_row_height(mut self, rows: usize) -> Self {
        self.row_height = rows.max(1);
        self.window = VirtualWindow::new(self.options.len(), self.visible_rows(), 0);
        self
    }

    /// Render width in columns.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: DropdownStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Called after `on_select` whenever the selection is cleared. Also
    /// makes the trigger show a clear mark while values are selected.
    pub fn with_on_clear<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_clear = Some(Box::new(f));
        self
    }

    /// Called on every focus event.
    pub fn with_on_focus<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// Called when focus has left the widget.
    pub fn with_on_blur<F>(mut self, f: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_blur = Some(Box::new(f));
        self
    }

    /// Replaces the options and rebuilds the index.
    pub fn set_options(&mut self, options: Vec<DropdownItem>) {
        self.options = options;
        self.index = OptionIndex::build(&self.options, &self.values);
        if let Some(start) = self.window.set_len(self.options.len()) {
            self.scroll_index = start;
        }
        if let FocusTarget::Row(i) = self.target {
            if i >= self.options.len() {
                self.target = FocusTarget::Trigger;
            }
        }
    }

    /// Replaces the selected values and rebuilds the index.
    pub fn set_values(&mut self, values: Vec<OptionId>) {
        self.values = values;
        self.index = OptionIndex::build(&self.options, &self.values);
    }

    /// Enables or disables virtualization, resetting the render mode to
    /// match.
    pub fn set_virtualize_options(&mut self, virtualize: bool) {
        self.virtualize_options = virtualize;
        self.render_mode = if virtualize {
            RenderMode::Virtual
        } else {
            RenderMode::Plain
        };
    }

    /// Unique id of this widget instance.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Name used to derive element ids.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether several values can be selected.
    pub fn is_multi(&self) -> bool {
        self.multi
    }

    /// The options.
    pub fn options(&self) -> &[DropdownItem] {
        &self.options
    }

    /// The selected values, as last passed in.
    pub fn values(&self) -> &[OptionId] {
        &self.values
    }

    /// The id-keyed option index.
    pub fn index(&self) -> &OptionIndex {
        &self.index
    }

    /// Whether the option with `id` is selected.
    pub fn is_selected(&self, id: &OptionId) -> bool {
        self.index.is_selected(id)
    }

    /// Whether the option list is shown.
    pub fn is_open(&self) -> bool {
        self.focus.is_open()
    }

    /// Whether focus is inside the widget.
    pub fn focus_within(&self) -> bool {
        self.focus.focus_within()
    }

    /// Current open/focus state.
    pub fn open_state(&self) -> OpenState {
        self.focus.state()
    }

    /// Current render mode.
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// First visible row last reported by the virtual window.
    pub fn scroll_index(&self) -> usize {
        self.scroll_index
    }

    /// Element holding focus.
    pub fn focus_target(&self) -> FocusTarget {
        self.target
    }

    /// Indices of the option rows that are rendered right now.
    pub fn rendered_range(&self) -> Range<usize> {
        if !self.focus.is_open() {
            return 0..0;
        }
        match self.render_mode {
            RenderMode::Plain => 0..self.options.len(),
            RenderMode::Virtual => self.window.visible_range(),
        }
    }

    /// Element id of the trigger.
    pub fn trigger_id(&self) -> String {
        trigger_element_id(&self.name)
    }

    /// Element id of the options container.
    pub fn container_id(&self) -> String {
        container_element_id(&self.name)
    }

    /// Role of the options container.
    pub fn container_role(&self) -> &'static str {
        LISTBOX_ROLE
    }

    /// Element id of the trigger label: the selected-values label when
    /// something is selected, the placeholder otherwise.
    pub fn label_id(&self) -> String {
        if self.values.is_empty() {
            placeholder_element_id(&self.name)
        } else {
            value_item_element_id(&self.name)
        }
    }

    /// Element id of the focused element, if focus is inside the widget.
    pub fn focused_element_id(&self) -> Option<String> {
        match self.target {
            FocusTarget::Outside => None,
            FocusTarget::Trigger => Some(self.trigger_id()),
            FocusTarget::Row(i) => self
                .options
                .get(i)
                .map(|o| option_element_id(&self.name, &o.id)),
        }
    }

    /// Moves focus to the trigger or to a rendered option row, addressed by
    /// element id. Does not fire focus events.
    pub fn focus_element(&mut self, element_id: &str) -> Result<(), DropdownError> {
        if element_id == self.trigger_id() {
            self.target = FocusTarget::Trigger;
            return Ok(());
        }
        let pos = self
            .options
            .iter()
            .position(|o| option_element_id(&self.name, &o.id) == element_id)
            .ok_or_else(|| DropdownError::UnknownElement(element_id.to_string()))?;
        if !self.rendered_range().contains(&pos) {
            return Err(DropdownError::OptionNotRendered(element_id.to_string()));
        }
        self.target = FocusTarget::Row(pos);
        Ok(())
    }

    /// Heights the render-mode decision is based on.
    pub fn measurement(&self) -> Measurement {
        Measurement {
            content_height: self.options.len().saturating_mul(self.row_height),
            container_height: self.max_height,
        }
    }

    /// Focus entered the widget.
    ///
    /// Cancels a pending blur, opens the list, notifies `on_focus` and
    /// returns the command that delivers the [`MeasureMsg`] for this focus
    /// cycle.
    pub fn handle_focus(&mut self) -> Option<Cmd> {
        if self.target == FocusTarget::Outside {
            self.target = FocusTarget::Trigger;
        }
        if self.focus.focus() {
            self.reset_window();
        }
        if let Some(on_focus) = self.on_focus.as_mut() {
            on_focus();
        }
        self.measure_cycle += 1;
        Some(defer(MeasureMsg {
            id: self.id,
            cycle: self.measure_cycle,
        }))
    }

    /// Focus left the widget. The close happens when the returned command's
    /// [`BlurMsg`] arrives, unless a focus comes first.
    pub fn handle_blur(&mut self) -> Cmd {
        defer(self.focus.start_blur())
    }

    /// The trigger was clicked: closes an open list (as a blur would),
    /// opens a closed one (as a focus would).
    pub fn click_trigger(&mut self) -> Option<Cmd> {
        if self.focus.is_open() {
            return Some(defer(self.focus.start_blur()));
        }
        self.target = FocusTarget::Trigger;
        self.handle_focus()
    }

    /// Reports the selection that results from activating `clicked`.
    /// Single-select also closes the list.
    pub fn select(&mut self, clicked: &OptionId) {
        let transition = selection::select(&self.values, clicked, self.multi);
        if transition.close {
            self.focus.close();
            if self.target.row().is_some() {
                self.target = FocusTarget::Trigger;
            }
        }
        debug!(id = self.id, option = %clicked, multi = self.multi, "option selected");
        (self.on_select)(transition.values);
    }

    /// Reports an empty selection, then notifies `on_clear`.
    pub fn clear(&mut self) {
        let transition = selection::clear(self.multi);
        debug!(id = self.id, "selection cleared");
        (self.on_select)(transition.values);
        if let Some(on_clear) = self.on_clear.as_mut() {
            on_clear();
        }
    }

    /// Handles deferred dropdown messages and key presses.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(blur) = msg.downcast_ref::<BlurMsg>() {
            self.finish_blur(blur);
            return None;
        }
        if let Some(measure) = msg.downcast_ref::<MeasureMsg>() {
            self.measure(measure);
            return None;
        }
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key);
        }
        None
    }

    pub(super) fn finish_blur(&mut self, msg: &BlurMsg) {
        if !self.focus.is_live(msg) {
            trace!(id = self.id, tag = msg.tag, "ignoring stale blur");
            return;
        }
        let notify = self.focus.finalize_blur(msg);
        self.target = FocusTarget::Outside;
        if notify {
            if let Some(on_blur) = self.on_blur.as_mut() {
                on_blur();
            }
        }
    }

    fn measure(&mut self, msg: &MeasureMsg) {
        if msg.id != self.id || msg.cycle != self.measure_cycle || msg.cycle == self.measured_cycle
        {
            trace!(id = self.id, cycle = msg.cycle, "ignoring stale measurement");
            return;
        }
        self.measured_cycle = msg.cycle;
        if self.target != FocusTarget::Trigger || !self.focus.is_open() {
            return;
        }
        if let Some(next) =
            mode::select_mode(self.render_mode, self.measurement(), self.virtualize_options)
        {
            self.render_mode = next;
            if next == RenderMode::Virtual {
                self.reset_window();
            }
        }
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        if !self.focus.focus_within() {
            return None;
        }
        if self.keymap.toggle.matches(key) {
            if self.target == FocusTarget::Trigger {
                return self.click_trigger();
            }
            return None;
        }
        let action = if self.keymap.select.matches(key) {
            NavAction::Select
        } else if self.keymap.up.matches(key) {
            NavAction::Up
        } else if self.keymap.down.matches(key) {
            NavAction::Down
        } else {
            return None;
        };
        self.navigate(action);
        None
    }

    fn navigate(&mut self, action: NavAction) {
        if !self.focus.is_open() {
            return;
        }
        let on_trigger = self.target == FocusTarget::Trigger;
        let focused = self.target.row();
        let outcome = match self.render_mode {
            RenderMode::Plain => {
                let mut rows = PlainRows::new(self.options.len(), focused);
                nav::navigate(action, on_trigger, &mut rows)
            }
            RenderMode::Virtual => {
                let mut rows = VirtualRows::new(&mut self.window, focused);
                let outcome = nav::navigate(action, on_trigger, &mut rows);
                if let Some(start) = rows.scrolled_to() {
                    self.scroll_index = start;
                }
                outcome
            }
        };
        match outcome {
            NavOutcome::Focused(i) => {
                trace!(id = self.id, row = i, "focus moved");
                self.target = FocusTarget::Row(i);
            }
            NavOutcome::Select(i) => {
                if let Some(id) = self.options.get(i).map(|o| o.id.clone()) {
                    self.select(&id);
                }
            }
            NavOutcome::Unchanged => {}
        }
    }

    fn visible_rows(&self) -> usize {
        (self.max_height / self.row_height).max(1)
    }

    // Recreates the window as a freshly mounted virtual list would be,
    // starting at the remembered row when allowed.
    fn reset_window(&mut self) {
        let len = self.options.len();
        let top = if self.remember_scroll_position && self.scroll_index < len {
            self.scroll_index
        } else {
            0
        };
        self.window = VirtualWindow::new(len, self.visible_rows(), top);
        if self.render_mode == RenderMode::Virtual {
            self.scroll_index = self.window.start();
        }
    }
}

impl crate::Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.handle_focus()
    }

    /// Blurs and finalizes at once; use [`Model::handle_blur`] when a focus
    /// may follow within the same tick.
    fn blur(&mut self) {
        let msg = self.focus.start_blur();
        self.finish_blur(&msg);
    }

    fn focused(&self) -> bool {
        self.focus.focus_within()
    }
}
