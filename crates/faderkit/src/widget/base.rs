//! Widget base implementation.
//!
//! `WidgetBase` holds the state every widget shares: geometry, label,
//! visibility, the scalar value, interaction configuration and the
//! value-changed signal. It also implements the event state machine that turns
//! raw pointer input into value changes. Concrete widgets embed a `WidgetBase`
//! and delegate to it.

use faderkit_core::logging::targets;
use faderkit_core::{ConnectionId, Signal};
use slotmap::new_key_type;

use super::events::{Event, MouseButton};
use super::geometry::Rect;
use super::group::{GroupId, GroupMembership};
use super::interaction::{ClickMode, DragMode, InteractionState};
use super::value::ValueModel;
use crate::theme::ThemeId;

new_key_type! {
    /// Identifies a widget owned by a [`Ui`](crate::Ui).
    ///
    /// A widget that has not been added to a `Ui` yet carries the null id.
    pub struct WidgetId;
}

/// Payload of the value-changed notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueChange {
    /// The widget whose value changed.
    pub widget: WidgetId,
    /// The new value.
    pub value: f32,
    /// The widget's item number, if it belongs to a group.
    pub item_number: Option<i32>,
}

/// The base implementation for all widgets.
///
/// Widget implementations include this as a field and return it from
/// [`Widget::widget_base`](super::Widget::widget_base).
///
/// # Example
///
/// ```
/// use faderkit::widget::{ClickMode, Event, WidgetBase, Rect};
///
/// let mut base = WidgetBase::new(Rect::new(0, 0, 40, 20), "Mute");
/// base.set_click_mode(ClickMode::Toggle);
///
/// assert!(base.handle(&Event::press(5, 5)));
/// assert_eq!(base.value(), 1.0);
/// ```
pub struct WidgetBase {
    id: WidgetId,
    rect: Rect,
    label: String,
    visible: bool,
    value: ValueModel,
    interaction: InteractionState,
    no_handle: bool,
    theme: Option<ThemeId>,
    membership: Option<GroupMembership>,
    callback: Option<ConnectionId>,
    /// Incremented every time the value changes through interaction.
    change_serial: u64,
    needs_redraw: bool,

    /// Signal emitted when the user changes the value.
    ///
    /// Never emitted for [`set_value`](Self::set_value).
    pub value_changed: Signal<ValueChange>,
}

impl WidgetBase {
    /// Create a new widget base with the given geometry and label.
    ///
    /// The widget starts visible, with value 0.0 and no click or drag
    /// behavior.
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            id: WidgetId::default(),
            rect,
            label: label.into(),
            visible: true,
            value: ValueModel::default(),
            interaction: InteractionState::new(),
            no_handle: false,
            theme: None,
            membership: None,
            callback: None,
            change_serial: 0,
            needs_redraw: true,
            value_changed: Signal::new(),
        }
    }

    /// The id assigned by the owning `Ui`.
    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Called by the `Ui` when the widget is inserted.
    pub(crate) fn attach(&mut self, id: WidgetId, scroll_delta_amount: f32, scroll_invert: bool) {
        self.id = id;
        self.interaction.apply_default_scroll_delta(scroll_delta_amount);
        if scroll_invert {
            self.interaction.set_scroll_invert(true);
        }
        tracing::debug!(target: targets::WIDGET, ?id, label = %self.label, "widget attached");
    }

    // ===== Geometry =====

    /// The widget rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Move and resize the widget.
    pub fn set_rect(&mut self, rect: Rect) {
        if self.rect != rect {
            self.rect = rect;
            self.needs_redraw = true;
        }
    }

    /// Check whether a point lies inside the widget.
    pub fn touches(&self, px: i32, py: i32) -> bool {
        self.rect.contains(px, py)
    }

    /// The label given at construction.
    pub fn label(&self) -> &str {
        &self.label
    }

    // ===== Visibility =====

    /// Whether the widget is visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    ///
    /// Hiding a widget ends any press in progress without touching the value.
    pub fn set_visible(&mut self, visible: bool) {
        if self.visible == visible {
            return;
        }
        self.visible = visible;
        if !visible && self.interaction.is_pressed() {
            self.interaction.end_press();
            tracing::trace!(target: targets::WIDGET, id = ?self.id, "press cancelled by hide");
        }
        self.needs_redraw = true;
    }

    // ===== Value =====

    /// The current value.
    pub fn value(&self) -> f32 {
        self.value.get()
    }

    /// Set the value programmatically.
    ///
    /// The value is stored as given and the value-changed signal is not
    /// emitted.
    pub fn set_value(&mut self, value: f32) {
        self.value.set(value);
        self.needs_redraw = true;
    }

    /// Counter of interaction-driven value changes.
    pub fn change_serial(&self) -> u64 {
        self.change_serial
    }

    // ===== Interaction configuration =====

    /// Read access to the interaction state.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Get the click mode.
    pub fn click_mode(&self) -> ClickMode {
        self.interaction.click_mode()
    }

    /// Set the click mode.
    pub fn set_click_mode(&mut self, mode: ClickMode) {
        self.interaction.set_click_mode(mode);
    }

    /// Get the drag mode.
    pub fn drag_mode(&self) -> DragMode {
        self.interaction.drag_mode()
    }

    /// Set the drag mode.
    pub fn set_drag_mode(&mut self, mode: DragMode) {
        self.interaction.set_drag_mode(mode);
    }

    /// Set the value change per scroll unit and per dragged pixel.
    pub fn set_scroll_delta_amount(&mut self, amount: f32) {
        self.interaction.set_scroll_delta_amount(amount);
    }

    /// Ignore scroll events.
    pub fn set_scroll_disable(&mut self, disable: bool) {
        self.interaction.set_scroll_disable(disable);
    }

    /// Flip the scroll direction.
    pub fn set_scroll_invert(&mut self, invert: bool) {
        self.interaction.set_scroll_invert(invert);
    }

    /// Numeric identifier of the held button, 0 when none is held.
    pub fn mouse_button(&self) -> u32 {
        self.interaction
            .pressed_button()
            .map_or(0, MouseButton::number)
    }

    /// Whether the widget ignores all pointer input.
    pub fn no_handle(&self) -> bool {
        self.no_handle
    }

    /// Make the widget ignore (or accept) pointer input.
    pub fn set_no_handle(&mut self, no_handle: bool) {
        self.no_handle = no_handle;
        if no_handle {
            self.interaction.end_press();
        }
    }

    // ===== Theme and group =====

    /// The theme assigned to this widget, if any.
    pub fn theme(&self) -> Option<ThemeId> {
        self.theme
    }

    /// Assign a theme. Only the handle is stored.
    pub fn set_theme(&mut self, theme: Option<ThemeId>) {
        self.theme = theme;
        self.needs_redraw = true;
    }

    /// The group this widget belongs to, if any.
    pub fn membership(&self) -> Option<GroupMembership> {
        self.membership
    }

    /// The widget's item number within its group.
    pub fn item_number(&self) -> Option<i32> {
        self.membership.map(|m| m.item_number)
    }

    pub(crate) fn set_membership(&mut self, membership: Option<GroupMembership>) {
        self.membership = membership;
    }

    pub(crate) fn is_in_group(&self, group: GroupId) -> bool {
        self.membership.is_some_and(|m| m.group == group)
    }

    // ===== Callback =====

    /// Install the widget's callback, replacing the previous one.
    ///
    /// Any state the closure captures is owned by the caller's closure; the
    /// toolkit only invokes it. Other listeners connected directly to
    /// [`value_changed`](Self::value_changed) are unaffected.
    pub fn set_callback<F>(&mut self, callback: F)
    where
        F: Fn(&ValueChange) + Send + Sync + 'static,
    {
        self.clear_callback();
        self.callback = Some(self.value_changed.connect(callback));
    }

    /// Remove the callback installed with [`set_callback`](Self::set_callback).
    pub fn clear_callback(&mut self) {
        if let Some(id) = self.callback.take() {
            self.value_changed.disconnect(id);
        }
    }

    // ===== Repaint =====

    /// Whether the widget needs to be redrawn.
    pub fn needs_redraw(&self) -> bool {
        self.needs_redraw
    }

    /// Request a redraw.
    pub fn request_redraw(&mut self) {
        self.needs_redraw = true;
    }

    /// Clear the redraw flag, returning its previous state.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    // ===== Event handling =====

    /// Feed an event through the interaction state machine.
    ///
    /// Returns `true` if the event was consumed. Events that are not consumed
    /// never change the value or the press state.
    pub fn handle(&mut self, event: &Event) -> bool {
        match *event {
            Event::ButtonPress { x, y, button } => self.handle_press(x, y, button),
            Event::Motion { x, y } => self.handle_motion(x, y),
            Event::ButtonRelease { button } => self.handle_release(button),
            Event::Scroll { x, y, delta } => self.handle_scroll(x, y, delta),
            Event::KeyPress { .. }
            | Event::KeyRelease { .. }
            | Event::Enter
            | Event::Leave
            | Event::Expose => false,
        }
    }

    fn accepts_pointer_at(&self, px: i32, py: i32) -> bool {
        self.visible && !self.no_handle && self.touches(px, py)
    }

    fn handle_press(&mut self, px: i32, py: i32, button: MouseButton) -> bool {
        if !self.accepts_pointer_at(px, py) {
            return false;
        }
        if self.interaction.is_pressed() {
            tracing::trace!(target: targets::WIDGET, id = ?self.id, ?button, "press ignored, already pressed");
            return true;
        }

        self.interaction.begin_press(button, px, py);
        tracing::trace!(target: targets::WIDGET, id = ?self.id, ?button, px, py, "press");

        let old = self.value.get();
        let new = match self.interaction.click_mode() {
            ClickMode::None => return true,
            ClickMode::Momentary => {
                self.interaction.set_rest_value(old);
                1.0
            }
            ClickMode::Toggle => {
                if old < 0.5 {
                    1.0
                } else {
                    0.0
                }
            }
            ClickMode::ValueFromY => self.rect.value_from_y(py),
        };
        self.value.set(new);
        self.notify();
        true
    }

    fn handle_motion(&mut self, px: i32, py: i32) -> bool {
        if !self.interaction.is_pressed() {
            return false;
        }
        let (dx, dy) = self.interaction.track(px, py);
        if let Some(delta) = self.interaction.drag_delta(dx, dy) {
            if self.value.step(delta) {
                self.notify();
            }
        }
        true
    }

    fn handle_release(&mut self, button: MouseButton) -> bool {
        match self.interaction.pressed_button() {
            None => false,
            Some(pressed) if pressed != button => true,
            Some(_) => {
                let rest = self.interaction.end_press();
                tracing::trace!(target: targets::WIDGET, id = ?self.id, ?button, "release");
                if self.interaction.click_mode() == ClickMode::Momentary {
                    if let Some(rest) = rest {
                        if self.value.replace(rest) {
                            self.notify();
                        }
                    }
                }
                true
            }
        }
    }

    fn handle_scroll(&mut self, px: i32, py: i32, delta: f32) -> bool {
        if self.interaction.scroll_disable() || !self.accepts_pointer_at(px, py) {
            return false;
        }
        if self.value.step(self.interaction.scroll_delta(delta)) {
            self.notify();
        }
        true
    }

    /// Record an interaction-driven change and fire the value-changed signal.
    fn notify(&mut self) {
        self.change_serial += 1;
        self.needs_redraw = true;
        let change = ValueChange {
            widget: self.id,
            value: self.value.get(),
            item_number: self.item_number(),
        };
        tracing::trace!(target: targets::WIDGET, id = ?self.id, value = change.value, "value changed");
        self.value_changed.emit(change);
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("id", &self.id)
            .field("rect", &self.rect)
            .field("label", &self.label)
            .field("visible", &self.visible)
            .field("value", &self.value.get())
            .field("interaction", &self.interaction)
            .field("no_handle", &self.no_handle)
            .field("membership", &self.membership)
            .finish()
    }
}

static_assertions::assert_impl_all!(WidgetBase: Send, Sync);
