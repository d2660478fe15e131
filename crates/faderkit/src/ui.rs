//! The UI context.
//!
//! [`Ui`] owns every widget, group and theme of one control surface. It
//! assigns ids, routes input events to the right widget, forwards value
//! changes of group members to their group, and drives drawing.
//!
//! # Example
//!
//! ```
//! use faderkit::Ui;
//! use faderkit::widget::{Dial, Event, Rect, Widget};
//!
//! let mut ui = Ui::new();
//! let gain = ui.add(Dial::new(Rect::new(0, 0, 40, 40), "Gain"));
//!
//! ui.handle(&Event::scroll(20, 20, 1.0));
//! assert!(ui.widget(gain).is_some_and(|w| w.value() > 0.0));
//! ```

use faderkit_core::logging::{span_names, targets};
use slotmap::SlotMap;

use crate::config::ToolkitConfig;
use crate::theme::{Theme, ThemeId};
use crate::widget::{
    Event, Group, GroupChange, GroupId, GroupMembership, MouseButton, Surface, Widget, WidgetId,
};

/// Owner of widgets, groups and themes, and the event router.
pub struct Ui {
    config: ToolkitConfig,
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
    /// Insertion order; later widgets are drawn on top and see events first.
    order: Vec<WidgetId>,
    groups: SlotMap<GroupId, Group>,
    themes: SlotMap<ThemeId, Theme>,
    default_theme: Theme,
    /// Widgets holding a press, with the button each holds, oldest first.
    grabs: Vec<(MouseButton, WidgetId)>,
    redraw_requested: bool,
}

impl Ui {
    /// Create a context with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ToolkitConfig::default())
    }

    /// Create a context with the given configuration.
    pub fn with_config(config: ToolkitConfig) -> Self {
        let default_theme = config.theme.theme();
        tracing::debug!(target: targets::UI, ?config, "ui created");
        Self {
            config,
            widgets: SlotMap::with_key(),
            order: Vec::new(),
            groups: SlotMap::with_key(),
            themes: SlotMap::with_key(),
            default_theme,
            grabs: Vec::new(),
            redraw_requested: true,
        }
    }

    /// The configuration this context was created with.
    pub fn config(&self) -> &ToolkitConfig {
        &self.config
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Take ownership of a widget and return its id.
    ///
    /// The toolkit-wide scroll settings are applied unless the widget set its
    /// own scroll delta amount. The widget is placed on top of all others.
    pub fn add<W: Widget>(&mut self, widget: W) -> WidgetId {
        let amount = self.config.scroll_delta_amount;
        let invert = self.config.scroll_invert;
        let id = self.widgets.insert_with_key(|id| {
            let mut widget: Box<dyn Widget> = Box::new(widget);
            widget.widget_base_mut().attach(id, amount, invert);
            widget
        });
        self.order.push(id);
        self.redraw_requested = true;
        id
    }

    /// Remove a widget, returning it.
    ///
    /// Its group entry is dropped and any press it held is forgotten.
    pub fn remove(&mut self, id: WidgetId) -> Option<Box<dyn Widget>> {
        let widget = self.widgets.remove(id)?;
        self.order.retain(|&other| other != id);
        if let Some(membership) = widget.widget_base().membership() {
            if let Some(group) = self.groups.get_mut(membership.group) {
                group.remove(id);
            }
        }
        self.grabs.retain(|&(_, holder)| holder != id);
        self.redraw_requested = true;
        tracing::debug!(target: targets::UI, ?id, "widget removed");
        Some(widget)
    }

    /// Get a widget by id.
    pub fn widget(&self, id: WidgetId) -> Option<&dyn Widget> {
        self.widgets.get(id).map(|widget| &**widget)
    }

    /// Get a widget by id, mutably.
    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut dyn Widget> {
        match self.widgets.get_mut(id) {
            Some(widget) => Some(widget.as_mut()),
            None => None,
        }
    }

    /// Get a widget by id as its concrete type.
    pub fn widget_as<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        let widget: &dyn Widget = &**self.widgets.get(id)?;
        widget.as_any().downcast_ref::<T>()
    }

    /// Get a widget by id as its concrete type, mutably.
    pub fn widget_as_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        let widget: &mut dyn Widget = &mut **self.widgets.get_mut(id)?;
        widget.as_any_mut().downcast_mut::<T>()
    }

    /// Widget ids in drawing order.
    pub fn widget_ids(&self) -> &[WidgetId] {
        &self.order
    }

    /// Number of widgets.
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the context holds no widgets.
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// The widget that most recently started a press still in progress.
    pub fn grabbed(&self) -> Option<WidgetId> {
        self.grabs.last().map(|&(_, id)| id)
    }

    /// The widget holding a press of `button`, if any.
    pub fn grabbed_by(&self, button: MouseButton) -> Option<WidgetId> {
        self.grabs
            .iter()
            .find(|&&(held, _)| held == button)
            .map(|&(_, id)| id)
    }

    // =========================================================================
    // Groups
    // =========================================================================

    /// Create an empty group.
    pub fn create_group(&mut self) -> GroupId {
        let id = self.groups.insert(Group::new());
        tracing::debug!(target: targets::UI, ?id, "group created");
        id
    }

    /// Get a group by id.
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id)
    }

    /// Get a group by id, mutably.
    pub fn group_mut(&mut self, id: GroupId) -> Option<&mut Group> {
        self.groups.get_mut(id)
    }

    /// Delete a group. Its members stay in the context but lose their
    /// membership.
    pub fn remove_group(&mut self, id: GroupId) -> Option<Group> {
        let mut group = self.groups.remove(id)?;
        for member in group.clear() {
            if let Some(widget) = self.widgets.get_mut(member) {
                widget.widget_base_mut().set_membership(None);
            }
        }
        tracing::debug!(target: targets::UI, ?id, "group removed");
        Some(group)
    }

    /// Put a widget into a group under `item_number`.
    ///
    /// A widget belongs to at most one group; adding it to another group
    /// moves it. Returns `false` if either id is unknown.
    pub fn add_to_group(&mut self, widget: WidgetId, group: GroupId, item_number: i32) -> bool {
        if !self.groups.contains_key(group) {
            return false;
        }
        let Some(target) = self.widgets.get_mut(widget) else {
            return false;
        };

        let base = target.widget_base_mut();
        if let Some(previous) = base.membership() {
            if previous.group != group {
                if let Some(old) = self.groups.get_mut(previous.group) {
                    old.remove(widget);
                }
            }
        }
        base.set_membership(Some(GroupMembership { group, item_number }));

        if let Some(group) = self.groups.get_mut(group) {
            group.add(widget, item_number);
        }
        true
    }

    /// Take a widget out of its group, returning the item number it had.
    pub fn remove_from_group(&mut self, widget: WidgetId) -> Option<i32> {
        let base = self.widgets.get_mut(widget)?.widget_base_mut();
        let membership = base.membership()?;
        base.set_membership(None);
        self.groups.get_mut(membership.group)?.remove(widget)
    }

    // =========================================================================
    // Themes
    // =========================================================================

    /// Store a theme and return its handle.
    pub fn add_theme(&mut self, theme: Theme) -> ThemeId {
        self.themes.insert(theme)
    }

    /// Get a stored theme.
    pub fn theme(&self, id: ThemeId) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// The theme used for widgets without one of their own.
    pub fn default_theme(&self) -> &Theme {
        &self.default_theme
    }

    /// Replace the default theme.
    pub fn set_default_theme(&mut self, theme: Theme) {
        self.default_theme = theme;
        self.redraw_requested = true;
    }

    /// Assign a stored theme to a widget, or `None` to use the default.
    ///
    /// Returns `false` if the widget or theme is unknown.
    pub fn set_widget_theme(&mut self, widget: WidgetId, theme: Option<ThemeId>) -> bool {
        if theme.is_some_and(|id| !self.themes.contains_key(id)) {
            return false;
        }
        match self.widgets.get_mut(widget) {
            Some(target) => {
                target.widget_base_mut().set_theme(theme);
                true
            }
            None => false,
        }
    }

    fn resolve_theme(&self, widget: &dyn Widget) -> &Theme {
        widget
            .widget_base()
            .theme()
            .and_then(|id| self.themes.get(id))
            .unwrap_or(&self.default_theme)
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Route an event, returning `true` if a widget consumed it.
    ///
    /// A release goes to the widget holding that button. Motion goes to the
    /// widget that most recently started a press. Otherwise the event is
    /// offered to widgets from top-most to bottom-most until one consumes it.
    pub fn handle(&mut self, event: &Event) -> bool {
        let _span =
            tracing::trace_span!(target: targets::UI, span_names::DISPATCH, kind = ?event.kind())
                .entered();

        let preferred = match *event {
            Event::ButtonRelease { button } => self.grabbed_by(button).or_else(|| self.grabbed()),
            Event::Motion { .. } => self.grabbed(),
            _ => None,
        };
        if let Some(id) = preferred {
            if self.dispatch_to(id, event) {
                return true;
            }
        }

        let candidates: Vec<WidgetId> = self.order.iter().rev().copied().collect();
        for id in candidates {
            if Some(id) == preferred {
                continue;
            }
            if self.dispatch_to(id, event) {
                return true;
            }
        }

        tracing::trace!(target: targets::UI, "event not consumed");
        false
    }

    fn dispatch_to(&mut self, id: WidgetId, event: &Event) -> bool {
        let Some(widget) = self.widgets.get_mut(id) else {
            return false;
        };

        let serial = widget.widget_base().change_serial();
        let consumed = widget.handle(event);

        let base = widget.widget_base();
        let changed = base.change_serial() != serial;
        let membership = base.membership();
        let value = base.value();
        let pressed = base.interaction().pressed_button();

        self.track_grab(id, pressed);
        if !consumed {
            return false;
        }
        tracing::trace!(target: targets::UI, ?id, changed, "event consumed");

        if let Some(membership) = membership.filter(|_| changed) {
            if let Some(group) = self.groups.get(membership.group) {
                group.member_changed.emit(GroupChange {
                    widget: id,
                    item_number: membership.item_number,
                    value,
                });
            }
        }
        true
    }

    /// Keep the grab list in step with a widget's press state.
    fn track_grab(&mut self, id: WidgetId, pressed: Option<MouseButton>) {
        match pressed {
            Some(button) => {
                if !self.grabs.iter().any(|&(_, holder)| holder == id) {
                    self.grabs.push((button, id));
                }
            }
            None => self.grabs.retain(|&(_, holder)| holder != id),
        }
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw every visible widget in insertion order and clear redraw flags.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        {
            let _span = tracing::trace_span!(target: targets::UI, span_names::DRAW).entered();
            for &id in &self.order {
                let Some(widget) = self.widgets.get(id) else {
                    continue;
                };
                if widget.is_visible() {
                    widget.draw(surface, self.resolve_theme(widget.as_ref()));
                }
            }
        }
        self.take_redraw();
    }

    /// Whether anything needs to be redrawn.
    pub fn needs_redraw(&self) -> bool {
        self.redraw_requested
            || self
                .widgets
                .values()
                .any(|widget| widget.widget_base().needs_redraw())
    }

    /// Clear all redraw requests, returning whether there were any.
    pub fn take_redraw(&mut self) -> bool {
        let mut needed = std::mem::take(&mut self.redraw_requested);
        for widget in self.widgets.values_mut() {
            needed |= widget.widget_base_mut().take_redraw();
        }
        needed
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Ui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ui")
            .field("widgets", &self.widgets.len())
            .field("groups", &self.groups.len())
            .field("themes", &self.themes.len())
            .field("grabs", &self.grabs)
            .finish()
    }
}

// Ensure Ui is Send + Sync
static_assertions::assert_impl_all!(Ui: Send, Sync);
