//! The `Widget` trait.

use std::any::Any;

use super::base::{WidgetBase, WidgetId};
use super::events::Event;
use super::geometry::Rect;
use super::interaction::{ClickMode, DragMode};
use super::surface::Surface;
use crate::theme::Theme;

/// Upcast helper so boxed widgets can be downcast to their concrete type.
pub trait AsAny: Any {
    /// Borrow as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
    /// Borrow as `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// The core trait for all widgets.
///
/// Implementors embed a [`WidgetBase`] and must provide [`draw`](Self::draw).
/// Everything else has a default that delegates to the base, including
/// [`handle`](Self::handle), which runs the shared interaction state machine.
///
/// # Example
///
/// ```
/// use faderkit::theme::Theme;
/// use faderkit::widget::{Rect, Surface, Widget, WidgetBase};
///
/// struct Meter {
///     base: WidgetBase,
/// }
///
/// impl Widget for Meter {
///     fn widget_base(&self) -> &WidgetBase { &self.base }
///     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
///
///     fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
///         let rect = self.rect();
///         let filled = (rect.h as f32 * self.value()) as i32;
///         surface.fill_rect(rect, theme.palette.background);
///         surface.fill_rect(
///             Rect::new(rect.x, rect.bottom() - filled, rect.w, filled),
///             theme.palette.highlight,
///         );
///     }
/// }
/// ```
pub trait Widget: AsAny + Send + Sync {
    // =========================================================================
    // Required Methods
    // =========================================================================

    /// Get a reference to the widget's base.
    fn widget_base(&self) -> &WidgetBase;

    /// Get a mutable reference to the widget's base.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// Draw the widget onto a surface using the resolved theme.
    fn draw(&self, surface: &mut dyn Surface, theme: &Theme);

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Handle an input event, returning `true` if it was consumed.
    fn handle(&mut self, event: &Event) -> bool {
        self.widget_base_mut().handle(event)
    }

    // =========================================================================
    // Delegates to WidgetBase
    // =========================================================================

    /// The id assigned by the owning `Ui`.
    fn id(&self) -> WidgetId {
        self.widget_base().id()
    }

    /// The widget rectangle.
    fn rect(&self) -> Rect {
        self.widget_base().rect()
    }

    /// Move and resize the widget.
    fn set_rect(&mut self, rect: Rect) {
        self.widget_base_mut().set_rect(rect);
    }

    /// Check whether a point lies inside the widget.
    fn touches(&self, px: i32, py: i32) -> bool {
        self.widget_base().touches(px, py)
    }

    /// The widget label.
    fn label(&self) -> &str {
        self.widget_base().label()
    }

    /// Whether the widget is visible.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Show or hide the widget.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Show the widget.
    fn show(&mut self) {
        self.set_visible(true);
    }

    /// Hide the widget.
    fn hide(&mut self) {
        self.set_visible(false);
    }

    /// The current value.
    fn value(&self) -> f32 {
        self.widget_base().value()
    }

    /// Set the value without notifying listeners.
    fn set_value(&mut self, value: f32) {
        self.widget_base_mut().set_value(value);
    }

    /// Get the click mode.
    fn click_mode(&self) -> ClickMode {
        self.widget_base().click_mode()
    }

    /// Get the drag mode.
    fn drag_mode(&self) -> DragMode {
        self.widget_base().drag_mode()
    }

    /// Whether a press is in progress.
    fn is_pressed(&self) -> bool {
        self.widget_base().interaction().is_pressed()
    }
}
