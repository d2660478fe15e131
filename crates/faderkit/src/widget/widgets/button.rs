//! Button widget implementation.
//!
//! # Example
//!
//! ```
//! use faderkit::widget::{Button, Event, Rect, Widget};
//!
//! let mut record = Button::new(Rect::new(0, 0, 60, 20), "Record").with_toggle(true);
//!
//! record.handle(&Event::press(10, 10));
//! record.handle(&Event::release());
//! assert!(record.is_on());
//! ```

use crate::theme::Theme;
use crate::widget::{ClickMode, Rect, Surface, Widget, WidgetBase};

/// A push button.
///
/// By default the button is momentary: its value is 1.0 while held and
/// returns to its previous value on release. A toggle button flips between
/// 0.0 and 1.0 on every press.
pub struct Button {
    base: WidgetBase,
}

impl Button {
    /// Create a momentary button.
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(rect, label);
        base.set_click_mode(ClickMode::Momentary);
        base.set_scroll_disable(true);
        Self { base }
    }

    /// Set whether the button toggles, using builder pattern.
    pub fn with_toggle(mut self, toggle: bool) -> Self {
        self.set_toggle(toggle);
        self
    }

    /// Switch between toggle and momentary behavior.
    pub fn set_toggle(&mut self, toggle: bool) {
        let mode = if toggle {
            ClickMode::Toggle
        } else {
            ClickMode::Momentary
        };
        self.base.set_click_mode(mode);
    }

    /// Whether the button toggles.
    pub fn is_toggle(&self) -> bool {
        self.base.click_mode() == ClickMode::Toggle
    }

    /// Whether the button currently reads as "on".
    pub fn is_on(&self) -> bool {
        self.base.value() >= 0.5
    }
}

impl Widget for Button {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        let rect = self.rect();
        let palette = &theme.palette;
        let face = if self.is_on() {
            palette.highlight
        } else {
            palette.surface
        };

        surface.fill_rect(rect, face);
        surface.stroke_rect(rect, palette.border, 1.0);
        surface.text(rect.x + 4, rect.y + 4, self.label(), palette.text);
    }
}

// Ensure Button is Send + Sync
static_assertions::assert_impl_all!(Button: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{DrawCommand, DrawList, Event};

    #[test]
    fn test_button_defaults() {
        let button = Button::new(Rect::new(0, 0, 10, 10), "Play");
        assert_eq!(button.click_mode(), ClickMode::Momentary);
        assert!(!button.is_toggle());
        assert!(!button.is_on());
    }

    #[test]
    fn test_momentary_restores_on_release() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10), "Tap");

        assert!(button.handle(&Event::press(5, 5)));
        assert!(button.is_on());
        assert!(button.handle(&Event::release()));
        assert!(!button.is_on());
    }

    #[test]
    fn test_toggle_latches() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10), "Mute").with_toggle(true);

        button.handle(&Event::press(5, 5));
        button.handle(&Event::release());
        assert!(button.is_on());

        button.handle(&Event::press(5, 5));
        button.handle(&Event::release());
        assert!(!button.is_on());
    }

    #[test]
    fn test_button_ignores_scroll() {
        let mut button = Button::new(Rect::new(0, 0, 10, 10), "Solo");
        assert!(!button.handle(&Event::scroll(5, 5, 1.0)));
        assert_eq!(button.value(), 0.0);
    }

    #[test]
    fn test_draw_uses_highlight_when_on() {
        let theme = Theme::dark();
        let mut button = Button::new(Rect::new(0, 0, 10, 10), "Arm");
        button.set_value(1.0);

        let mut list = DrawList::new();
        button.draw(&mut list, &theme);

        assert_eq!(
            list.commands()[0],
            DrawCommand::FillRect {
                rect: Rect::new(0, 0, 10, 10),
                color: theme.palette.highlight,
            }
        );
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Arm"]);
    }
}
