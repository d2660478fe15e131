//! Label widget implementation.

use crate::theme::Theme;
use crate::widget::{Rect, Surface, Widget, WidgetBase};

/// Static text. Takes no pointer input.
pub struct Label {
    base: WidgetBase,
}

impl Label {
    /// Create a label.
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(rect, text);
        base.set_no_handle(true);
        Self { base }
    }
}

impl Widget for Label {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        let rect = self.rect();
        surface.text(rect.x, rect.y, self.label(), theme.palette.text);
    }
}

// Ensure Label is Send + Sync
static_assertions::assert_impl_all!(Label: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{DrawList, Event};

    #[test]
    fn test_label_passes_events_on() {
        let mut label = Label::new(Rect::new(0, 0, 50, 10), "Master");
        assert!(!label.handle(&Event::press(5, 5)));
        assert!(!label.handle(&Event::scroll(5, 5, 1.0)));
        assert!(!label.is_pressed());
    }

    #[test]
    fn test_label_draws_text() {
        let label = Label::new(Rect::new(3, 4, 50, 10), "Master");
        let mut list = DrawList::new();
        label.draw(&mut list, &Theme::light());
        assert_eq!(list.texts().collect::<Vec<_>>(), vec!["Master"]);
    }
}
