//! Slider widget implementation.

use crate::theme::Theme;
use crate::widget::{ClickMode, DragMode, Rect, Surface, Widget, WidgetBase};

/// Slider orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Travels top to bottom.
    #[default]
    Vertical,
    /// Travels left to right.
    Horizontal,
}

/// A linear fader.
///
/// A vertical slider jumps to the pressed position (top is 0.0, bottom is
/// 1.0) and its fill grows down from the top edge. After the jump it follows
/// [`DragMode::Vertical`] like a dial: dragging up raises the value, so the
/// fill edge moves away from the pointer during a drag. Use a [`Dial`] or a
/// horizontal slider when the pointer has to stay on the fill edge.
///
/// A horizontal slider only follows horizontal drags; its fill grows from the
/// left edge, which keeps press and drag in the same direction.
///
/// [`Dial`]: super::Dial
pub struct Slider {
    base: WidgetBase,
    orientation: Orientation,
}

impl Slider {
    /// Create a slider with the given orientation.
    pub fn new(rect: Rect, label: impl Into<String>, orientation: Orientation) -> Self {
        let mut base = WidgetBase::new(rect, label);
        match orientation {
            Orientation::Vertical => {
                base.set_click_mode(ClickMode::ValueFromY);
                base.set_drag_mode(DragMode::Vertical);
            }
            Orientation::Horizontal => {
                base.set_drag_mode(DragMode::Horizontal);
            }
        }
        Self { base, orientation }
    }

    /// Create a vertical slider.
    pub fn vertical(rect: Rect, label: impl Into<String>) -> Self {
        Self::new(rect, label, Orientation::Vertical)
    }

    /// Create a horizontal slider.
    pub fn horizontal(rect: Rect, label: impl Into<String>) -> Self {
        Self::new(rect, label, Orientation::Horizontal)
    }

    /// Set the initial value using builder pattern.
    pub fn with_value(mut self, value: f32) -> Self {
        self.base.set_value(value);
        self
    }

    /// The orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Rectangle covered by the filled part of the track.
    fn fill_rect(&self) -> Rect {
        let rect = self.rect();
        let value = self.value().clamp(0.0, 1.0);
        match self.orientation {
            Orientation::Vertical => {
                let filled = (rect.h as f32 * value).round() as i32;
                Rect::new(rect.x, rect.y, rect.w, filled)
            }
            Orientation::Horizontal => {
                let filled = (rect.w as f32 * value).round() as i32;
                Rect::new(rect.x, rect.y, filled, rect.h)
            }
        }
    }
}

impl Widget for Slider {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        let palette = &theme.palette;
        let rect = self.rect();

        surface.fill_rect(rect, palette.surface);
        surface.fill_rect(self.fill_rect(), palette.highlight);
        surface.stroke_rect(rect, palette.border, 1.0);
    }
}

// Ensure Slider is Send + Sync
static_assertions::assert_impl_all!(Slider: Send, Sync);
