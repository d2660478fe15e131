//! Dial widget implementation.
//!
//! This module provides [`Dial`], a rotary control. Dragging up turns it
//! clockwise, dragging down turns it back; the scroll wheel works too.
//!
//! # Example
//!
//! ```
//! use faderkit::widget::{Dial, Rect, Widget};
//!
//! let mut cutoff = Dial::new(Rect::new(0, 0, 48, 48), "Cutoff").with_value(0.5);
//!
//! cutoff.widget_base_mut().set_callback(|change| {
//!     println!("cutoff: {}", change.value);
//! });
//! ```

use std::f32::consts::PI;

use crate::theme::Theme;
use crate::widget::{DragMode, Rect, Surface, Widget, WidgetBase};

/// Start angle in radians (7 o'clock position, 135 degrees clockwise from 3 o'clock).
const START_ANGLE: f32 = PI * 0.75;
/// Total arc span (270 degrees in radians).
const ARC_SPAN: f32 = PI * 1.5;

/// A rotary knob.
pub struct Dial {
    base: WidgetBase,
}

impl Dial {
    /// Create a dial at value 0.0.
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        let mut base = WidgetBase::new(rect, label);
        base.set_drag_mode(DragMode::Vertical);
        Self { base }
    }

    /// Set the initial value using builder pattern.
    pub fn with_value(mut self, value: f32) -> Self {
        self.base.set_value(value);
        self
    }

    /// Set the value change per scroll unit and per dragged pixel using
    /// builder pattern.
    pub fn with_scroll_delta_amount(mut self, amount: f32) -> Self {
        self.base.set_scroll_delta_amount(amount);
        self
    }

    /// Angle of the value indicator, in radians.
    pub fn indicator_angle(&self) -> f32 {
        START_ANGLE + ARC_SPAN * self.value().clamp(0.0, 1.0)
    }

    fn radius(&self) -> f32 {
        let rect = self.rect();
        rect.w.min(rect.h) as f32 / 2.0
    }
}

impl Widget for Dial {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        let palette = &theme.palette;
        let (cx, cy) = self.rect().center();
        let radius = self.radius();

        // Track, then the filled portion on top
        surface.fill_arc(cx, cy, radius, START_ANGLE, START_ANGLE + ARC_SPAN, palette.surface);
        surface.fill_arc(
            cx,
            cy,
            radius,
            START_ANGLE,
            self.indicator_angle(),
            palette.highlight,
        );

        let rect = self.rect();
        surface.text(rect.x, rect.bottom(), self.label(), palette.text_secondary);
    }
}

// Ensure Dial is Send + Sync
static_assertions::assert_impl_all!(Dial: Send, Sync);
