//! Tests for the widget interaction state machine.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::theme::Theme;
use crate::widget::{
    ClickMode, DragMode, Event, MouseButton, Rect, Surface, ValueChange, Widget, WidgetBase,
};

/// A bare widget for exercising the base state machine.
struct TestWidget {
    base: WidgetBase,
}

impl TestWidget {
    fn new(rect: Rect) -> Self {
        Self {
            base: WidgetBase::new(rect, "test"),
        }
    }
}

impl Widget for TestWidget {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn draw(&self, surface: &mut dyn Surface, theme: &Theme) {
        surface.fill_rect(self.rect(), theme.palette.surface);
    }
}

/// Install a callback that records every notification.
fn record(widget: &mut TestWidget) -> Arc<Mutex<Vec<ValueChange>>> {
    let log = Arc::new(Mutex::new(Vec::new()));
    let log_clone = log.clone();
    widget.base.set_callback(move |change| {
        log_clone.lock().push(*change);
    });
    log
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-6
}

// =========================================================================
// Hit testing
// =========================================================================

#[test]
fn test_touches_is_half_open() {
    let widget = TestWidget::new(Rect::new(10, 10, 20, 20));
    assert!(widget.touches(10, 10));
    assert!(widget.touches(29, 29));
    assert!(!widget.touches(30, 15));
    assert!(!widget.touches(15, 30));
}

#[test]
fn test_press_outside_is_not_consumed() {
    let mut widget = TestWidget::new(Rect::new(10, 10, 20, 20));
    widget.base.set_click_mode(ClickMode::Toggle);
    let log = record(&mut widget);

    assert!(!widget.handle(&Event::press(30, 15)));
    assert_eq!(widget.value(), 0.0);
    assert!(!widget.is_pressed());
    assert!(log.lock().is_empty());

    // Same while a press is held: the held press is left exactly as it was
    assert!(widget.handle(&Event::press(12, 14)));
    assert_eq!(widget.value(), 1.0);
    let right_outside = Event::ButtonPress {
        x: 30,
        y: 15,
        button: MouseButton::Right,
    };
    assert!(!widget.handle(&right_outside));
    assert!(!widget.handle(&Event::scroll(40, 40, 1.0)));

    let interaction = widget.widget_base().interaction();
    assert_eq!(interaction.pressed_button(), Some(MouseButton::Left));
    assert_eq!(interaction.last_position(), (12, 14));
    assert_eq!(widget.value(), 1.0);
    assert_eq!(log.lock().len(), 1);
}

/// Negative sizes violate the `w >= 0, h >= 0` precondition. Such a widget
/// covers no point, so it never takes input.
#[test]
fn test_negative_size_is_precondition_violation() {
    let mut widget = TestWidget::new(Rect::new(10, 10, -20, -20));
    widget.base.set_click_mode(ClickMode::Toggle);
    let log = record(&mut widget);

    for (px, py) in [(10, 10), (0, 0), (-5, -5), (5, 15), (-10, -10)] {
        assert!(!widget.touches(px, py));
        assert!(!widget.handle(&Event::press(px, py)));
        assert!(!widget.handle(&Event::scroll(px, py, 1.0)));
    }
    assert!(!widget.is_pressed());
    assert_eq!(widget.value(), 0.0);
    assert!(log.lock().is_empty());
}

// =========================================================================
// Click modes
// =========================================================================

#[test]
fn test_click_mode_none_consumes_without_change() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    let log = record(&mut widget);

    assert!(widget.handle(&Event::press(5, 5)));
    assert!(widget.is_pressed());
    assert_eq!(widget.value(), 0.0);
    assert!(log.lock().is_empty());
}

#[test]
fn test_toggle_flips_and_fires_once() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);
    let log = record(&mut widget);

    assert!(widget.handle(&Event::press(5, 5)));
    assert_eq!(widget.value(), 1.0);
    assert_eq!(log.lock().len(), 1);

    assert!(widget.handle(&Event::release()));
    assert_eq!(widget.value(), 1.0);
    assert_eq!(log.lock().len(), 1);

    assert!(widget.handle(&Event::press(5, 5)));
    assert_eq!(widget.value(), 0.0);
    assert_eq!(log.lock().len(), 2);
    assert_eq!(log.lock()[1].value, 0.0);
}

#[test]
fn test_toggle_threshold() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);

    widget.set_value(0.49);
    widget.handle(&Event::press(5, 5));
    assert_eq!(widget.value(), 1.0);
    widget.handle(&Event::release());

    widget.set_value(0.5);
    widget.handle(&Event::press(5, 5));
    assert_eq!(widget.value(), 0.0);
}

#[test]
fn test_value_from_y() {
    let mut widget = TestWidget::new(Rect::new(0, 100, 10, 50));
    widget.base.set_click_mode(ClickMode::ValueFromY);
    let log = record(&mut widget);

    assert!(widget.handle(&Event::press(5, 125)));
    assert_eq!(widget.value(), 0.5);
    assert_eq!(log.lock().len(), 1);
    widget.handle(&Event::release());

    // Bottom edge is outside the widget and the press is passed on
    assert!(!widget.handle(&Event::press(5, 200)));
    assert_eq!(widget.value(), 0.5);
    assert_eq!(widget.rect().value_from_y(200), 1.0);
}

#[test]
fn test_press_always_fires_even_without_change() {
    let mut widget = TestWidget::new(Rect::new(0, 100, 10, 50));
    widget.base.set_click_mode(ClickMode::ValueFromY);
    widget.set_value(0.5);
    let log = record(&mut widget);

    widget.handle(&Event::press(5, 125));
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn test_momentary_reverts_to_pre_press_value() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Momentary);
    widget.set_value(0.3);
    let log = record(&mut widget);

    assert!(widget.handle(&Event::press(5, 5)));
    assert_eq!(widget.value(), 1.0);

    assert!(widget.handle(&Event::release()));
    assert_eq!(widget.value(), 0.3);

    let values: Vec<f32> = log.lock().iter().map(|c| c.value).collect();
    assert_eq!(values, vec![1.0, 0.3]);
}

#[test]
fn test_momentary_release_without_change_is_silent() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Momentary);
    widget.set_value(1.0);
    let log = record(&mut widget);

    widget.handle(&Event::press(5, 5));
    widget.handle(&Event::release());
    assert_eq!(widget.value(), 1.0);
    assert_eq!(log.lock().len(), 1);
}

// =========================================================================
// Drag
// =========================================================================

#[test]
fn test_vertical_drag() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 200, 200));
    widget.base.set_drag_mode(DragMode::Vertical);
    widget.base.set_scroll_delta_amount(0.01);
    widget.set_value(0.5);
    let log = record(&mut widget);

    assert!(widget.handle(&Event::press(0, 100)));
    assert!(widget.handle(&Event::motion(0, 90)));
    assert!(approx(widget.value(), 0.6));
    assert_eq!(widget.widget_base().interaction().last_position(), (0, 90));
    assert_eq!(log.lock().len(), 1);

    // Incremental: the next step is measured from (0, 90)
    assert!(widget.handle(&Event::motion(0, 85)));
    assert!(approx(widget.value(), 0.65));
}

#[test]
fn test_horizontal_drag_clamps() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 200, 200));
    widget.base.set_drag_mode(DragMode::Horizontal);
    widget.base.set_scroll_delta_amount(0.1);
    widget.set_value(0.9);
    let log = record(&mut widget);

    widget.handle(&Event::press(10, 10));
    widget.handle(&Event::motion(15, 10));
    assert_eq!(widget.value(), 1.0);
    widget.handle(&Event::motion(20, 10));
    assert_eq!(widget.value(), 1.0);

    // Only the step that moved the value fired
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn test_drag_mode_none_consumes_while_pressed() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.set_value(0.4);

    widget.handle(&Event::press(5, 5));
    assert!(widget.handle(&Event::motion(50, 50)));
    assert_eq!(widget.value(), 0.4);
}

#[test]
fn test_motion_without_press_is_not_consumed() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_drag_mode(DragMode::Vertical);
    widget.set_value(0.4);

    assert!(!widget.handle(&Event::motion(5, 0)));
    assert_eq!(widget.value(), 0.4);
    assert_eq!(widget.widget_base().interaction().last_position(), (0, 0));
}

#[test]
fn test_drag_continues_outside_bounds() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_drag_mode(DragMode::Vertical);
    widget.base.set_scroll_delta_amount(0.01);

    widget.handle(&Event::press(5, 5));
    assert!(widget.handle(&Event::motion(5, -45)));
    assert!(approx(widget.value(), 0.5));
}

// =========================================================================
// Release
// =========================================================================

#[test]
fn test_orphan_release_is_not_consumed() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    assert!(!widget.handle(&Event::release()));
}

#[test]
fn test_release_of_other_button_keeps_press() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.handle(&Event::press(5, 5));

    let other = Event::ButtonRelease {
        button: MouseButton::Right,
    };
    assert!(widget.handle(&other));
    assert!(widget.is_pressed());
    assert_eq!(widget.widget_base().mouse_button(), 1);

    assert!(widget.handle(&Event::release()));
    assert!(!widget.is_pressed());
    assert_eq!(widget.widget_base().mouse_button(), 0);
}

#[test]
fn test_second_press_is_ignored() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);
    widget.handle(&Event::press(5, 5));

    let right = Event::ButtonPress {
        x: 6,
        y: 6,
        button: MouseButton::Right,
    };
    assert!(widget.handle(&right));
    assert_eq!(widget.value(), 1.0);
    assert_eq!(widget.widget_base().interaction().last_position(), (5, 5));
    assert_eq!(
        widget.widget_base().interaction().pressed_button(),
        Some(MouseButton::Left)
    );
}

// =========================================================================
// Scroll
// =========================================================================

#[test]
fn test_scroll_steps_value() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_scroll_delta_amount(0.05);
    widget.set_value(0.5);
    let log = record(&mut widget);

    assert!(widget.handle(&Event::scroll(5, 5, 2.0)));
    assert!(approx(widget.value(), 0.6));
    assert_eq!(log.lock().len(), 1);
}

#[test]
fn test_scroll_invert_floors_at_zero() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_scroll_delta_amount(0.05);
    widget.base.set_scroll_invert(true);
    widget.set_value(0.07);
    let log = record(&mut widget);

    assert!(widget.handle(&Event::scroll(5, 5, 1.0)));
    assert!(approx(widget.value(), 0.02));
    assert!(widget.handle(&Event::scroll(5, 5, 1.0)));
    assert_eq!(widget.value(), 0.0);

    // Already at the floor: consumed, no notification
    assert!(widget.handle(&Event::scroll(5, 5, 1.0)));
    assert_eq!(log.lock().len(), 2);
}

#[test]
fn test_scroll_disabled_or_outside() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.set_value(0.5);

    assert!(!widget.handle(&Event::scroll(20, 5, 1.0)));
    widget.base.set_scroll_disable(true);
    assert!(!widget.handle(&Event::scroll(5, 5, 1.0)));
    assert_eq!(widget.value(), 0.5);
}

// =========================================================================
// Visibility, no_handle, other events
// =========================================================================

#[test]
fn test_invisible_widget_ignores_everything() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);
    widget.hide();
    let log = record(&mut widget);

    assert!(!widget.handle(&Event::press(5, 5)));
    assert!(!widget.handle(&Event::scroll(5, 5, 1.0)));
    assert!(!widget.handle(&Event::motion(5, 5)));
    assert!(!widget.handle(&Event::release()));
    assert_eq!(widget.value(), 0.0);
    assert!(log.lock().is_empty());
}

#[test]
fn test_hide_ends_press() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Momentary);
    widget.handle(&Event::press(5, 5));
    assert!(widget.is_pressed());

    widget.hide();
    assert!(!widget.is_pressed());
    assert_eq!(widget.value(), 1.0);

    widget.show();
    assert!(!widget.handle(&Event::release()));
}

#[test]
fn test_no_handle_passes_everything() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_no_handle(true);

    assert!(!widget.handle(&Event::press(5, 5)));
    assert!(!widget.handle(&Event::scroll(5, 5, 1.0)));
}

#[test]
fn test_other_events_are_never_consumed() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.handle(&Event::press(5, 5));

    for event in [
        Event::KeyPress { keycode: 32 },
        Event::KeyRelease { keycode: 32 },
        Event::Enter,
        Event::Leave,
        Event::Expose,
    ] {
        assert!(!widget.handle(&event));
    }
    assert!(widget.is_pressed());
}

// =========================================================================
// Callback plumbing
// =========================================================================

#[test]
fn test_set_value_does_not_fire() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    let log = record(&mut widget);

    widget.set_value(0.75);
    widget.set_value(2.0);
    assert_eq!(widget.value(), 2.0);
    assert!(log.lock().is_empty());
}

#[test]
fn test_set_callback_replaces_previous() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);
    let first = record(&mut widget);
    let second = record(&mut widget);

    widget.handle(&Event::press(5, 5));
    assert!(first.lock().is_empty());
    assert_eq!(second.lock().len(), 1);
    assert_eq!(widget.base.value_changed.connection_count(), 1);
}

#[test]
fn test_extra_listeners_survive_callback_swap() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);

    let seen = Arc::new(Mutex::new(0));
    let seen_clone = seen.clone();
    widget.base.value_changed.connect(move |_| {
        *seen_clone.lock() += 1;
    });
    record(&mut widget);
    widget.base.clear_callback();

    widget.handle(&Event::press(5, 5));
    assert_eq!(*seen.lock(), 1);
}

#[test]
fn test_change_serial_counts_interaction_only() {
    let mut widget = TestWidget::new(Rect::new(0, 0, 10, 10));
    widget.base.set_click_mode(ClickMode::Toggle);

    widget.set_value(0.2);
    assert_eq!(widget.widget_base().change_serial(), 0);
    widget.handle(&Event::press(5, 5));
    assert_eq!(widget.widget_base().change_serial(), 1);
}
