//! Click, drag and scroll state for a widget.

use super::events::MouseButton;

/// Value change applied per scroll unit and per dragged pixel when nothing
/// else is configured.
pub const DEFAULT_SCROLL_DELTA_AMOUNT: f32 = 0.1;

/// How a button press changes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClickMode {
    /// A press does not change the value.
    #[default]
    None,
    /// The value is 1.0 while the button is held and restored on release.
    Momentary,
    /// Each press flips the value between 0.0 and 1.0.
    Toggle,
    /// The value is taken from the vertical press position inside the widget.
    ValueFromY,
}

/// How pointer motion with a button held changes the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragMode {
    /// Motion does not change the value.
    #[default]
    None,
    /// Moving up increases the value.
    Vertical,
    /// Moving right increases the value.
    Horizontal,
}

/// Per-widget interaction configuration and press bookkeeping.
///
/// `pressed_button` is the only record of a press in progress. While it is
/// `Some`, `(m_x, m_y)` hold the last pointer position seen during the press.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    click_mode: ClickMode,
    drag_mode: DragMode,
    scroll_disable: bool,
    scroll_invert: bool,
    scroll_delta_amount: f32,
    scroll_delta_overridden: bool,
    pressed_button: Option<MouseButton>,
    m_x: i32,
    m_y: i32,
    rest_value: Option<f32>,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            click_mode: ClickMode::None,
            drag_mode: DragMode::None,
            scroll_disable: false,
            scroll_invert: false,
            scroll_delta_amount: DEFAULT_SCROLL_DELTA_AMOUNT,
            scroll_delta_overridden: false,
            pressed_button: None,
            m_x: 0,
            m_y: 0,
            rest_value: None,
        }
    }
}

impl InteractionState {
    /// Create the default state: no click or drag behavior, scrolling enabled.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Configuration =====

    /// Get the click mode.
    pub fn click_mode(&self) -> ClickMode {
        self.click_mode
    }

    /// Set the click mode.
    pub fn set_click_mode(&mut self, mode: ClickMode) {
        self.click_mode = mode;
    }

    /// Get the drag mode.
    pub fn drag_mode(&self) -> DragMode {
        self.drag_mode
    }

    /// Set the drag mode.
    pub fn set_drag_mode(&mut self, mode: DragMode) {
        self.drag_mode = mode;
    }

    /// Whether scroll events are ignored.
    pub fn scroll_disable(&self) -> bool {
        self.scroll_disable
    }

    /// Ignore (or stop ignoring) scroll events.
    pub fn set_scroll_disable(&mut self, disable: bool) {
        self.scroll_disable = disable;
    }

    /// Whether the scroll direction is flipped.
    pub fn scroll_invert(&self) -> bool {
        self.scroll_invert
    }

    /// Flip the scroll direction.
    pub fn set_scroll_invert(&mut self, invert: bool) {
        self.scroll_invert = invert;
    }

    /// Value change per scroll unit and per dragged pixel.
    pub fn scroll_delta_amount(&self) -> f32 {
        self.scroll_delta_amount
    }

    /// Set the value change per scroll unit and per dragged pixel.
    ///
    /// An explicit setting wins over the toolkit-wide default applied when the
    /// widget is added to a [`Ui`](crate::Ui).
    pub fn set_scroll_delta_amount(&mut self, amount: f32) {
        self.scroll_delta_amount = amount;
        self.scroll_delta_overridden = true;
    }

    /// Apply a toolkit-wide default unless the amount was set explicitly.
    pub(crate) fn apply_default_scroll_delta(&mut self, amount: f32) {
        if !self.scroll_delta_overridden {
            self.scroll_delta_amount = amount;
        }
    }

    // ===== Press bookkeeping =====

    /// The button currently held, if a press is in progress.
    pub fn pressed_button(&self) -> Option<MouseButton> {
        self.pressed_button
    }

    /// Whether a press is in progress.
    pub fn is_pressed(&self) -> bool {
        self.pressed_button.is_some()
    }

    /// Last pointer position recorded during the current press.
    pub fn last_position(&self) -> (i32, i32) {
        (self.m_x, self.m_y)
    }

    /// Value to restore when a momentary press ends.
    pub(crate) fn rest_value(&self) -> Option<f32> {
        self.rest_value
    }

    pub(crate) fn set_rest_value(&mut self, value: f32) {
        self.rest_value = Some(value);
    }

    /// Record the start of a press.
    pub fn begin_press(&mut self, button: MouseButton, px: i32, py: i32) {
        self.pressed_button = Some(button);
        self.m_x = px;
        self.m_y = py;
        self.rest_value = None;
    }

    /// Clear the press, returning the value saved by a momentary press.
    pub fn end_press(&mut self) -> Option<f32> {
        self.pressed_button = None;
        self.rest_value.take()
    }

    /// Move the tracked pointer to `(px, py)`.
    ///
    /// Returns the motion since the previous tracked position.
    pub fn track(&mut self, px: i32, py: i32) -> (i32, i32) {
        let delta = (px.saturating_sub(self.m_x), py.saturating_sub(self.m_y));
        self.m_x = px;
        self.m_y = py;
        delta
    }

    /// Value delta produced by pointer motion `(dx, dy)` under the drag mode.
    ///
    /// Screen y grows downward, so moving up yields a positive vertical delta.
    pub fn drag_delta(&self, dx: i32, dy: i32) -> Option<f32> {
        match self.drag_mode {
            DragMode::None => None,
            DragMode::Vertical => Some(-(dy as f32) * self.scroll_delta_amount),
            DragMode::Horizontal => Some(dx as f32 * self.scroll_delta_amount),
        }
    }

    /// Value delta produced by a scroll of `delta` units.
    pub fn scroll_delta(&self, delta: f32) -> f32 {
        let effective = if self.scroll_invert { -delta } else { delta };
        effective * self.scroll_delta_amount
    }
}
