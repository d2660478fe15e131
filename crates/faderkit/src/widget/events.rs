//! Input events delivered to widgets.
//!
//! The windowing layer translates its native events into [`Event`] values and
//! hands them to [`Ui::handle`](crate::Ui::handle) one at a time, in the order
//! they occurred. Positions are window coordinates in pixels.

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
    /// Secondary button (usually right).
    Right = 3,
    /// Additional button 1 (e.g., browser back).
    Button4 = 4,
    /// Additional button 2 (e.g., browser forward).
    Button5 = 5,
}

impl MouseButton {
    /// The numeric button identifier used by windowing backends (1-based).
    ///
    /// Zero is never a valid button; it is reserved for "no button pressed".
    pub fn number(self) -> u32 {
        self as u32
    }

    /// Convert a 1-based backend button number.
    pub fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::Left),
            2 => Some(Self::Middle),
            3 => Some(Self::Right),
            4 => Some(Self::Button4),
            5 => Some(Self::Button5),
            _ => None,
        }
    }
}

/// The class an [`Event`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A mouse button went down.
    ButtonPress,
    /// A mouse button went up.
    ButtonRelease,
    /// The pointer moved.
    Motion,
    /// The scroll wheel turned.
    Scroll,
    /// A keyboard key went down.
    KeyPress,
    /// A keyboard key went up.
    KeyRelease,
    /// The pointer entered the window.
    Enter,
    /// The pointer left the window.
    Leave,
    /// The window needs repainting.
    Expose,
}

/// A raw input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A mouse button was pressed at a position.
    ButtonPress {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
        /// The button that was pressed.
        button: MouseButton,
    },
    /// A mouse button was released.
    ButtonRelease {
        /// The button that was released.
        button: MouseButton,
    },
    /// The pointer moved to a new position.
    Motion {
        /// Horizontal position.
        x: i32,
        /// Vertical position.
        y: i32,
    },
    /// The scroll wheel moved while the pointer was at a position.
    Scroll {
        /// Horizontal pointer position.
        x: i32,
        /// Vertical pointer position.
        y: i32,
        /// Scroll amount in wheel units; positive is up/away from the user.
        delta: f32,
    },
    /// A key was pressed.
    KeyPress {
        /// Backend key code.
        keycode: u32,
    },
    /// A key was released.
    KeyRelease {
        /// Backend key code.
        keycode: u32,
    },
    /// The pointer entered the window.
    Enter,
    /// The pointer left the window.
    Leave,
    /// The window needs repainting.
    Expose,
}

impl Event {
    /// The class this event belongs to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ButtonPress { .. } => EventKind::ButtonPress,
            Self::ButtonRelease { .. } => EventKind::ButtonRelease,
            Self::Motion { .. } => EventKind::Motion,
            Self::Scroll { .. } => EventKind::Scroll,
            Self::KeyPress { .. } => EventKind::KeyPress,
            Self::KeyRelease { .. } => EventKind::KeyRelease,
            Self::Enter => EventKind::Enter,
            Self::Leave => EventKind::Leave,
            Self::Expose => EventKind::Expose,
        }
    }

    /// The pointer position carried by the event, if any.
    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            Self::ButtonPress { x, y, .. } | Self::Motion { x, y } | Self::Scroll { x, y, .. } => {
                Some((x, y))
            }
            _ => None,
        }
    }

    /// Shorthand for a left-button press.
    pub fn press(x: i32, y: i32) -> Self {
        Self::ButtonPress {
            x,
            y,
            button: MouseButton::Left,
        }
    }

    /// Shorthand for a left-button release.
    pub fn release() -> Self {
        Self::ButtonRelease {
            button: MouseButton::Left,
        }
    }

    /// Shorthand for a pointer motion.
    pub fn motion(x: i32, y: i32) -> Self {
        Self::Motion { x, y }
    }

    /// Shorthand for a scroll at a position.
    pub fn scroll(x: i32, y: i32, delta: f32) -> Self {
        Self::Scroll { x, y, delta }
    }
}
