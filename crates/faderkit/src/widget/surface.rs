//! The drawing boundary.
//!
//! Widgets never rasterize anything themselves. They describe what they look
//! like through a [`Surface`], which a backend implements on top of whatever
//! graphics library it uses. [`DrawList`] is a recording surface for headless
//! use and tests.

use super::geometry::Rect;
use crate::theme::Color;

/// A target that widgets draw onto.
pub trait Surface {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline a rectangle with a line of `width` pixels.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Fill a pie slice centered at `(cx, cy)`.
    ///
    /// Angles are in radians, measured clockwise from the positive x axis.
    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32, color: Color);

    /// Draw a line of text with its top-left corner at `(x, y)`.
    fn text(&mut self, x: i32, y: i32, text: &str, color: Color);
}

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// See [`Surface::fill_rect`].
    FillRect {
        /// Area to fill.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// See [`Surface::stroke_rect`].
    StrokeRect {
        /// Outlined area.
        rect: Rect,
        /// Line color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// See [`Surface::fill_arc`].
    FillArc {
        /// Center x.
        cx: f32,
        /// Center y.
        cy: f32,
        /// Radius.
        radius: f32,
        /// Start angle.
        start: f32,
        /// End angle.
        end: f32,
        /// Fill color.
        color: Color,
    },
    /// See [`Surface::text`].
    Text {
        /// Left edge.
        x: i32,
        /// Top edge.
        y: i32,
        /// The text.
        text: String,
        /// Text color.
        color: Color,
    },
}

/// A surface that records drawing commands instead of executing them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty draw list.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded commands in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// All text strings drawn, in order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for DrawList {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn fill_arc(&mut self, cx: f32, cy: f32, radius: f32, start: f32, end: f32, color: Color) {
        self.commands.push(DrawCommand::FillArc {
            cx,
            cy,
            radius,
            start,
            end,
            color,
        });
    }

    fn text(&mut self, x: i32, y: i32, text: &str, color: Color) {
        self.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.to_owned(),
            color,
        });
    }
}
