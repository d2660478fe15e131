//! Integer widget geometry.

/// A widget rectangle in pixel units: top-left corner plus size.
///
/// Width and height are expected to be non-negative. A negative size is a
/// caller programming error; such a rectangle simply never contains a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width.
    pub w: i32,
    /// Height.
    pub h: i32,
}

impl Rect {
    /// A zero-sized rectangle at the origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Create a new rectangle.
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge (exclusive), saturating at `i32::MAX`.
    #[inline]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    /// Bottom edge (exclusive), saturating at `i32::MAX`.
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    /// Check if a point lies inside the rectangle.
    ///
    /// The left and top edges are inclusive, the right and bottom edges are
    /// exclusive: `x <= px < x + w` and `y <= py < y + h`.
    #[inline]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Map a vertical position to a normalized value in `[0.0, 1.0]`.
    ///
    /// The top edge maps to 0.0 and the bottom edge to 1.0; positions outside
    /// the rectangle are clamped. A zero-height rectangle maps everything to 0.0.
    pub fn value_from_y(&self, py: i32) -> f32 {
        if self.h <= 0 {
            return 0.0;
        }
        let offset = i64::from(py) - i64::from(self.y);
        (offset as f32 / self.h as f32).clamp(0.0, 1.0)
    }

    /// Center point in floating-point coordinates.
    pub fn center(&self) -> (f32, f32) {
        (
            self.x as f32 + self.w as f32 / 2.0,
            self.y as f32 + self.h as f32 / 2.0,
        )
    }

    /// Shrink the rectangle by `amount` on every side.
    ///
    /// The size never goes below zero.
    pub fn inset(&self, amount: i32) -> Self {
        Self {
            x: self.x.saturating_add(amount),
            y: self.y.saturating_add(amount),
            w: self.w.saturating_sub(amount.saturating_mul(2)).max(0),
            h: self.h.saturating_sub(amount.saturating_mul(2)).max(0),
        }
    }
}
