/// The scalar value carried by every widget.
///
/// By convention the value is normalized to `[0.0, 1.0]`. Programmatic sets
/// are stored verbatim; only interaction steps clamp.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValueModel {
    value: f32,
}

impl ValueModel {
    /// Create a model holding `value`.
    pub fn new(value: f32) -> Self {
        Self { value }
    }

    /// The current value.
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Store a value without clamping.
    #[inline]
    pub fn set(&mut self, value: f32) {
        self.value = value;
    }

    /// Add `delta` and clamp the result to `[0.0, 1.0]`.
    ///
    /// Returns `true` if the stored value changed.
    pub fn step(&mut self, delta: f32) -> bool {
        self.replace((self.value + delta).clamp(0.0, 1.0))
    }

    /// Store `value`, returning `true` if it differs from the previous one.
    pub(crate) fn replace(&mut self, value: f32) -> bool {
        let changed = self.value != value;
        self.value = value;
        changed
    }
}
