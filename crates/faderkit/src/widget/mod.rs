//! Widget system for faderkit.
//!
//! This module provides the widget architecture:
//!
//! - [`Widget`] trait: the base trait for all controls
//! - [`WidgetBase`]: shared state and the interaction state machine
//! - [`Event`]: raw pointer and keyboard input
//! - [`Group`]: non-owning index of widgets by item number
//! - [`Surface`]: the drawing boundary
//!
//! # Interaction model
//!
//! Every widget carries a scalar value, by convention in `[0.0, 1.0]`. Input
//! changes it according to the widget's modes:
//!
//! - a **click mode** decides what a button press does (nothing, momentary,
//!   toggle, or take the value from the vertical press position);
//! - a **drag mode** decides what pointer motion with a button held does;
//! - scrolling adds `delta * scroll_delta_amount`, optionally inverted.
//!
//! Interaction steps clamp the value to `[0.0, 1.0]` and emit
//! [`WidgetBase::value_changed`]. Programmatic [`Widget::set_value`] stores
//! the value verbatim and emits nothing.
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait, providing `draw()`
//! 3. Optionally override `handle()` for custom input behavior
//!
//! See [`Widget`] for a full example.

mod base;
mod events;
mod geometry;
mod group;
mod interaction;
mod surface;
mod traits;
mod value;
pub mod widgets;

#[cfg(test)]
mod tests;

pub use base::{ValueChange, WidgetBase, WidgetId};
pub use events::{Event, EventKind, MouseButton};
pub use geometry::Rect;
pub use group::{Group, GroupChange, GroupId, GroupMembership};
pub use interaction::{ClickMode, DEFAULT_SCROLL_DELTA_AMOUNT, DragMode, InteractionState};
pub use surface::{DrawCommand, DrawList, Surface};
pub use traits::{AsAny, Widget};
pub use value::ValueModel;
pub use widgets::{Button, Dial, Label, List, Orientation, Slider};
