//! Widget groups.
//!
//! A [`Group`] is a non-visual index of widgets keyed by an integer item
//! number. It never owns its members and it imposes no policy: there is no
//! built-in mutual exclusion. Callers that want radio-button behavior connect
//! to [`Group::member_changed`] and adjust the other members themselves.
//!
//! # Example
//!
//! ```
//! use faderkit::Ui;
//! use faderkit::widget::{Button, Rect};
//!
//! let mut ui = Ui::new();
//! let group = ui.create_group();
//!
//! let a = ui.add(Button::new(Rect::new(0, 0, 20, 20), "A"));
//! let b = ui.add(Button::new(Rect::new(20, 0, 20, 20), "B"));
//! ui.add_to_group(a, group, 1);
//! ui.add_to_group(b, group, 2);
//!
//! assert_eq!(ui.group(group).and_then(|g| g.item(2)), Some(b));
//! ```

use faderkit_core::Signal;
use slotmap::new_key_type;

use super::base::WidgetId;

new_key_type! {
    /// Identifies a [`Group`] owned by a [`Ui`](crate::Ui).
    pub struct GroupId;
}

/// A widget's back-reference to the group it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GroupMembership {
    /// The group.
    pub group: GroupId,
    /// The widget's item number within the group.
    pub item_number: i32,
}

/// Payload of [`Group::member_changed`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupChange {
    /// The member whose value changed.
    pub widget: WidgetId,
    /// The member's item number.
    pub item_number: i32,
    /// The new value.
    pub value: f32,
}

/// A non-owning index of widgets by item number.
pub struct Group {
    /// Members in insertion order.
    members: Vec<(WidgetId, i32)>,

    /// Signal emitted when a member's value changes through interaction.
    pub member_changed: Signal<GroupChange>,
}

impl Group {
    /// Create an empty group.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            member_changed: Signal::new(),
        }
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Record `widget` under `item_number`.
    ///
    /// Item numbers are not required to be unique. Adding a widget that is
    /// already a member updates its number and keeps its position.
    pub fn add(&mut self, widget: WidgetId, item_number: i32) {
        match self.members.iter_mut().find(|(id, _)| *id == widget) {
            Some(entry) => entry.1 = item_number,
            None => self.members.push((widget, item_number)),
        }
    }

    /// Remove a widget from the group.
    ///
    /// Returns the item number it had, or `None` if it was not a member.
    pub fn remove(&mut self, widget: WidgetId) -> Option<i32> {
        let index = self.members.iter().position(|(id, _)| *id == widget)?;
        Some(self.members.remove(index).1)
    }

    /// The first member added with `item_number`.
    pub fn item(&self, item_number: i32) -> Option<WidgetId> {
        self.members
            .iter()
            .find(|(_, n)| *n == item_number)
            .map(|(id, _)| *id)
    }

    /// The item number of a member.
    pub fn item_number(&self, widget: WidgetId) -> Option<i32> {
        self.members
            .iter()
            .find(|(id, _)| *id == widget)
            .map(|(_, n)| *n)
    }

    /// All members in insertion order.
    pub fn members(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.members.iter().map(|(id, _)| *id)
    }

    /// Check if a widget is a member.
    pub fn contains(&self, widget: WidgetId) -> bool {
        self.members.iter().any(|(id, _)| *id == widget)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn clear(&mut self) -> Vec<WidgetId> {
        self.members.drain(..).map(|(id, _)| id).collect()
    }
}

impl Default for Group {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Group {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Group")
            .field("members", &self.members)
            .finish()
    }
}

// Ensure Group is Send + Sync
static_assertions::assert_impl_all!(Group: Send, Sync);
