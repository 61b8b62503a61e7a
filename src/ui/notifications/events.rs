// SPDX-License-Identifier: MPL-2.0
//! Observable stack state for the rendering layer.

use super::item::ItemId;

/// Display state of the whole stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    #[must_use]
    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Why an item left the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    /// The item fired its removal signal, or the host dismissed it.
    Requested,
    /// Dropped by the eviction pass after an insertion.
    Evicted,
    /// Explicit close-all.
    ClosedAll,
}

/// A state change the rendering layer may animate.
///
/// Only transitions are recorded: showing an already shown stack does not
/// produce a second [`StackEvent::Shown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackEvent {
    Shown,
    Hidden,
    Inserted(ItemId),
    Removed { id: ItemId, reason: RemovalReason },
}
