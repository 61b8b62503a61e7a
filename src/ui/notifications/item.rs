// SPDX-License-Identifier: MPL-2.0
//! Notification items and the capabilities the stack dispatches on.
//!
//! The stack never inspects concrete card types. An item opts into behavior
//! by answering the capability queries of [`NotificationItem`]:
//!
//! - [`Removable`] items receive a one-shot [`RemovalSignal`] when added.
//! - [`ProgressBearing`] items are protected from eviction and keep the stack
//!   visible while unfinished.
//! - [`ExclusiveExpandable`] items take part in the "only one expanded card"
//!   rule.

use iced::futures::channel::mpsc::UnboundedSender;
use std::fmt;

/// Unique identifier for a notification item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new unique item ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A displayable unit managed by the notification stack.
///
/// Capability queries default to `None`; card types override the ones they
/// support.
pub trait NotificationItem: fmt::Debug {
    /// Stable identity used for membership and removal.
    fn id(&self) -> ItemId;

    /// Short headline shown on the card.
    fn title(&self) -> &str;

    /// Secondary line shown under the title, if any.
    fn detail(&self) -> Option<String> {
        None
    }

    fn as_removable_mut(&mut self) -> Option<&mut dyn Removable> {
        None
    }

    fn as_progress(&self) -> Option<&dyn ProgressBearing> {
        None
    }

    fn as_expandable(&self) -> Option<&dyn ExclusiveExpandable> {
        None
    }

    fn as_expandable_mut(&mut self) -> Option<&mut dyn ExclusiveExpandable> {
        None
    }
}

/// An item that can ask the stack to remove it.
pub trait Removable {
    /// Hands the item the signal it fires to request its own removal.
    ///
    /// Called once per insertion; a previously armed signal is superseded.
    fn arm_removal(&mut self, signal: RemovalSignal);
}

/// An item representing ongoing work.
pub trait ProgressBearing {
    /// `false` while the work is in flight. Queried on every check, never cached.
    fn is_finished(&self) -> bool;
}

/// An item with an expanded state that is mutually exclusive across the stack.
pub trait ExclusiveExpandable {
    fn is_expanded(&self) -> bool;
    fn set_expanded(&mut self, expanded: bool);
}

/// Returns whether the item carries unfinished work.
pub(crate) fn is_unfinished(item: &dyn NotificationItem) -> bool {
    item.as_progress().is_some_and(|progress| !progress.is_finished())
}

/// Returns whether the item is currently expanded.
pub(crate) fn is_expanded(item: &dyn NotificationItem) -> bool {
    item.as_expandable()
        .is_some_and(|expandable| expandable.is_expanded())
}

/// One-shot request for the stack to remove an item.
///
/// Firing consumes the signal. The request reaches the stack through its
/// subscription as [`Message::RemovalRequested`](super::NotificationMessage),
/// or earlier if the host calls `process_removal_requests`. A request for an
/// item that already left the stack, or that was re-armed by a later
/// insertion, is ignored.
pub struct RemovalSignal {
    item: ItemId,
    arming: u64,
    sender: UnboundedSender<RemovalRequest>,
}

/// A fired [`RemovalSignal`] on its way to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalRequest {
    pub(crate) item: ItemId,
    pub(crate) arming: u64,
}

impl RemovalRequest {
    /// The item asking to be removed.
    #[must_use]
    pub fn item(&self) -> ItemId {
        self.item
    }
}

impl RemovalSignal {
    pub(crate) fn new(
        item: ItemId,
        arming: u64,
        sender: UnboundedSender<RemovalRequest>,
    ) -> Self {
        Self {
            item,
            arming,
            sender,
        }
    }

    /// The item this signal removes.
    #[must_use]
    pub fn item(&self) -> ItemId {
        self.item
    }

    /// Requests removal.
    pub fn fire(self) {
        let request = RemovalRequest {
            item: self.item,
            arming: self.arming,
        };
        // A closed channel means the stack is gone, nothing left to remove from.
        if self.sender.unbounded_send(request).is_err() {
            tracing::trace!(item = %self.item, "removal requested after stack teardown");
        }
    }
}

impl fmt::Debug for RemovalSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemovalSignal")
            .field("item", &self.item)
            .field("arming", &self.arming)
            .finish()
    }
}
