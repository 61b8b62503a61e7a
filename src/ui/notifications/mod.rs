// SPDX-License-Identifier: MPL-2.0
//! Transient notification stack.
//!
//! This module provides a bounded overlay of short-lived status cards
//! ("recording started", "screenshot saved", operations in progress). Cards
//! are shown newest first, the stack hides itself after a period of
//! inactivity, and cards with unfinished work are never dropped silently.
//!
//! # Components
//!
//! - [`item`] - `NotificationItem` and the capability traits the stack dispatches on
//! - [`cards`] - Ready-made status, progress and screenshot cards
//! - [`stack`] - `NotificationStack` lifecycle and eviction controller
//! - [`timer`] - Idle-check timer owned by the stack
//! - [`clock`] - Time source (system or manual)
//! - `removal` - Delivery of fired removal signals as stack messages
//! - [`events`] - Visibility and removal events for the rendering layer
//! - [`toast`] - Toast widgets for rendering the stack
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{NotificationStack, ProgressCard, StatusCard};
//!
//! let mut stack = NotificationStack::new();
//! stack.add(StatusCard::new("Recording started"))?;
//!
//! let (card, tracker) = ProgressCard::new("Encoding");
//! stack.add(card)?;
//! // ... later, from the producer
//! tracker.finish();
//!
//! // In your view function
//! let overlay = Toast::view_overlay(&stack).map(Message::Notification);
//! ```
//!
//! # Behavior
//!
//! - Capacity: 5 cards by default, unfinished progress cards may exceed it
//! - Idle timeout: 5s, checked every second while shown
//! - Only the newest expandable card is expanded on insertion

pub mod cards;
pub mod clock;
pub mod events;
pub mod item;
mod removal;
pub mod stack;
pub mod timer;
pub mod toast;

pub use cards::{ProgressCard, ProgressTracker, ScreenshotCard, StatusCard};
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{RemovalReason, StackEvent, Visibility};
pub use item::{
    ExclusiveExpandable, ItemId, NotificationItem, ProgressBearing, Removable, RemovalRequest,
    RemovalSignal,
};
pub use stack::{Message as NotificationMessage, NotificationStack};
pub use toast::Toast;
