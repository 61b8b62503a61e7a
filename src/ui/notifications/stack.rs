// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `NotificationStack` owns the active cards, enforces the capacity limit
//! after every insertion, keeps at most one card expanded, and hides itself
//! after a period of inactivity unless some card still has work in flight.

use super::clock::{Clock, SystemClock};
use super::events::{RemovalReason, StackEvent, Visibility};
use super::item::{is_expanded, is_unfinished, ItemId, NotificationItem, RemovalRequest};
use super::removal::RemovalQueue;
use super::timer::IdleTimer;
use crate::config::StackConfig;
use crate::domain::ui::{Capacity, IdleTimeout, TickInterval};
use crate::error::{Error, Result};
use iced::Subscription;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace, warn};

/// Messages for notification stack state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Periodic idle check.
    Tick(Instant),
    /// The pointer moved over the stack.
    PointerMoved,
    /// Dismiss a specific card (its close affordance was used).
    Dismiss(ItemId),
    /// Dismiss every card at once.
    CloseAll,
    /// Expand or collapse an expandable card.
    ToggleExpanded(ItemId),
    /// A card fired its removal signal.
    RemovalRequested(RemovalRequest),
}

/// Bounded, auto-hiding stack of notification cards (newest first).
pub struct NotificationStack<C: Clock = SystemClock> {
    items: VecDeque<Box<dyn NotificationItem>>,
    capacity: Capacity,
    idle_timeout: IdleTimeout,
    /// Last activity (pointer movement, insertion, or a deferred hide).
    idle_reference: Instant,
    visibility: Visibility,
    timer: IdleTimer,
    /// Arming number of each item holding a live removal signal.
    armed: HashMap<ItemId, u64>,
    next_arming: u64,
    removals: RemovalQueue,
    events: Vec<StackEvent>,
    clock: C,
}

impl NotificationStack<SystemClock> {
    /// Creates an empty, hidden stack with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(&StackConfig::default(), SystemClock)
    }

    /// Creates an empty, hidden stack from user settings.
    #[must_use]
    pub fn from_config(config: &StackConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for NotificationStack<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> NotificationStack<C> {
    /// Creates an empty, hidden stack reading time from `clock`.
    pub fn with_clock(config: &StackConfig, clock: C) -> Self {
        Self {
            items: VecDeque::new(),
            capacity: config.capacity(),
            idle_timeout: config.idle_timeout(),
            idle_reference: clock.now(),
            visibility: Visibility::Hidden,
            timer: IdleTimer::new(config.tick_interval()),
            armed: HashMap::new(),
            next_arming: 0,
            removals: RemovalQueue::new(),
            events: Vec::new(),
            clock,
        }
    }

    /// Adds a card at the top of the stack and shows the stack.
    ///
    /// Fails with [`Error::DuplicateItem`] if a card with the same identity is
    /// already present; the stack is left untouched in that case.
    pub fn add<I: NotificationItem + 'static>(&mut self, item: I) -> Result<()> {
        self.add_boxed(Box::new(item))
    }

    /// Same as [`add`](Self::add) for an already boxed card.
    pub fn add_boxed(&mut self, mut item: Box<dyn NotificationItem>) -> Result<()> {
        self.process_removal_requests();

        let id = item.id();
        if self.contains(id) {
            warn!(item = %id, "rejecting notification already in the stack");
            return Err(Error::DuplicateItem(id));
        }

        if let Some(removable) = item.as_removable_mut() {
            let arming = self.next_arming;
            self.next_arming += 1;
            self.armed.insert(id, arming);
            removable.arm_removal(self.removals.signal(id, arming));
        }

        if let Some(expandable) = item.as_expandable_mut() {
            expandable.set_expanded(true);
        }
        for existing in &mut self.items {
            if let Some(expandable) = existing.as_expandable_mut() {
                expandable.set_expanded(false);
            }
        }

        debug!(item = %id, title = item.title(), "notification added");
        self.items.push_front(item);
        self.events.push(StackEvent::Inserted(id));

        self.evict_overflow();
        self.show();
        Ok(())
    }

    /// Removes a card. Absent cards are ignored. Returns `true` if a card was
    /// removed.
    ///
    /// The stack hides once it is empty.
    pub fn remove(&mut self, id: ItemId) -> bool {
        self.remove_with_reason(id, RemovalReason::Requested)
    }

    /// Shows the stack and restarts the idle period.
    pub fn show(&mut self) {
        self.idle_reference = self.clock.now();
        if self.visibility != Visibility::Shown {
            self.visibility = Visibility::Shown;
            self.events.push(StackEvent::Shown);
            debug!(items = self.items.len(), "notification stack shown");
        }
        self.timer.start();
    }

    /// Hides the stack and stops the idle timer.
    pub fn hide(&mut self) {
        if self.visibility != Visibility::Hidden {
            self.visibility = Visibility::Hidden;
            self.events.push(StackEvent::Hidden);
            debug!(items = self.items.len(), "notification stack hidden");
        }
        self.timer.stop();
    }

    /// Idle check, run every tick interval while the timer is running.
    ///
    /// Once the idle timeout has elapsed the stack hides, unless a card still
    /// has unfinished work: then the idle period restarts and the stack stays
    /// visible.
    pub fn on_idle_tick(&mut self) {
        self.process_removal_requests();

        if !self.timer.is_running() {
            trace!("idle tick ignored, timer stopped");
            return;
        }

        let now = self.clock.now();
        let elapsed = now.saturating_duration_since(self.idle_reference);
        if elapsed < self.idle_timeout.as_duration() {
            return;
        }

        if self.has_unfinished() {
            trace!("idle timeout reached with work in flight, staying visible");
            self.idle_reference = now;
        } else {
            self.hide();
        }
    }

    /// Pointer activity over the stack. Ignored while the stack is empty.
    pub fn on_pointer_activity(&mut self) {
        self.process_removal_requests();

        if self.items.is_empty() {
            return;
        }
        self.idle_reference = self.clock.now();
        self.show();
    }

    /// Hides the stack and removes every card, including unfinished ones.
    pub fn close_all(&mut self) {
        self.hide();

        let ids: Vec<ItemId> = self.items.iter().map(|item| item.id()).collect();
        for id in ids {
            self.remove_with_reason(id, RemovalReason::ClosedAll);
        }
    }

    /// Expands the given card and collapses every other one. An already
    /// expanded card is collapsed instead. Returns `false` if the card is
    /// absent or not expandable.
    pub fn toggle_expanded(&mut self, id: ItemId) -> bool {
        let Some(target) = self.items.iter().find(|item| item.id() == id) else {
            return false;
        };
        let Some(expandable) = target.as_expandable() else {
            return false;
        };
        let expand = !expandable.is_expanded();

        for item in &mut self.items {
            let is_target = item.id() == id;
            if let Some(expandable) = item.as_expandable_mut() {
                expandable.set_expanded(expand && is_target);
            }
        }
        true
    }

    /// Applies pending removal signals. Returns how many cards were removed.
    ///
    /// Iced hosts receive signals through [`subscription`](Self::subscription);
    /// signals are also drained at the start of every other entry point.
    /// Hosts without an event loop call this to apply them immediately.
    pub fn process_removal_requests(&mut self) -> usize {
        let mut removed = 0;
        for request in self.removals.drain() {
            if self.apply_removal_request(request) {
                removed += 1;
            }
        }
        removed
    }

    /// Applies one fired signal unless it is stale. Returns `true` if a card
    /// was removed.
    pub fn apply_removal_request(&mut self, request: RemovalRequest) -> bool {
        if self.armed.get(&request.item) != Some(&request.arming) {
            trace!(item = %request.item, "stale removal signal ignored");
            return false;
        }
        self.remove_with_reason(request.item, RemovalReason::Requested)
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Tick(_) => self.on_idle_tick(),
            Message::PointerMoved => self.on_pointer_activity(),
            Message::Dismiss(id) => {
                self.process_removal_requests();
                self.remove(*id);
            }
            Message::CloseAll => self.close_all(),
            Message::ToggleExpanded(id) => {
                self.toggle_expanded(*id);
            }
            Message::RemovalRequested(request) => {
                self.apply_removal_request(*request);
            }
        }
    }

    /// Removal-signal feed, always active, batched with the idle-check ticks
    /// that run only while the stack is shown.
    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([self.removals.subscription(), self.timer.subscription()])
    }

    /// Drains the events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<StackEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cards from newest to oldest.
    pub fn items(&self) -> impl Iterator<Item = &(dyn NotificationItem + 'static)> {
        self.items.iter().map(|item| &**item)
    }

    /// Card identities from newest to oldest.
    #[must_use]
    pub fn ids(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id()).collect()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&(dyn NotificationItem + 'static)> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .map(|item| &**item)
    }

    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility.is_shown()
    }

    #[must_use]
    pub fn is_timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Whether any card still has work in flight.
    #[must_use]
    pub fn has_unfinished(&self) -> bool {
        self.items.iter().any(|item| is_unfinished(&**item))
    }

    /// The expanded card, if any.
    #[must_use]
    pub fn expanded(&self) -> Option<ItemId> {
        self.items
            .iter()
            .map(|item| &**item)
            .find(|item| is_expanded(*item))
            .map(|item| item.id())
    }

    #[must_use]
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }

    #[must_use]
    pub fn idle_timeout(&self) -> IdleTimeout {
        self.idle_timeout
    }

    #[must_use]
    pub fn tick_interval(&self) -> TickInterval {
        self.timer.interval()
    }

    /// Eviction pass: drops the cards past capacity, oldest excess last,
    /// except the ones with unfinished work.
    fn evict_overflow(&mut self) {
        let capacity = self.capacity.get();
        if self.items.len() <= capacity {
            return;
        }

        let mut evictable = Vec::new();
        for item in self.items.iter().skip(capacity) {
            if is_unfinished(&**item) {
                debug!(item = %item.id(), "over capacity, kept while unfinished");
            } else {
                evictable.push(item.id());
            }
        }

        for id in evictable {
            self.remove_with_reason(id, RemovalReason::Evicted);
        }
    }

    fn remove_with_reason(&mut self, id: ItemId, reason: RemovalReason) -> bool {
        let removed = match self.items.iter().position(|item| item.id() == id) {
            Some(pos) => {
                self.items.remove(pos);
                self.armed.remove(&id);
                self.events.push(StackEvent::Removed { id, reason });
                debug!(item = %id, ?reason, "notification removed");
                true
            }
            None => false,
        };

        if self.items.is_empty() {
            self.hide();
        }
        removed
    }
}

impl<C: Clock> fmt::Debug for NotificationStack<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationStack")
            .field("items", &self.items)
            .field("capacity", &self.capacity)
            .field("visibility", &self.visibility)
            .field("timer_running", &self.timer.is_running())
            .finish()
    }
}
