// SPDX-License-Identifier: MPL-2.0
//! Delivery of fired removal signals back to the stack.
//!
//! Signals may be fired from any thread. Requests queue on an unbounded
//! channel whose receiver is shared between the stack (synchronous draining)
//! and a subscription that turns each request into a
//! [`Message::RemovalRequested`], so a removal is applied on the next update
//! even while the stack is hidden and its idle timer is stopped.

use super::item::{ItemId, RemovalRequest, RemovalSignal};
use super::stack::Message;
use iced::futures::channel::mpsc::{self, UnboundedReceiver, UnboundedSender};
use iced::futures::stream::{self, Stream, StreamExt};
use iced::Subscription;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type SharedReceiver = Arc<Mutex<UnboundedReceiver<RemovalRequest>>>;

/// Subscription identity of one stack's removal feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct RemovalFeedId(u64);

pub(crate) struct RemovalQueue {
    feed: RemovalFeedId,
    sender: UnboundedSender<RemovalRequest>,
    receiver: SharedReceiver,
}

impl RemovalQueue {
    pub(crate) fn new() -> Self {
        static NEXT_FEED: AtomicU64 = AtomicU64::new(0);

        let (sender, receiver) = mpsc::unbounded();
        Self {
            feed: RemovalFeedId(NEXT_FEED.fetch_add(1, Ordering::Relaxed)),
            sender,
            receiver: Arc::new(Mutex::new(receiver)),
        }
    }

    /// Creates a signal that enqueues a request for `item` at `arming`.
    pub(crate) fn signal(&self, item: ItemId, arming: u64) -> RemovalSignal {
        RemovalSignal::new(item, arming, self.sender.clone())
    }

    /// Takes every request queued so far without waiting.
    pub(crate) fn drain(&self) -> Vec<RemovalRequest> {
        let mut receiver = lock(&self.receiver);
        let mut requests = Vec::new();
        // Err means empty; the queue holds a sender so the channel never closes
        while let Ok(Some(request)) = receiver.try_next() {
            requests.push(request);
        }
        requests
    }

    pub(crate) fn subscription(&self) -> Subscription<Message> {
        let feed = RemovalFeed {
            id: self.feed,
            receiver: Arc::clone(&self.receiver),
        };
        Subscription::run_with(feed, |feed| removal_stream(Arc::clone(&feed.receiver)))
    }
}

/// Subscription data for `run_with`; identity is the feed id alone.
struct RemovalFeed {
    id: RemovalFeedId,
    receiver: SharedReceiver,
}

impl Hash for RemovalFeed {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn lock(receiver: &SharedReceiver) -> MutexGuard<'_, UnboundedReceiver<RemovalRequest>> {
    receiver.lock().unwrap_or_else(PoisonError::into_inner)
}

fn removal_stream(receiver: SharedReceiver) -> impl Stream<Item = Message> {
    stream::poll_fn(move |cx| lock(&receiver).poll_next_unpin(cx))
        .map(Message::RemovalRequested)
}
