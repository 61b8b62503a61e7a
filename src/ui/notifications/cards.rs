// SPDX-License-Identifier: MPL-2.0
//! Ready-made card types.
//!
//! - [`StatusCard`] - one-line status message ("Recording started")
//! - [`ProgressCard`] - in-flight operation, protected until finished
//! - [`ScreenshotCard`] - saved screenshot preview, exclusively expandable

use super::item::{
    ExclusiveExpandable, ItemId, NotificationItem, ProgressBearing, Removable, RemovalSignal,
};
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================================
// StatusCard
// =============================================================================

/// A plain, removable text card.
#[derive(Debug)]
pub struct StatusCard {
    id: ItemId,
    title: String,
    body: Option<String>,
    removal: Option<RemovalSignal>,
}

impl StatusCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(),
            title: title.into(),
            body: None,
            removal: None,
        }
    }

    /// Adds a second line of text.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Asks the stack to remove this card. Returns `false` if the card was
    /// never added or already asked.
    pub fn request_removal(&mut self) -> bool {
        match self.removal.take() {
            Some(signal) => {
                signal.fire();
                true
            }
            None => false,
        }
    }
}

impl NotificationItem for StatusCard {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail(&self) -> Option<String> {
        self.body.clone()
    }

    fn as_removable_mut(&mut self) -> Option<&mut dyn Removable> {
        Some(self)
    }
}

impl Removable for StatusCard {
    fn arm_removal(&mut self, signal: RemovalSignal) {
        self.removal = Some(signal);
    }
}

// =============================================================================
// ProgressCard
// =============================================================================

/// Producer-side handle to a [`ProgressCard`].
///
/// The card is owned by the stack once added; the producer keeps a tracker
/// to report progress, mark completion and ask for removal. Trackers are
/// `Send` so background tasks may hold them.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    finished: Arc<AtomicBool>,
    percent: Arc<AtomicU8>,
    removal: Arc<Mutex<Option<RemovalSignal>>>,
}

impl ProgressTracker {
    /// Reports progress, capped at 100.
    pub fn set_percent(&self, percent: u8) {
        self.percent.store(percent.min(100), Ordering::Relaxed);
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent.load(Ordering::Relaxed)
    }

    /// Marks the work as done. The card becomes evictable and stops keeping
    /// the stack visible.
    pub fn finish(&self) {
        self.percent.store(100, Ordering::Relaxed);
        self.finished.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished.load(Ordering::Acquire)
    }

    /// Asks the stack to remove the card, even if unfinished.
    /// Returns `false` if the card is not armed.
    pub fn request_removal(&self) -> bool {
        let signal = match self.removal.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        match signal {
            Some(signal) => {
                signal.fire();
                true
            }
            None => false,
        }
    }

    fn arm(&self, signal: RemovalSignal) {
        match self.removal.lock() {
            Ok(mut slot) => *slot = Some(signal),
            Err(poisoned) => *poisoned.into_inner() = Some(signal),
        }
    }
}

/// A card for an operation in progress (recording, upload, encoding).
#[derive(Debug)]
pub struct ProgressCard {
    id: ItemId,
    title: String,
    tracker: ProgressTracker,
}

impl ProgressCard {
    /// Creates an unfinished card and the tracker that drives it.
    pub fn new(title: impl Into<String>) -> (Self, ProgressTracker) {
        let tracker = ProgressTracker::default();
        let card = Self {
            id: ItemId::new(),
            title: title.into(),
            tracker: tracker.clone(),
        };
        (card, tracker)
    }
}

impl NotificationItem for ProgressCard {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail(&self) -> Option<String> {
        if self.tracker.is_finished() {
            Some("Done".to_string())
        } else {
            Some(format!("{}%", self.tracker.percent()))
        }
    }

    fn as_removable_mut(&mut self) -> Option<&mut dyn Removable> {
        Some(self)
    }

    fn as_progress(&self) -> Option<&dyn ProgressBearing> {
        Some(self)
    }
}

impl Removable for ProgressCard {
    fn arm_removal(&mut self, signal: RemovalSignal) {
        self.tracker.arm(signal);
    }
}

impl ProgressBearing for ProgressCard {
    fn is_finished(&self) -> bool {
        self.tracker.is_finished()
    }
}

// =============================================================================
// ScreenshotCard
// =============================================================================

/// Preview of a saved screenshot. Only one screenshot card is expanded at a
/// time; the newest one wins.
#[derive(Debug)]
pub struct ScreenshotCard {
    id: ItemId,
    title: String,
    path: PathBuf,
    saved_at: DateTime<Local>,
    expanded: bool,
    removal: Option<RemovalSignal>,
}

impl ScreenshotCard {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            id: ItemId::new(),
            title: "Screenshot saved".to_string(),
            path: path.into(),
            saved_at: Local::now(),
            expanded: false,
            removal: None,
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn saved_at(&self) -> DateTime<Local> {
        self.saved_at
    }

    /// Asks the stack to remove this card.
    pub fn request_removal(&mut self) -> bool {
        match self.removal.take() {
            Some(signal) => {
                signal.fire();
                true
            }
            None => false,
        }
    }
}

impl NotificationItem for ScreenshotCard {
    fn id(&self) -> ItemId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn detail(&self) -> Option<String> {
        Some(format!(
            "{} ({})",
            self.path.display(),
            self.saved_at.format("%H:%M:%S")
        ))
    }

    fn as_removable_mut(&mut self) -> Option<&mut dyn Removable> {
        Some(self)
    }

    fn as_expandable(&self) -> Option<&dyn ExclusiveExpandable> {
        Some(self)
    }

    fn as_expandable_mut(&mut self) -> Option<&mut dyn ExclusiveExpandable> {
        Some(self)
    }
}

impl Removable for ScreenshotCard {
    fn arm_removal(&mut self, signal: RemovalSignal) {
        self.removal = Some(signal);
    }
}

impl ExclusiveExpandable for ScreenshotCard {
    fn is_expanded(&self) -> bool {
        self.expanded
    }

    fn set_expanded(&mut self, expanded: bool) {
        self.expanded = expanded;
    }
}
