// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::NotificationMessage;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the notification stack.
    Notification(NotificationMessage),
    /// Post a plain status card.
    AddStatus,
    /// Start a simulated long-running job with a progress card.
    StartJob,
    /// Advance a simulated job by one step.
    JobStep(u32),
    /// Post a screenshot card.
    TakeScreenshot,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Configuration file to read instead of the per-user default.
    pub config_path: Option<PathBuf>,
    /// Capacity override.
    pub capacity: Option<usize>,
    /// Idle timeout override, in seconds.
    pub idle_timeout_secs: Option<u64>,
}
