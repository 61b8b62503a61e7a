// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for notification stack settings,
//! ensuring they are always within valid ranges.

use crate::config::defaults;
use std::time::Duration;

// =============================================================================
// Capacity
// =============================================================================

/// Soft limit on the number of cards in the stack, guaranteed to be within
/// the valid range (1–50).
///
/// The limit is "soft" because unfinished progress cards are never evicted
/// to honor it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity(usize);

impl Capacity {
    /// Creates a new capacity, clamping the value to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(defaults::MIN_CAPACITY, defaults::MAX_CAPACITY))
    }

    /// Returns the raw value.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Capacity {
    fn default() -> Self {
        Self(defaults::DEFAULT_CAPACITY)
    }
}

// =============================================================================
// IdleTimeout
// =============================================================================

/// Inactivity period after which the stack hides, in seconds (1–300).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleTimeout(u64);

impl IdleTimeout {
    /// Creates a new idle timeout, clamping the value to the valid range.
    #[must_use]
    pub fn new(secs: u64) -> Self {
        Self(secs.clamp(
            defaults::MIN_IDLE_TIMEOUT_SECS,
            defaults::MAX_IDLE_TIMEOUT_SECS,
        ))
    }

    /// Returns the timeout in seconds.
    #[must_use]
    pub fn secs(self) -> u64 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs(self.0)
    }
}

impl Default for IdleTimeout {
    fn default() -> Self {
        Self(defaults::DEFAULT_IDLE_TIMEOUT_SECS)
    }
}

// =============================================================================
// TickInterval
// =============================================================================

/// Polling period of the idle check, in milliseconds (100–10000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickInterval(u64);

impl TickInterval {
    /// Creates a new tick interval, clamping the value to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(
            defaults::MIN_TICK_INTERVAL_MS,
            defaults::MAX_TICK_INTERVAL_MS,
        ))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TickInterval {
    fn default() -> Self {
        Self(defaults::DEFAULT_TICK_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_clamps() {
        assert_eq!(Capacity::new(0).get(), defaults::MIN_CAPACITY);
        assert_eq!(Capacity::new(1_000).get(), defaults::MAX_CAPACITY);
        assert_eq!(Capacity::new(2).get(), 2);
    }

    #[test]
    fn capacity_default() {
        assert_eq!(Capacity::default().get(), 5);
    }

    #[test]
    fn idle_timeout_clamps() {
        assert_eq!(IdleTimeout::new(0).secs(), defaults::MIN_IDLE_TIMEOUT_SECS);
        assert_eq!(
            IdleTimeout::new(u64::MAX).secs(),
            defaults::MAX_IDLE_TIMEOUT_SECS
        );
    }

    #[test]
    fn idle_timeout_as_duration() {
        assert_eq!(IdleTimeout::default().as_duration(), Duration::from_secs(5));
    }

    #[test]
    fn tick_interval_clamps() {
        assert_eq!(TickInterval::new(1).millis(), defaults::MIN_TICK_INTERVAL_MS);
        assert_eq!(
            TickInterval::new(60_000).millis(),
            defaults::MAX_TICK_INTERVAL_MS
        );
        assert_eq!(TickInterval::default().as_duration(), Duration::from_secs(1));
    }
}
