// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Capacity**: Number of cards kept in the stack
//! - **Idle**: Auto-hide timeout and polling period

// ==========================================================================
// Capacity Defaults
// ==========================================================================

/// Default number of cards kept before the eviction pass kicks in.
pub const DEFAULT_CAPACITY: usize = 5;

/// Minimum capacity. A stack always has room for the newest card.
pub const MIN_CAPACITY: usize = 1;

/// Maximum capacity.
pub const MAX_CAPACITY: usize = 50;

// ==========================================================================
// Idle Defaults
// ==========================================================================

/// Default inactivity period before the stack hides itself (in seconds).
pub const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 5;

/// Minimum idle timeout (in seconds).
pub const MIN_IDLE_TIMEOUT_SECS: u64 = 1;

/// Maximum idle timeout (in seconds).
pub const MAX_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default period of the idle check (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1000;

/// Minimum idle check period (in milliseconds).
pub const MIN_TICK_INTERVAL_MS: u64 = 100;

/// Maximum idle check period (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Capacity validation
    assert!(MIN_CAPACITY > 0);
    assert!(MAX_CAPACITY >= MIN_CAPACITY);
    assert!(DEFAULT_CAPACITY >= MIN_CAPACITY);
    assert!(DEFAULT_CAPACITY <= MAX_CAPACITY);

    // Idle validation
    assert!(MIN_IDLE_TIMEOUT_SECS > 0);
    assert!(MAX_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
    assert!(DEFAULT_IDLE_TIMEOUT_SECS >= MIN_IDLE_TIMEOUT_SECS);
    assert!(DEFAULT_IDLE_TIMEOUT_SECS <= MAX_IDLE_TIMEOUT_SECS);
    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    // The idle check must be able to observe the timeout
    assert!(DEFAULT_TICK_INTERVAL_MS <= DEFAULT_IDLE_TIMEOUT_SECS * 1000);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_defaults_are_valid() {
        assert_eq!(DEFAULT_CAPACITY, 5);
        assert!(DEFAULT_CAPACITY >= MIN_CAPACITY);
        assert!(DEFAULT_CAPACITY <= MAX_CAPACITY);
    }

    #[test]
    fn idle_defaults_are_valid() {
        assert_eq!(DEFAULT_IDLE_TIMEOUT_SECS, 5);
        assert_eq!(DEFAULT_TICK_INTERVAL_MS, 1000);
        assert!(DEFAULT_IDLE_TIMEOUT_SECS <= MAX_IDLE_TIMEOUT_SECS);
    }
}
