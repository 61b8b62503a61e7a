// SPDX-License-Identifier: MPL-2.0
//! Repeating idle-check timer owned by the stack.
//!
//! The timer has no thread of its own: while running it exposes an
//! [`iced::time::every`] subscription and the host loop delivers the ticks.
//! Stopping simply drops the subscription on the next `subscription()` call.

use super::stack::Message;
use crate::domain::ui::TickInterval;
use iced::{time, Subscription};

#[derive(Debug, Clone)]
pub struct IdleTimer {
    interval: TickInterval,
    running: bool,
}

impl IdleTimer {
    /// Creates a stopped timer.
    #[must_use]
    pub fn new(interval: TickInterval) -> Self {
        Self {
            interval,
            running: false,
        }
    }

    /// Starts the timer. Starting a running timer keeps it running.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops the timer. Safe to call on a stopped timer.
    pub fn stop(&mut self) {
        self.running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn interval(&self) -> TickInterval {
        self.interval
    }

    /// Periodic tick subscription, active only while the timer runs.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.running {
            time::every(self.interval.as_duration()).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_timer_is_stopped() {
        let timer = IdleTimer::new(TickInterval::default());
        assert!(!timer.is_running());
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut timer = IdleTimer::new(TickInterval::default());

        timer.start();
        timer.start();
        assert!(timer.is_running());

        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
    }

    #[test]
    fn interval_is_kept() {
        let timer = IdleTimer::new(TickInterval::new(250));
        assert_eq!(timer.interval().millis(), 250);
    }
}
