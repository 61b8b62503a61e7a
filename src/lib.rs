// SPDX-License-Identifier: MPL-2.0
//! `notification_stack` is a bounded stack of transient notification cards
//! built for the Iced GUI framework.
//!
//! It keeps the newest cards on top, evicts the oldest ones once a capacity is
//! reached, hides itself after a period of inactivity, and never silently
//! drops a card whose work is still in progress.

#![doc(html_root_url = "https://docs.rs/notification_stack/0.1.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod ui;
