// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types and their validation rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`ui`]: UI value objects ([`Capacity`](ui::newtypes::Capacity),
//!   [`IdleTimeout`](ui::newtypes::IdleTimeout), [`TickInterval`](ui::newtypes::TickInterval))

pub mod ui;
