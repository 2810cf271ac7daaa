// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Rule and range factories (fixtures)
//! - Custom assertion helpers for expanded dates

mod assertions;
mod fixtures;

#[allow(unused_imports)]
pub use assertions::{assert_dates, assert_sorted_within};
#[allow(unused_imports)]
pub use fixtures::{d, range, weekdays, weekly_every};
