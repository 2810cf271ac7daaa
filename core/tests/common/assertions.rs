// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for expanded dates.

use recurcal_core::{DEFAULT_HORIZON_YEARS, DateRange, Occurrences};

use super::fixtures::d;

/// Asserts that the occurrences equal the given `YYYY-MM-DD` literals, in order.
///
/// # Panics
///
/// Panics if the dates differ.
pub fn assert_dates(occurrences: &Occurrences, expected: &[&str]) {
    let expected: Vec<_> = expected.iter().map(|s| d(s)).collect();
    let actual = occurrences.as_slice();
    assert_eq!(actual, expected.as_slice(), "Dates mismatch");
}

/// Asserts that the occurrences are strictly increasing and inside the range,
/// bounded by the default horizon when the range is open.
///
/// # Panics
///
/// Panics if any date is out of order, duplicated or outside the range.
pub fn assert_sorted_within(occurrences: &Occurrences, range: &DateRange) {
    for pair in occurrences.windows(2) {
        assert!(pair[0] < pair[1], "Not strictly increasing: {pair:?}");
    }

    let end = range.effective_end(DEFAULT_HORIZON_YEARS);
    for date in occurrences {
        assert!(
            range.start <= *date && *date <= end,
            "{date} outside {}..={end}",
            range.start
        );
    }
}
