// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{ParameterValue, ValueInterval, ValueIntervalCollection};
use time::Date;

pub fn interval(start: Date, end: Date, value: impl Into<ParameterValue>) -> ValueInterval {
    ValueInterval::new(start, end, value).unwrap()
}

/// Asserts that no two intervals share a day and that they are sorted.
pub fn assert_disjoint_and_sorted(collection: &ValueIntervalCollection) {
    for pair in collection.intervals().windows(2) {
        assert!(
            pair[0].end_date() < pair[1].start_date(),
            "Intervals overlap or are out of order: {:?} then {:?}",
            pair[0],
            pair[1]
        );
    }
}
