// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversion to and from the API's date-range-keyed value maps.
//!
//! The API stores a parameter's value over time as a JSON object whose
//! keys are `"<startDate>.<endDate>"`:
//!
//! ```json
//! { "2024-01-01.2024-12-31": 3000, "2025-01-01.2025-12-31": 3500 }
//! ```

use crate::date::{format_iso_date, parse_iso_date};
use crate::error::ParseError;
use crate::interval::ValueInterval;
use crate::value::ParameterValue;
use std::collections::BTreeMap;
use time::Date;

/// One parameter's values keyed by `"<startDate>.<endDate>"`.
pub type WireValues = BTreeMap<String, ParameterValue>;

/// A whole policy: parameter name to that parameter's wire values.
pub type PolicyPayload = BTreeMap<String, WireValues>;

const RANGE_SEPARATOR: char = '.';

/// Returns the wire key for an interval's date range.
#[must_use]
pub fn range_key(interval: &ValueInterval) -> String {
    format!(
        "{}{RANGE_SEPARATOR}{}",
        format_iso_date(interval.start_date()),
        format_iso_date(interval.end_date())
    )
}

/// Parses a date-range-keyed map into intervals sorted by start date.
///
/// Overlapping ranges are returned as-is; feed the result through a
/// [`ValueIntervalCollection`](crate::ValueIntervalCollection) to resolve
/// them.
///
/// # Errors
///
/// Returns a `ParseError` naming the first offending key if a key is not
/// exactly two non-empty parts joined by `.`, if either part is not a
/// valid ISO date, or if the range starts after it ends.
pub fn to_intervals(values: &WireValues) -> Result<Vec<ValueInterval>, ParseError> {
    let mut intervals: Vec<ValueInterval> = values
        .iter()
        .map(|(key, value)| parse_entry(key, *value))
        .collect::<Result<_, _>>()?;
    intervals.sort_by_key(ValueInterval::start_date);
    Ok(intervals)
}

/// Renders intervals as a date-range-keyed map.
#[must_use]
pub fn to_api_format(intervals: &[ValueInterval]) -> WireValues {
    intervals
        .iter()
        .map(|interval| (range_key(interval), interval.value()))
        .collect()
}

fn parse_entry(key: &str, value: ParameterValue) -> Result<ValueInterval, ParseError> {
    let malformed = || ParseError::MalformedKey {
        key: key.to_string(),
    };

    let (start, end) = key.split_once(RANGE_SEPARATOR).ok_or_else(malformed)?;
    if start.is_empty() || end.is_empty() || end.contains(RANGE_SEPARATOR) {
        return Err(malformed());
    }

    let start_date: Date = parse_key_date(key, start)?;
    let end_date: Date = parse_key_date(key, end)?;

    ValueInterval::new(start_date, end_date, value).map_err(|_| ParseError::InvalidRange {
        key: key.to_string(),
    })
}

fn parse_key_date(key: &str, date: &str) -> Result<Date, ParseError> {
    parse_iso_date(date).map_err(|_| ParseError::InvalidDate {
        key: key.to_string(),
        date: date.to_string(),
    })
}
