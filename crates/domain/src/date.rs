// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! ISO date handling for value intervals.
//!
//! Dates cross the API boundary as `YYYY-MM-DD` strings and are held as
//! [`time::Date`] everywhere else.

use crate::error::DomainError;
use time::macros::{date, format_description};
use time::{Date, Month};

/// The end date used for intervals that run indefinitely.
///
/// A values list only records start dates, so its last entry is held
/// until this date.
pub const FOREVER: Date = date!(2100 - 12 - 31);

/// Parses a strict `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not exactly
/// four year digits, two month digits and two day digits separated by
/// `-`, or if it does not name a real calendar date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    if !has_iso_shape(value) {
        return Err(DomainError::DateParseError {
            date_string: value.to_string(),
            error: String::from("expected format YYYY-MM-DD"),
        });
    }

    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|err| {
        DomainError::DateParseError {
            date_string: value.to_string(),
            error: err.to_string(),
        }
    })
}

fn has_iso_shape(value: &str) -> bool {
    let bytes: &[u8] = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, byte)| match idx {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Returns the day before `date`.
///
/// # Errors
///
/// Returns an error if `date` is the earliest representable date.
pub fn day_before(date: Date) -> Result<Date, DomainError> {
    date.previous_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the day before {date}"),
        })
}

/// Returns the day after `date`.
///
/// # Errors
///
/// Returns an error if `date` is the latest representable date.
pub fn day_after(date: Date) -> Result<Date, DomainError> {
    date.next_day()
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: format!("computing the day after {date}"),
        })
}

/// Renders a date range as a short human-readable label.
///
/// - Ranges ending on [`FOREVER`] read `"2024 onward"` (or
///   `"Jun 1, 2024 onward"` when they do not start on January 1).
/// - Calendar-year-aligned ranges read `"2024"` or `"2024 - 2026"`.
/// - Anything else reads `"Jun 1, 2024 - Aug 31, 2024"`.
#[must_use]
pub fn format_period(start_date: Date, end_date: Date) -> String {
    let starts_on_new_year: bool = start_date.month() == Month::January && start_date.day() == 1;

    if end_date == FOREVER {
        if starts_on_new_year {
            return format!("{} onward", start_date.year());
        }
        return format!("{} onward", format_long_date(start_date));
    }

    let ends_on_new_years_eve: bool = end_date.month() == Month::December && end_date.day() == 31;
    if starts_on_new_year && ends_on_new_years_eve {
        if start_date.year() == end_date.year() {
            return start_date.year().to_string();
        }
        return format!("{} - {}", start_date.year(), end_date.year());
    }

    format!(
        "{} - {}",
        format_long_date(start_date),
        format_long_date(end_date)
    )
}

fn format_long_date(date: Date) -> String {
    format!(
        "{} {}, {}",
        month_abbreviation(date.month()),
        date.day(),
        date.year()
    )
}

const fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

/// Serde adapter storing a [`Date`] as a `YYYY-MM-DD` string.
pub(crate) mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_iso_date(*date))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        super::parse_iso_date(&raw).map_err(serde::de::Error::custom)
    }
}
