// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::date::iso_date;
use crate::error::DomainError;
use crate::value::ParameterValue;
use serde::{Deserialize, Serialize};
use time::Date;

/// A constant value held over an inclusive date range.
///
/// Intervals are immutable: edits produce new intervals. The start date
/// never falls after the end date; a single-day interval has equal
/// start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedInterval")]
pub struct ValueInterval {
    /// First day the value applies (inclusive).
    #[serde(with = "iso_date")]
    start_date: Date,
    /// Last day the value applies (inclusive).
    #[serde(with = "iso_date")]
    end_date: Date,
    /// The value held over the range.
    value: ParameterValue,
}

impl ValueInterval {
    /// Creates a new `ValueInterval`.
    ///
    /// # Arguments
    ///
    /// * `start_date` - The first day of the range (inclusive)
    /// * `end_date` - The last day of the range (inclusive)
    /// * `value` - The value held over the range
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInterval` if `start_date` is after
    /// `end_date`.
    pub fn new(
        start_date: Date,
        end_date: Date,
        value: impl Into<ParameterValue>,
    ) -> Result<Self, DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidInterval {
                start_date,
                end_date,
            });
        }

        Ok(Self {
            start_date,
            end_date,
            value: value.into(),
        })
    }

    /// Returns the start date (inclusive).
    #[must_use]
    pub const fn start_date(&self) -> Date {
        self.start_date
    }

    /// Returns the end date (inclusive).
    #[must_use]
    pub const fn end_date(&self) -> Date {
        self.end_date
    }

    /// Returns the value held over this interval.
    #[must_use]
    pub const fn value(&self) -> ParameterValue {
        self.value
    }

    /// Returns whether `date` falls inside this interval.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns whether the two intervals share at least one day.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_date <= other.end_date && other.start_date <= self.end_date
    }

    /// Returns the number of days covered, counting both ends.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).whole_days() + 1
    }

    /// The part of this interval strictly before `date`, if any.
    pub(crate) fn clipped_before(&self, date: Date) -> Option<Self> {
        if self.start_date >= date {
            return None;
        }
        let last_day: Date = date.previous_day()?;
        Some(Self {
            end_date: self.end_date.min(last_day),
            ..*self
        })
    }

    /// The part of this interval strictly after `date`, if any.
    pub(crate) fn clipped_after(&self, date: Date) -> Option<Self> {
        if self.end_date <= date {
            return None;
        }
        let first_day: Date = date.next_day()?;
        Some(Self {
            start_date: self.start_date.max(first_day),
            ..*self
        })
    }

    /// Whether `next` starts the day after this interval ends and holds
    /// the same value.
    pub(crate) fn continues_into(&self, next: &Self) -> bool {
        self.value == next.value && self.end_date.next_day() == Some(next.start_date)
    }

    pub(crate) const fn extended_to(self, end_date: Date) -> Self {
        Self { end_date, ..self }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedInterval {
    #[serde(with = "iso_date")]
    start_date: Date,
    #[serde(with = "iso_date")]
    end_date: Date,
    value: ParameterValue,
}

impl TryFrom<UncheckedInterval> for ValueInterval {
    type Error = DomainError;

    fn try_from(raw: UncheckedInterval) -> Result<Self, Self::Error> {
        Self::new(raw.start_date, raw.end_date, raw.value)
    }
}
