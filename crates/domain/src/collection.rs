// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Step-function representation of a parameter's value over time.
//!
//! A [`ValueIntervalCollection`] keeps its intervals sorted by start date
//! and pairwise disjoint. Inserting an interval overrides whatever the
//! collection held for that range and leaves every other day untouched.
//! Gaps are permitted; a day inside a gap simply has no value.

use crate::date::{FOREVER, day_before};
use crate::error::DomainError;
use crate::interval::ValueInterval;
use crate::value::ParameterValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// Parameter values keyed by the date they take effect.
///
/// This is the shape parameter metadata uses: only start dates are
/// recorded, and each value holds until the next entry begins.
pub type ValuesList = BTreeMap<Date, ParameterValue>;

/// How an existing interval relates to one being inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Overlap {
    /// Existing ends before the new interval starts.
    Before,
    /// Existing starts after the new interval ends.
    After,
    /// The new interval covers all of the existing one.
    Covered,
    /// Existing extends past the new interval on both sides.
    Straddles,
    /// The new interval covers the head of the existing one.
    Head,
    /// The new interval covers the tail of the existing one.
    Tail,
}

impl Overlap {
    fn classify(existing: &ValueInterval, new: &ValueInterval) -> Self {
        if existing.end_date() < new.start_date() {
            Self::Before
        } else if existing.start_date() > new.end_date() {
            Self::After
        } else if new.start_date() <= existing.start_date() && new.end_date() >= existing.end_date()
        {
            Self::Covered
        } else if existing.start_date() < new.start_date() && existing.end_date() > new.end_date()
        {
            Self::Straddles
        } else if new.start_date() <= existing.start_date() {
            Self::Head
        } else {
            Self::Tail
        }
    }
}

/// An ordered set of non-overlapping value intervals.
///
/// Cloning produces an independent deep copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<ValueInterval>", into = "Vec<ValueInterval>")]
pub struct ValueIntervalCollection {
    /// Sorted by start date, pairwise disjoint.
    intervals: Vec<ValueInterval>,
}

impl ValueIntervalCollection {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            intervals: Vec::new(),
        }
    }

    /// Builds a collection by inserting each interval in order.
    ///
    /// Overlapping input is resolved exactly as repeated calls to
    /// [`add_interval`](Self::add_interval) would resolve it: later
    /// intervals win.
    #[must_use]
    pub fn from_intervals(intervals: impl IntoIterator<Item = ValueInterval>) -> Self {
        let mut collection: Self = Self::new();
        collection.extend(intervals);
        collection
    }

    /// Builds a collection from a start-date-keyed values list.
    ///
    /// Each entry holds until the day before the next entry starts; the
    /// last entry holds until [`FOREVER`].
    ///
    /// # Errors
    ///
    /// Returns an error if the last entry starts after [`FOREVER`], or if
    /// date arithmetic overflows.
    pub fn from_values_list(values: &ValuesList) -> Result<Self, DomainError> {
        let mut collection: Self = Self::new();
        let mut entries = values.iter().peekable();

        while let Some((start_date, value)) = entries.next() {
            let end_date: Date = match entries.peek() {
                Some((next_start, _)) => day_before(**next_start)?,
                None => FOREVER,
            };
            collection.add_interval(ValueInterval::new(*start_date, end_date, *value)?);
        }

        Ok(collection)
    }

    /// Inserts an interval, overriding any existing coverage of its range.
    ///
    /// Existing intervals that lie entirely inside the new range are
    /// dropped. Intervals that reach past it are clipped to the days
    /// before its start and after its end; one that extends past both
    /// ends is split in two. The result is re-sorted by start date.
    pub fn add_interval(&mut self, interval: ValueInterval) {
        let mut retained: Vec<ValueInterval> = Vec::with_capacity(self.intervals.len() + 2);

        for existing in self.intervals.drain(..) {
            match Overlap::classify(&existing, &interval) {
                Overlap::Before | Overlap::After => retained.push(existing),
                Overlap::Covered => {}
                Overlap::Straddles => {
                    retained.extend(existing.clipped_before(interval.start_date()));
                    retained.extend(existing.clipped_after(interval.end_date()));
                }
                Overlap::Head => retained.extend(existing.clipped_after(interval.end_date())),
                Overlap::Tail => retained.extend(existing.clipped_before(interval.start_date())),
            }
        }

        retained.push(interval);
        retained.sort_by_key(ValueInterval::start_date);
        self.intervals = retained;
    }

    /// Returns the intervals in start-date order.
    #[must_use]
    pub fn intervals(&self) -> &[ValueInterval] {
        &self.intervals
    }

    /// Consumes the collection, returning its intervals in start-date order.
    #[must_use]
    pub fn into_intervals(self) -> Vec<ValueInterval> {
        self.intervals
    }

    /// Iterates over the intervals in start-date order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValueInterval> {
        self.intervals.iter()
    }

    /// Returns the number of intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns whether the collection holds no intervals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the value in effect on `date`, or `None` inside a gap.
    #[must_use]
    pub fn value_at(&self, date: Date) -> Option<ParameterValue> {
        let idx: usize = self
            .intervals
            .partition_point(|interval| interval.end_date() < date);
        self.intervals
            .get(idx)
            .filter(|interval| interval.contains(date))
            .map(ValueInterval::value)
    }

    /// Returns every interval's start date.
    #[must_use]
    pub fn start_dates(&self) -> Vec<Date> {
        self.intervals.iter().map(ValueInterval::start_date).collect()
    }

    /// Returns every interval's end date.
    #[must_use]
    pub fn end_dates(&self) -> Vec<Date> {
        self.intervals.iter().map(ValueInterval::end_date).collect()
    }

    /// Returns every interval's value.
    #[must_use]
    pub fn values(&self) -> Vec<ParameterValue> {
        self.intervals.iter().map(ValueInterval::value).collect()
    }

    /// Removes every interval.
    pub fn clear(&mut self) {
        self.intervals.clear();
    }

    /// Coalesces neighbouring intervals that touch and hold equal values.
    ///
    /// Two intervals touch when the second starts the day after the first
    /// ends. Coverage and values are unchanged; only the number of
    /// intervals shrinks.
    pub fn merge_adjacent(&mut self) {
        let mut merged: Vec<ValueInterval> = Vec::with_capacity(self.intervals.len());

        for interval in self.intervals.drain(..) {
            match merged.last_mut() {
                Some(last) if last.continues_into(&interval) => {
                    *last = last.extended_to(interval.end_date());
                }
                _ => merged.push(interval),
            }
        }

        self.intervals = merged;
    }

    /// Returns a copy of this collection with `overrides` laid on top.
    ///
    /// Used to chart a reform against its baseline: every day covered by
    /// `overrides` takes its value, all other days keep this collection's.
    #[must_use]
    pub fn overlaid_with(&self, overrides: &Self) -> Self {
        let mut overlay: Self = self.clone();
        overlay.extend(overrides.iter().copied());
        overlay
    }
}

impl Extend<ValueInterval> for ValueIntervalCollection {
    fn extend<T: IntoIterator<Item = ValueInterval>>(&mut self, iter: T) {
        for interval in iter {
            self.add_interval(interval);
        }
    }
}

impl FromIterator<ValueInterval> for ValueIntervalCollection {
    fn from_iter<T: IntoIterator<Item = ValueInterval>>(iter: T) -> Self {
        Self::from_intervals(iter)
    }
}

impl<'a> IntoIterator for &'a ValueIntervalCollection {
    type Item = &'a ValueInterval;
    type IntoIter = std::slice::Iter<'a, ValueInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl From<Vec<ValueInterval>> for ValueIntervalCollection {
    fn from(intervals: Vec<ValueInterval>) -> Self {
        Self::from_intervals(intervals)
    }
}

impl From<ValueIntervalCollection> for Vec<ValueInterval> {
    fn from(collection: ValueIntervalCollection) -> Self {
        collection.into_intervals()
    }
}
