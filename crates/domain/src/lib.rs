// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain model for time-varying policy parameters.
//!
//! A policy parameter's value over time is a step function: a set of
//! non-overlapping, inclusive date ranges each holding one value. This
//! crate owns that model ([`ValueInterval`], [`ValueIntervalCollection`]),
//! the [`Parameter`] and [`Policy`] types built on it, and conversion to
//! and from the API's date-range-keyed wire format.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod collection;
mod date;
mod error;
mod interval;
mod parameter;
mod policy;
mod value;
mod wire;

#[cfg(test)]
mod tests;

pub use collection::{ValueIntervalCollection, ValuesList};
pub use date::{FOREVER, day_after, day_before, format_iso_date, format_period, parse_iso_date};
pub use error::{DomainError, ParseError};
pub use interval::ValueInterval;
pub use parameter::{Parameter, ParameterName};
pub use policy::{CountryId, Policy};
pub use value::ParameterValue;
pub use wire::{PolicyPayload, WireValues, range_key, to_api_format, to_intervals};
