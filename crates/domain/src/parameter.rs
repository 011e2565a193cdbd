// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::ValueIntervalCollection;
use crate::error::{DomainError, ParseError};
use crate::interval::ValueInterval;
use crate::wire::{WireValues, to_api_format, to_intervals};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A parameter's dotted metadata path, e.g. `gov.irs.credits.ctc.amount.base`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ParameterName {
    value: String,
}

impl ParameterName {
    /// Creates a new `ParameterName`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidParameterName` if the name is empty,
    /// contains whitespace, or has an empty path segment.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        if value.is_empty() {
            return Err(DomainError::InvalidParameterName(String::from(
                "name cannot be empty",
            )));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidParameterName(format!(
                "'{value}' contains whitespace"
            )));
        }
        if value.split('.').any(str::is_empty) {
            return Err(DomainError::InvalidParameterName(format!(
                "'{value}' has an empty path segment"
            )));
        }

        Ok(Self {
            value: value.to_string(),
        })
    }

    /// Returns the full dotted path.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns the last path segment, which is what a UI labels it with.
    #[must_use]
    pub fn leaf(&self) -> &str {
        self.value.rsplit('.').next().unwrap_or(&self.value)
    }
}

impl FromStr for ParameterName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ParameterName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ParameterName> for String {
    fn from(name: ParameterName) -> Self {
        name.value
    }
}

impl std::fmt::Display for ParameterName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// A single named government-rule value that varies over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    /// The parameter's metadata path.
    name: ParameterName,
    /// The parameter's value over time.
    values: ValueIntervalCollection,
}

impl Parameter {
    /// Creates a new `Parameter`.
    #[must_use]
    pub const fn new(name: ParameterName, values: ValueIntervalCollection) -> Self {
        Self { name, values }
    }

    /// Builds a parameter from its date-range-keyed wire values.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is invalid or any key fails to parse.
    pub fn from_api_values(name: &str, values: &WireValues) -> Result<Self, ParseError> {
        let name: ParameterName =
            ParameterName::new(name).map_err(|_| ParseError::InvalidParameterName {
                name: name.to_string(),
            })?;
        let intervals: Vec<ValueInterval> = to_intervals(values)?;
        Ok(Self::new(name, ValueIntervalCollection::from_intervals(intervals)))
    }

    /// Returns the parameter's name.
    #[must_use]
    pub const fn name(&self) -> &ParameterName {
        &self.name
    }

    /// Returns the parameter's value over time.
    #[must_use]
    pub const fn values(&self) -> &ValueIntervalCollection {
        &self.values
    }

    /// Overrides the parameter's value for the interval's range.
    pub fn add_interval(&mut self, interval: ValueInterval) {
        self.values.add_interval(interval);
    }

    /// Renders the parameter's values in the date-range-keyed wire format.
    #[must_use]
    pub fn to_api_values(&self) -> WireValues {
        to_api_format(self.values.intervals())
    }
}
