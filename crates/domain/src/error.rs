// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// An interval's start date falls after its end date.
    InvalidInterval {
        /// The requested start date.
        start_date: Date,
        /// The requested end date.
        end_date: Date,
    },
    /// A parameter value could not be interpreted.
    InvalidValue(String),
    /// Parameter name is empty or not a dotted path.
    InvalidParameterName(String),
    /// Country identifier is not supported.
    InvalidCountry(String),
    /// The policy has no parameter with this name.
    ParameterNotFound(String),
    /// Policy identifier is empty or invalid.
    InvalidPolicyId(String),
    /// The policy already carries a server-assigned identifier.
    PolicyAlreadyCreated {
        /// The identifier the policy was created with.
        id: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidInterval {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Invalid interval: start date {start_date} is after end date {end_date}"
                )
            }
            Self::InvalidValue(msg) => write!(f, "Invalid parameter value: {msg}"),
            Self::InvalidParameterName(msg) => write!(f, "Invalid parameter name: {msg}"),
            Self::InvalidCountry(country) => write!(f, "Unsupported country '{country}'"),
            Self::ParameterNotFound(name) => {
                write!(f, "Parameter '{name}' is not part of this policy")
            }
            Self::InvalidPolicyId(msg) => write!(f, "Invalid policy id: {msg}"),
            Self::PolicyAlreadyCreated { id } => {
                write!(f, "Policy has already been created with id '{id}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}

/// Errors raised while reading the API's date-range-keyed value maps.
///
/// Every variant names the offending key so callers can point at the
/// exact entry that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The key is not of the form `<startDate>.<endDate>`.
    MalformedKey {
        /// The rejected key.
        key: String,
    },
    /// One half of the key is not a valid ISO date.
    InvalidDate {
        /// The key containing the bad date.
        key: String,
        /// The date text that failed to parse.
        date: String,
    },
    /// The key's start date falls after its end date.
    InvalidRange {
        /// The rejected key.
        key: String,
    },
    /// The parameter name the values were attached to is invalid.
    InvalidParameterName {
        /// The rejected name.
        name: String,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedKey { key } => {
                write!(
                    f,
                    "Malformed date range key '{key}': expected '<startDate>.<endDate>'"
                )
            }
            Self::InvalidDate { key, date } => {
                write!(f, "Invalid date '{date}' in date range key '{key}'")
            }
            Self::InvalidRange { key } => {
                write!(f, "Date range key '{key}' starts after it ends")
            }
            Self::InvalidParameterName { name } => {
                write!(f, "Invalid parameter name '{name}'")
            }
        }
    }
}

impl std::error::Error for ParseError {}
