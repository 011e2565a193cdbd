// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// The value a parameter holds over an interval.
///
/// Most parameters are numeric (amounts, rates, thresholds); parameters
/// with a boolean unit toggle a rule on or off. On the wire this is a
/// bare JSON number or boolean.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    /// A boolean-unit parameter value.
    Bool(bool),
    /// A numeric parameter value.
    Number(f64),
}

/// Largest magnitude below which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

impl Serialize for ParameterValue {
    /// Writes whole numbers as JSON integers so `3000` stays `3000`.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match *self {
            Self::Bool(flag) => serializer.serialize_bool(flag),
            Self::Number(number)
                if number.is_finite()
                    && number.fract() == 0.0
                    && number.abs() <= MAX_EXACT_INTEGER =>
            {
                #[allow(clippy::cast_possible_truncation)]
                let integer: i64 = number as i64;
                serializer.serialize_i64(integer)
            }
            Self::Number(number) => serializer.serialize_f64(number),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(number: f64) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for ParameterValue {
    fn from(number: i32) -> Self {
        Self::Number(f64::from(number))
    }
}

impl From<bool> for ParameterValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl FromStr for ParameterValue {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "true" => Ok(Self::Bool(true)),
            "false" => Ok(Self::Bool(false)),
            other => other
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(Self::Number)
                .ok_or_else(|| {
                    DomainError::InvalidValue(format!(
                        "'{other}' is neither a finite number nor a boolean"
                    ))
                }),
        }
    }
}

impl std::fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(flag) => write!(f, "{flag}"),
            Self::Number(number) => write!(f, "{number}"),
        }
    }
}
