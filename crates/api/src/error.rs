// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use polsim::CoreError;
use polsim_domain::{DomainError, ParseError};
use thiserror::Error;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A date range key or parameter name in a payload did not parse.
    #[error("Invalid policy payload: {0}")]
    Parse(#[from] ParseError),
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// The document was not valid JSON, or not the expected shape.
    #[error("Malformed JSON: {message}")]
    MalformedJson {
        /// The decoder's description of the problem.
        message: String,
    },
    /// The remote service answered with a non-ok status.
    #[error("Request rejected: {message}")]
    Rejected {
        /// The message the service gave, or the raw status.
        message: String,
    },
}

/// Convenience alias for API results.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedJson {
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
///
/// This function explicitly maps domain errors to API errors,
/// ensuring domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("'{date_string}': {error}"),
        },
        DomainError::InvalidInterval {
            start_date,
            end_date,
        } => ApiError::InvalidInput {
            field: String::from("end_date"),
            message: format!("start date {start_date} is after end date {end_date}"),
        },
        DomainError::InvalidValue(msg) => ApiError::InvalidInput {
            field: String::from("value"),
            message: msg,
        },
        DomainError::InvalidParameterName(msg) => ApiError::InvalidInput {
            field: String::from("parameter"),
            message: msg,
        },
        DomainError::InvalidCountry(country) => ApiError::InvalidInput {
            field: String::from("country_id"),
            message: format!("unsupported country '{country}'"),
        },
        DomainError::InvalidPolicyId(msg) => ApiError::InvalidInput {
            field: String::from("policy_id"),
            message: msg,
        },
        DomainError::ParameterNotFound(name) => ApiError::DomainRuleViolation {
            rule: String::from("parameter_exists"),
            message: format!("Parameter '{name}' is not part of this policy"),
        },
        DomainError::PolicyAlreadyCreated { id } => ApiError::DomainRuleViolation {
            rule: String::from("single_creation"),
            message: format!("Policy has already been created with id '{id}'"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::DomainRuleViolation {
            rule: String::from("date_range"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PositionEmpty(position) => ApiError::DomainRuleViolation {
            rule: String::from("position_occupied"),
            message: format!("No policy has been created at the {position} position"),
        },
        CoreError::PolicyLocked {
            position,
            policy_id,
        } => ApiError::DomainRuleViolation {
            rule: String::from("draft_only"),
            message: format!("The {position} policy has already been created as '{policy_id}'"),
        },
    }
}
