// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use polsim_domain::{ParameterValue, PolicyPayload};
use serde::{Deserialize, Serialize};

/// API request body for creating a policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePolicyRequest {
    /// The policy's parameter overrides in the wire format.
    pub data: PolicyPayload,
    /// The policy label, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// The identifier returned for a created policy.
///
/// The service has answered with both numeric and string identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PolicyIdValue {
    /// A numeric identifier.
    Number(u64),
    /// A string identifier.
    Text(String),
}

impl std::fmt::Display for PolicyIdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => write!(f, "{id}"),
        }
    }
}

/// The `result` object of a successful create-policy response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPolicy {
    /// The assigned policy identifier.
    pub policy_id: PolicyIdValue,
}

/// API response for a create-policy request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatePolicyResponse {
    /// `"ok"` on success.
    pub status: String,
    /// Error description when the status is not ok.
    #[serde(default)]
    pub message: Option<String>,
    /// The created policy, present on success.
    #[serde(default)]
    pub result: Option<CreatedPolicy>,
}

/// API request to override one parameter over a date range.
///
/// All fields are raw strings as received; the handler validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetParameterIntervalRequest {
    /// The parameter's dotted metadata path.
    pub parameter: String,
    /// First day of the range (ISO 8601).
    pub start_date: String,
    /// Last day of the range (ISO 8601).
    pub end_date: String,
    /// `true`, `false`, or a number.
    pub value: String,
}

/// API response for a successful parameter override.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetParameterIntervalResponse {
    /// The parameter that was changed.
    pub parameter: String,
    /// Human-readable period label for the override.
    pub period: String,
    /// The value now in effect for the period.
    pub value: ParameterValue,
    /// A success message.
    pub message: String,
}

/// One period of a parameter's schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodInfo {
    /// Human-readable period label.
    pub period: String,
    /// First day of the period (ISO 8601).
    pub start_date: String,
    /// Last day of the period (ISO 8601).
    pub end_date: String,
    /// The value over the period.
    pub value: ParameterValue,
}

/// A parameter and its schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterInfo {
    /// The parameter's dotted metadata path.
    pub name: String,
    /// The parameter's periods, in date order.
    pub periods: Vec<PeriodInfo>,
}

/// API response describing a policy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PolicySummaryResponse {
    /// The country the policy applies to.
    pub country_id: String,
    /// The policy label, if any.
    pub label: Option<String>,
    /// The server-assigned identifier, if created.
    pub policy_id: Option<String>,
    /// Each overridden parameter, sorted by name.
    pub parameters: Vec<ParameterInfo>,
}
