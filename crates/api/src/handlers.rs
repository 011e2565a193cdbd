// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions: payload parsing, response decoding, and edits.

use polsim::{Command, Position, State, TransitionResult, apply};
use polsim_domain::{
    CountryId, ParameterName, ParameterValue, Policy, PolicyPayload, ValueInterval,
    ValueIntervalCollection, ValuesList, WireValues, format_iso_date, format_period,
    parse_iso_date,
};
use serde_json::{Map, Value};
use std::str::FromStr;
use time::Date;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult, translate_core_error, translate_domain_error};
use crate::request_response::{
    CreatePolicyRequest, CreatePolicyResponse, ParameterInfo, PeriodInfo, PolicySummaryResponse,
    SetParameterIntervalRequest, SetParameterIntervalResponse,
};

/// Builds the create-policy request body for a policy.
#[must_use]
pub fn create_policy_request(policy: &Policy) -> CreatePolicyRequest {
    CreatePolicyRequest {
        data: policy.to_payload(),
        label: policy.label().map(String::from),
    }
}

/// Parses a whole-policy payload into a draft policy.
///
/// The payload must be an object mapping parameter names to objects whose
/// keys are `"<startDate>.<endDate>"` ranges and whose values are numbers
/// or booleans.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the payload is not that shape, or
/// `ApiError::Parse` naming the first key that fails to parse.
pub fn parse_policy_payload(
    country_id: CountryId,
    label: Option<String>,
    payload: &Value,
) -> ApiResult<Policy> {
    let parameters: &Map<String, Value> =
        payload.as_object().ok_or_else(|| ApiError::InvalidInput {
            field: String::from("data"),
            message: String::from("expected an object of parameters"),
        })?;

    let mut wire: PolicyPayload = PolicyPayload::new();
    for (name, ranges) in parameters {
        let ranges: &Map<String, Value> =
            ranges.as_object().ok_or_else(|| ApiError::InvalidInput {
                field: name.clone(),
                message: String::from("expected an object of date ranges"),
            })?;

        let mut values: WireValues = WireValues::new();
        for (key, value) in ranges {
            values.insert(key.clone(), leaf_value(&format!("{name}.{key}"), value)?);
        }
        wire.insert(name.clone(), values);
    }

    let policy: Policy = Policy::from_payload(country_id, label, &wire)?;
    debug!(
        country = %country_id,
        parameters = policy.parameters().len(),
        "Parsed policy payload"
    );
    Ok(policy)
}

/// Parses a whole-policy payload from JSON text.
///
/// # Errors
///
/// Returns `ApiError::MalformedJson` if the text is not JSON, otherwise
/// the errors of [`parse_policy_payload`].
pub fn parse_policy_document(
    country_id: CountryId,
    label: Option<String>,
    document: &str,
) -> ApiResult<Policy> {
    let payload: Value = serde_json::from_str(document)?;
    parse_policy_payload(country_id, label, &payload)
}

/// Extracts the policy id from a create-policy response body.
///
/// # Errors
///
/// Returns `ApiError::Rejected` if the status is not `"ok"`, or
/// `ApiError::MalformedJson` if the body does not decode or carries no id.
pub fn parse_create_policy_response(body: &str) -> ApiResult<String> {
    let response: CreatePolicyResponse = serde_json::from_str(body)?;

    if response.status != "ok" {
        return Err(ApiError::Rejected {
            message: response
                .message
                .unwrap_or_else(|| format!("status '{}'", response.status)),
        });
    }

    let created = response.result.ok_or_else(|| ApiError::MalformedJson {
        message: String::from("ok response carries no result"),
    })?;
    Ok(created.policy_id.to_string())
}

/// Reads a parameter's current-law schedule from its metadata.
///
/// The metadata's `values` object maps ISO start dates to values; each
/// entry runs until the day before the next, and the last runs forever.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if `values` is missing or holds a bad
/// date or value.
pub fn baseline_from_metadata(metadata: &Value) -> ApiResult<ValueIntervalCollection> {
    let entries: &Map<String, Value> = metadata
        .get("values")
        .and_then(Value::as_object)
        .ok_or_else(|| ApiError::InvalidInput {
            field: String::from("values"),
            message: String::from("expected an object of start dates"),
        })?;

    let mut values: ValuesList = ValuesList::new();
    for (start, value) in entries {
        let start_date: Date = parse_iso_date(start).map_err(translate_domain_error)?;
        values.insert(start_date, leaf_value(&format!("values.{start}"), value)?);
    }

    ValueIntervalCollection::from_values_list(&values).map_err(translate_domain_error)
}

/// Overrides one parameter of the policy at `position` over a date range.
///
/// A created policy is forked into a draft before the edit, so its
/// existing overrides carry over and its identifier is dropped.
///
/// # Errors
///
/// Returns an error if any request field is invalid, or if the position
/// is empty.
pub fn set_parameter_interval(
    state: &State,
    position: Position,
    request: &SetParameterIntervalRequest,
) -> ApiResult<(TransitionResult, SetParameterIntervalResponse)> {
    let parameter: ParameterName =
        ParameterName::new(&request.parameter).map_err(translate_domain_error)?;
    let start_date: Date = parse_iso_date(&request.start_date)
        .map_err(|err| field_error("start_date", translate_domain_error(err)))?;
    let end_date: Date = parse_iso_date(&request.end_date)
        .map_err(|err| field_error("end_date", translate_domain_error(err)))?;
    let value: ParameterValue =
        ParameterValue::from_str(&request.value).map_err(translate_domain_error)?;
    let interval: ValueInterval =
        ValueInterval::new(start_date, end_date, value).map_err(translate_domain_error)?;

    let command: Command = Command::AddParameterInterval {
        position,
        parameter: parameter.clone(),
        interval,
    };
    let forked: Option<State> = match state.policy(position) {
        Some(policy) if policy.is_created() => {
            info!(%position, policy_id = policy.id(), "Forking created policy for editing");
            let fork: TransitionResult =
                apply(state, Command::ForkPolicy { position }).map_err(translate_core_error)?;
            Some(fork.new_state)
        }
        _ => None,
    };
    let result: TransitionResult =
        apply(forked.as_ref().unwrap_or(state), command).map_err(translate_core_error)?;

    let period: String = format_period(start_date, end_date);
    info!(%position, %parameter, %period, %value, "Parameter interval set");

    let response = SetParameterIntervalResponse {
        parameter: parameter.to_string(),
        message: format!("Set {parameter} to {value} for {period}"),
        period,
        value,
    };
    Ok((result, response))
}

/// Describes a policy's overrides, one entry per parameter.
#[must_use]
pub fn summarize_policy(policy: &Policy) -> PolicySummaryResponse {
    let mut parameters: Vec<ParameterInfo> = policy
        .parameters()
        .iter()
        .map(|parameter| ParameterInfo {
            name: parameter.name().to_string(),
            periods: parameter
                .values()
                .iter()
                .map(|interval| PeriodInfo {
                    period: format_period(interval.start_date(), interval.end_date()),
                    start_date: format_iso_date(interval.start_date()),
                    end_date: format_iso_date(interval.end_date()),
                    value: interval.value(),
                })
                .collect(),
        })
        .collect();
    parameters.sort_by(|a, b| a.name.cmp(&b.name));

    PolicySummaryResponse {
        country_id: policy.country_id().to_string(),
        label: policy.label().map(String::from),
        policy_id: policy.id().map(String::from),
        parameters,
    }
}

fn leaf_value(field: &str, value: &Value) -> ApiResult<ParameterValue> {
    match value {
        Value::Bool(flag) => Ok(ParameterValue::Bool(*flag)),
        Value::Number(number) => number
            .as_f64()
            .map(ParameterValue::Number)
            .ok_or_else(|| ApiError::InvalidInput {
                field: field.to_string(),
                message: format!("number {number} is out of range"),
            }),
        other => Err(ApiError::InvalidInput {
            field: field.to_string(),
            message: format!("expected a number or boolean, found {other}"),
        }),
    }
}

/// Renames the field of a generic date error to the request field.
fn field_error(field: &str, err: ApiError) -> ApiError {
    match err {
        ApiError::InvalidInput { message, .. } => ApiError::InvalidInput {
            field: field.to_string(),
            message,
        },
        other => other,
    }
}
