// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON boundary for policy simulation.
//!
//! Everything that crosses into or out of the workspace as JSON is
//! validated here and turned into domain types.

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

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, ApiResult, translate_core_error, translate_domain_error};
pub use handlers::{
    baseline_from_metadata, create_policy_request, parse_create_policy_response,
    parse_policy_document, parse_policy_payload, set_parameter_interval, summarize_policy,
};
pub use request_response::{
    CreatePolicyRequest, CreatePolicyResponse, CreatedPolicy, ParameterInfo, PeriodInfo,
    PolicyIdValue, PolicySummaryResponse, SetParameterIntervalRequest,
    SetParameterIntervalResponse,
};
