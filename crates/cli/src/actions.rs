// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Subcommand bodies, kept free of file and terminal I/O.

use color_eyre::{Result, eyre::eyre};
use polsim::{Command, Position, State, apply_all};
use polsim_api::{
    PolicySummaryResponse, SetParameterIntervalRequest, create_policy_request,
    set_parameter_interval, summarize_policy,
};
use polsim_domain::Policy;
use std::fmt::Write;
use tracing::{debug, info};

/// Renders a policy's overrides for display.
pub fn show(policy: &Policy, json: bool) -> Result<String> {
    let summary: PolicySummaryResponse = summarize_policy(policy);
    if json {
        return Ok(serde_json::to_string_pretty(&summary)?);
    }

    let mut out: String = format!(
        "{} policy '{}'",
        summary.country_id,
        summary.label.as_deref().unwrap_or("unlabelled")
    );
    if summary.parameters.is_empty() {
        out.push_str("\n  (current law)");
    }
    for parameter in &summary.parameters {
        write!(out, "\n  {}", parameter.name)?;
        for period in &parameter.periods {
            write!(out, "\n    {}: {}", period.period, period.value)?;
        }
    }
    Ok(out)
}

/// Summarizes a policy that parsed successfully.
pub fn check(policy: &Policy) -> String {
    let intervals: usize = policy
        .parameters()
        .iter()
        .map(|parameter| parameter.values().len())
        .sum();
    info!(
        parameters = policy.parameters().len(),
        intervals, "Policy payload is valid"
    );
    format!(
        "ok ({} parameters, {intervals} intervals)",
        policy.parameters().len()
    )
}

/// Builds an editing state holding `policy` at `position`.
pub fn load_state(position: Position, policy: &Policy) -> Result<State> {
    let commands: Vec<Command> = Command::replay(position, policy);
    debug!(commands = commands.len(), "Replaying policy");
    let (state, _) = apply_all(&State::new(), commands)?;
    Ok(state)
}

/// Applies one parameter override and returns the updated policy.
pub fn set(
    state: &State,
    position: Position,
    request: &SetParameterIntervalRequest,
) -> Result<Policy> {
    let (result, response) = set_parameter_interval(state, position, request)?;
    info!("{}", response.message);
    result
        .new_state
        .policy(position)
        .cloned()
        .ok_or_else(|| eyre!("no policy at the {position} position"))
}

/// Renders a policy in the whole-policy wire format.
pub fn render_payload(policy: &Policy) -> Result<String> {
    Ok(serde_json::to_string_pretty(&create_policy_request(policy).data)?)
}
