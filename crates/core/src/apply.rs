// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::record::{Action, EditRecord};
use crate::state::{Position, State, TransitionResult};
use polsim_domain::{Policy, format_period};
use tracing::debug;

/// Applies a command to the current state, producing a new state and edit record.
///
/// The input state is never modified. On error nothing changes.
///
/// # Arguments
///
/// * `state` - The current state (immutable)
/// * `command` - The command to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and edit record
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - The targeted position holds no policy
/// - The command edits the parameters of a policy that has already been created;
///   fork it with [`Command::ForkPolicy`] first
/// - The command violates domain rules
pub fn apply(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    let name: &'static str = command.name();
    let mut new_state: State = state.clone();

    let details: String = match command {
        Command::CreatePolicy {
            position,
            country_id,
            label,
        } => {
            let details: String = format!(
                "Created {country_id} draft at {position} ({})",
                label.as_deref().unwrap_or("unlabelled")
            );
            *new_state.slot_mut(position) = Some(Policy::draft(country_id, label));
            new_state.set_active(Some(position));
            details
        }
        Command::SetActive { position } => {
            occupied(&mut new_state, position)?;
            new_state.set_active(Some(position));
            format!("Activated {position}")
        }
        Command::SetLabel { position, label } => {
            let details: String = format!(
                "Relabelled {position} as {}",
                label.as_deref().unwrap_or("unlabelled")
            );
            occupied(&mut new_state, position)?.set_label(label);
            details
        }
        Command::AddParameterInterval {
            position,
            parameter,
            interval,
        } => {
            editable(&mut new_state, position)?.add_parameter_interval(&parameter, interval);
            format!(
                "Set {parameter} to {} for {} at {position}",
                interval.value(),
                format_period(interval.start_date(), interval.end_date())
            )
        }
        Command::RemoveParameter {
            position,
            parameter,
        } => {
            editable(&mut new_state, position)?.remove_parameter(parameter.as_str())?;
            format!("Removed {parameter} from {position}")
        }
        Command::MarkCreated {
            position,
            policy_id,
        } => {
            occupied(&mut new_state, position)?.mark_created(&policy_id)?;
            format!("Marked {position} as created with id {policy_id}")
        }
        Command::ForkPolicy { position } => {
            let policy: &mut Policy = occupied(&mut new_state, position)?;
            let details: String = format!(
                "Forked {position} from {}",
                policy.id().unwrap_or("draft")
            );
            *policy = policy.forked();
            details
        }
        Command::ClearPosition { position } => {
            occupied(&mut new_state, position)?;
            *new_state.slot_mut(position) = None;
            if new_state.active() == Some(position) {
                let fallback: Option<Position> = Some(position.other())
                    .filter(|other| new_state.policy(*other).is_some());
                new_state.set_active(fallback);
            }
            format!("Cleared {position}")
        }
    };

    let record: EditRecord = EditRecord::new(
        Action::new(String::from(name), Some(details)),
        state.to_snapshot(),
        new_state.to_snapshot(),
    );
    debug!(
        action = name,
        after = %record.after.data,
        "Applied policy command"
    );

    Ok(TransitionResult { new_state, record })
}

fn occupied(state: &mut State, position: Position) -> Result<&mut Policy, CoreError> {
    state
        .slot_mut(position)
        .as_mut()
        .ok_or(CoreError::PositionEmpty(position))
}

fn editable(state: &mut State, position: Position) -> Result<&mut Policy, CoreError> {
    let policy: &mut Policy = occupied(state, position)?;
    if let Some(policy_id) = policy.id() {
        return Err(CoreError::PolicyLocked {
            position,
            policy_id: policy_id.to_string(),
        });
    }
    Ok(policy)
}
