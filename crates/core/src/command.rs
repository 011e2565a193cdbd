// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Position;
use polsim_domain::{CountryId, ParameterName, Policy, ValueInterval};

/// A command represents user intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Start a new draft policy, replacing whatever held the position.
    CreatePolicy {
        /// The slot to fill.
        position: Position,
        /// The country the policy applies to.
        country_id: CountryId,
        /// Optional human-readable label.
        label: Option<String>,
    },
    /// Make a position the one being edited.
    SetActive {
        /// The slot to activate.
        position: Position,
    },
    /// Replace a policy's label.
    SetLabel {
        /// The slot holding the policy.
        position: Position,
        /// The new label; `None` clears it.
        label: Option<String>,
    },
    /// Override a parameter's value over a date range.
    AddParameterInterval {
        /// The slot holding the policy.
        position: Position,
        /// The parameter to override.
        parameter: ParameterName,
        /// The new value and the range it applies to.
        interval: ValueInterval,
    },
    /// Drop a parameter override entirely.
    RemoveParameter {
        /// The slot holding the policy.
        position: Position,
        /// The parameter to drop.
        parameter: ParameterName,
    },
    /// Record the identifier the server assigned to a submitted policy.
    MarkCreated {
        /// The slot holding the policy.
        position: Position,
        /// The server-assigned identifier.
        policy_id: String,
    },
    /// Replace a created policy with an editable copy of itself.
    ForkPolicy {
        /// The slot holding the policy.
        position: Position,
    },
    /// Empty a position.
    ClearPosition {
        /// The slot to empty.
        position: Position,
    },
}

impl Command {
    /// Returns the command's name as recorded in edit records.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::CreatePolicy { .. } => "CreatePolicy",
            Self::SetActive { .. } => "SetActive",
            Self::SetLabel { .. } => "SetLabel",
            Self::AddParameterInterval { .. } => "AddParameterInterval",
            Self::RemoveParameter { .. } => "RemoveParameter",
            Self::MarkCreated { .. } => "MarkCreated",
            Self::ForkPolicy { .. } => "ForkPolicy",
            Self::ClearPosition { .. } => "ClearPosition",
        }
    }

    /// Returns the position the command targets.
    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::CreatePolicy { position, .. }
            | Self::SetActive { position }
            | Self::SetLabel { position, .. }
            | Self::AddParameterInterval { position, .. }
            | Self::RemoveParameter { position, .. }
            | Self::MarkCreated { position, .. }
            | Self::ForkPolicy { position }
            | Self::ClearPosition { position } => *position,
        }
    }

    /// Returns the commands that rebuild `policy` at `position` from nothing.
    ///
    /// Replaying them through [`apply_all`](crate::apply_all) on an empty
    /// state yields a state holding an equal policy.
    #[must_use]
    pub fn replay(position: Position, policy: &Policy) -> Vec<Self> {
        let mut commands: Vec<Self> = vec![Self::CreatePolicy {
            position,
            country_id: policy.country_id(),
            label: policy.label().map(String::from),
        }];

        for parameter in policy.parameters() {
            commands.extend(parameter.values().iter().map(|interval| {
                Self::AddParameterInterval {
                    position,
                    parameter: parameter.name().clone(),
                    interval: *interval,
                }
            }));
        }

        if let Some(policy_id) = policy.id() {
            commands.push(Self::MarkCreated {
                position,
                policy_id: policy_id.to_string(),
            });
        }

        commands
    }
}
