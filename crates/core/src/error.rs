// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Position;
use polsim_domain::DomainError;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The command targets a position that holds no policy.
    PositionEmpty(Position),
    /// The policy has a server identifier and can no longer be edited.
    PolicyLocked {
        /// The position holding the policy.
        position: Position,
        /// The server identifier of the locked policy.
        policy_id: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PositionEmpty(position) => {
                write!(f, "No policy has been created at the {position} position")
            }
            Self::PolicyLocked {
                position,
                policy_id,
            } => {
                write!(
                    f,
                    "The {position} policy has been created as '{policy_id}' and cannot be edited; fork it to make changes"
                )
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
