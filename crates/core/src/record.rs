// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Represents the specific edit performed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    /// The name of the action (e.g., "`AddParameterInterval`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A compact textual summary of the editing state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// A string representation of the state.
    pub data: String,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(data: String) -> Self {
        Self { data }
    }
}

/// An immutable record of one state transition.
///
/// Every successful command produces exactly one record, capturing what
/// was done and the state summary before and after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRecord {
    /// What was done.
    pub action: Action,
    /// The state before the transition.
    pub before: StateSnapshot,
    /// The state after the transition.
    pub after: StateSnapshot,
}

impl EditRecord {
    /// Creates a new `EditRecord`.
    #[must_use]
    pub const fn new(action: Action, before: StateSnapshot, after: StateSnapshot) -> Self {
        Self {
            action,
            before,
            after,
        }
    }
}
