// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::record::{EditRecord, StateSnapshot};
use polsim_domain::{Policy, ValueIntervalCollection};

/// One of the two policy slots a report compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The policy the report measures against.
    Baseline,
    /// The policy whose impact the report measures.
    Reform,
}

impl Position {
    /// Both positions, in slot order.
    pub const ALL: [Self; 2] = [Self::Baseline, Self::Reform];

    /// Returns the slot index.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Baseline => 0,
            Self::Reform => 1,
        }
    }

    /// Returns the other position.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Baseline => Self::Reform,
            Self::Reform => Self::Baseline,
        }
    }

    /// Converts this position to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Reform => "reform",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete policy editing state.
///
/// Holds at most one policy per [`Position`] and remembers which one is
/// being edited. State is only changed through [`apply`](crate::apply).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    /// Policies indexed by [`Position::index`].
    policies: [Option<Policy>; 2],
    /// The position currently being edited.
    active: Option<Position>,
}

impl State {
    /// Creates a new empty state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policies: [None, None],
            active: None,
        }
    }

    /// Returns the policy at `position`, if any.
    #[must_use]
    pub fn policy(&self, position: Position) -> Option<&Policy> {
        self.policies[position.index()].as_ref()
    }

    /// Returns the position currently being edited.
    #[must_use]
    pub const fn active(&self) -> Option<Position> {
        self.active
    }

    /// Returns the policy currently being edited.
    #[must_use]
    pub fn active_policy(&self) -> Option<&Policy> {
        self.active.and_then(|position| self.policy(position))
    }

    /// Returns a parameter's effective value over time at `position`.
    ///
    /// `current_law` is the parameter's baseline schedule from metadata;
    /// the position's overrides, if any, are laid on top of it. An empty
    /// position yields current law unchanged.
    #[must_use]
    pub fn effective_values(
        &self,
        position: Position,
        parameter: &str,
        current_law: &ValueIntervalCollection,
    ) -> ValueIntervalCollection {
        self.policy(position)
            .and_then(|policy| policy.parameter(parameter))
            .map_or_else(
                || current_law.clone(),
                |overrides| current_law.overlaid_with(overrides.values()),
            )
    }

    pub(crate) fn slot_mut(&mut self, position: Position) -> &mut Option<Policy> {
        &mut self.policies[position.index()]
    }

    pub(crate) const fn set_active(&mut self, active: Option<Position>) {
        self.active = active;
    }

    /// Converts the state to a snapshot for edit records.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let describe = |position: Position| -> String {
            self.policy(position).map_or_else(
                || String::from("empty"),
                |policy| {
                    format!(
                        "{}:{}:parameters={}",
                        policy.country_id(),
                        policy.id().unwrap_or("draft"),
                        policy.parameters().len()
                    )
                },
            )
        };

        let slots: Vec<String> = Position::ALL
            .iter()
            .map(|position| format!("{position}={}", describe(*position)))
            .collect();

        StateSnapshot::new(format!(
            "{},active={}",
            slots.join(","),
            self.active.map_or("none", |position| position.as_str())
        ))
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// The record describing this transition.
    pub record: EditRecord,
}
