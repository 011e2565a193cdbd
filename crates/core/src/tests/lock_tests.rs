// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{CTC, ctc, interval, state_with_draft};
use crate::{Command, CoreError, Position, State, TransitionResult, apply, apply_all};
use polsim_domain::{CountryId, DomainError, ParameterName, ParameterValue, Policy};
use time::macros::date;

fn created_state(position: Position, policy_id: &str) -> State {
    apply(
        &state_with_draft(position),
        Command::MarkCreated {
            position,
            policy_id: String::from(policy_id),
        },
    )
    .unwrap()
    .new_state
}

#[test]
fn test_mark_created_assigns_id() {
    let state: State = created_state(Position::Reform, "88");
    let policy: &Policy = state.policy(Position::Reform).unwrap();

    assert_eq!(policy.id(), Some("88"));
    assert!(policy.is_created());
    assert_eq!(
        state.to_snapshot().data,
        "baseline=empty,reform=us:88:parameters=0,active=reform"
    );
}

#[test]
fn test_created_policy_rejects_parameter_edits() {
    let state: State = created_state(Position::Reform, "88");
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::AddParameterInterval {
            position: Position::Reform,
            parameter: ctc(),
            interval: interval(date!(2025 - 01 - 01), date!(2025 - 12 - 31), 1.0),
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::PolicyLocked {
            position: Position::Reform,
            policy_id: String::from("88"),
        }
    );
}

#[test]
fn test_created_policy_rejects_parameter_removal() {
    let state: State = created_state(Position::Baseline, "7");
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::RemoveParameter {
            position: Position::Baseline,
            parameter: ctc(),
        },
    );
    assert!(matches!(
        result.unwrap_err(),
        CoreError::PolicyLocked { .. }
    ));
}

#[test]
fn test_created_policy_label_remains_editable() {
    let state: State = created_state(Position::Reform, "88");
    let transition: TransitionResult = apply(
        &state,
        Command::SetLabel {
            position: Position::Reform,
            label: None,
        },
    )
    .unwrap();

    let policy: &Policy = transition.new_state.policy(Position::Reform).unwrap();
    assert_eq!(policy.label(), None);
    assert_eq!(policy.id(), Some("88"));
}

#[test]
fn test_mark_created_twice_is_domain_violation() {
    let state: State = created_state(Position::Reform, "88");
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::MarkCreated {
            position: Position::Reform,
            policy_id: String::from("89"),
        },
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::PolicyAlreadyCreated {
            id: String::from("88")
        })
    );
}

#[test]
fn test_mark_created_with_blank_id_fails() {
    let state: State = state_with_draft(Position::Reform);
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::MarkCreated {
            position: Position::Reform,
            policy_id: String::from("   "),
        },
    );
    assert!(matches!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidPolicyId(_))
    ));
}

#[test]
fn test_new_draft_replaces_created_policy() {
    let state: State = created_state(Position::Reform, "88");
    let state: State = apply(&state, crate::tests::helpers::create_command(Position::Reform))
        .unwrap()
        .new_state;

    assert_eq!(state.policy(Position::Reform).unwrap().id(), None);
}

#[test]
fn test_locked_error_display() {
    let error: CoreError = CoreError::PolicyLocked {
        position: Position::Reform,
        policy_id: String::from("88"),
    };
    assert_eq!(
        error.to_string(),
        "The reform policy has been created as '88' and cannot be edited; fork it to make changes"
    );
}

#[test]
fn test_fork_keeps_overrides_of_created_policy() {
    let mut original: Policy = Policy::draft(CountryId::Us, Some(String::from("Expansion")));
    original.add_parameter_interval(
        &ctc(),
        interval(date!(2025 - 01 - 01), date!(2025 - 12 - 31), 3600.0),
    );
    original.mark_created("123").unwrap();

    let (state, _) = apply_all(&State::new(), Command::replay(Position::Reform, &original)).unwrap();
    let (state, records) = apply_all(
        &state,
        [
            Command::ForkPolicy {
                position: Position::Reform,
            },
            Command::AddParameterInterval {
                position: Position::Reform,
                parameter: ParameterName::new("gov.irs.credits.eitc.phase_out.start").unwrap(),
                interval: interval(date!(2025 - 01 - 01), date!(2025 - 12 - 31), 9800.0),
            },
        ],
    )
    .unwrap();

    assert_eq!(records[0].action.name, "ForkPolicy");
    assert_eq!(
        records[0].action.details.as_deref(),
        Some("Forked reform from 123")
    );
    assert_eq!(
        records[0].after.data,
        "baseline=empty,reform=us:draft:parameters=1,active=reform"
    );

    let policy: &Policy = state.policy(Position::Reform).unwrap();
    assert_eq!(policy.id(), None);
    assert!(!policy.is_created());
    assert_eq!(policy.label(), Some("Expansion"));
    assert_eq!(policy.parameters().len(), 2);
    assert_eq!(
        policy.parameter(CTC).unwrap().values().value_at(date!(2025 - 06 - 01)),
        Some(ParameterValue::Number(3600.0))
    );
}

#[test]
fn test_forked_policy_can_be_created_again() {
    let state: State = created_state(Position::Baseline, "7");
    let (state, _) = apply_all(
        &state,
        [
            Command::ForkPolicy {
                position: Position::Baseline,
            },
            Command::MarkCreated {
                position: Position::Baseline,
                policy_id: String::from("8"),
            },
        ],
    )
    .unwrap();
    assert_eq!(state.policy(Position::Baseline).unwrap().id(), Some("8"));
}

#[test]
fn test_fork_of_draft_is_unchanged_copy() {
    let state: State = state_with_draft(Position::Reform);
    let transition: TransitionResult = apply(
        &state,
        Command::ForkPolicy {
            position: Position::Reform,
        },
    )
    .unwrap();
    assert_eq!(transition.new_state, state);
    assert_eq!(
        transition.record.action.details.as_deref(),
        Some("Forked reform from draft")
    );
}

#[test]
fn test_fork_empty_position_fails() {
    assert_eq!(
        apply(
            &State::new(),
            Command::ForkPolicy {
                position: Position::Reform
            }
        )
        .unwrap_err(),
        CoreError::PositionEmpty(Position::Reform)
    );
}
