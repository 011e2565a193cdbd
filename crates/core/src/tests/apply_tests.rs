// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{CTC, create_command, ctc, interval, state_with_draft};
use crate::{Command, CoreError, Position, State, TransitionResult, apply, apply_all};
use polsim_domain::{CountryId, DomainError, ParameterName, ParameterValue, Policy};
use time::macros::date;

#[test]
fn test_create_policy_fills_position_and_activates_it() {
    let state: State = State::new();
    let result: Result<TransitionResult, CoreError> =
        apply(&state, create_command(Position::Reform));

    assert!(result.is_ok());
    let transition: TransitionResult = result.unwrap();
    let policy: &Policy = transition.new_state.policy(Position::Reform).unwrap();
    assert_eq!(policy.label(), Some("Test policy"));
    assert!(policy.is_current_law());
    assert_eq!(transition.new_state.active(), Some(Position::Reform));
    assert!(transition.new_state.policy(Position::Baseline).is_none());
}

#[test]
fn test_apply_does_not_modify_input_state() {
    let state: State = State::new();
    let _ = apply(&state, create_command(Position::Baseline)).unwrap();
    assert_eq!(state, State::new());
}

#[test]
fn test_create_policy_replaces_existing_policy() {
    let state: State = state_with_draft(Position::Reform);
    let state: State = apply(
        &state,
        Command::AddParameterInterval {
            position: Position::Reform,
            parameter: ctc(),
            interval: interval(date!(2025 - 01 - 01), date!(2025 - 12 - 31), 3500.0),
        },
    )
    .unwrap()
    .new_state;

    let transition: TransitionResult = apply(
        &state,
        Command::CreatePolicy {
            position: Position::Reform,
            country_id: CountryId::Uk,
            label: None,
        },
    )
    .unwrap();

    let policy: &Policy = transition.new_state.policy(Position::Reform).unwrap();
    assert_eq!(policy.country_id(), CountryId::Uk);
    assert!(policy.is_current_law());
}

#[test]
fn test_edit_record_captures_before_and_after() {
    let transition: TransitionResult =
        apply(&State::new(), create_command(Position::Baseline)).unwrap();

    assert_eq!(transition.record.action.name, "CreatePolicy");
    assert_eq!(
        transition.record.before.data,
        "baseline=empty,reform=empty,active=none"
    );
    assert_eq!(
        transition.record.after.data,
        "baseline=us:draft:parameters=0,reform=empty,active=baseline"
    );
    assert!(
        transition
            .record
            .action
            .details
            .as_ref()
            .unwrap()
            .contains("Test policy")
    );
}

#[test]
fn test_add_parameter_interval_overrides_range() {
    let state: State = state_with_draft(Position::Reform);
    let (state, records) = apply_all(
        &state,
        [
            Command::AddParameterInterval {
                position: Position::Reform,
                parameter: ctc(),
                interval: interval(date!(2024 - 01 - 01), date!(2024 - 12 - 31), 2000.0),
            },
            Command::AddParameterInterval {
                position: Position::Reform,
                parameter: ctc(),
                interval: interval(date!(2024 - 06 - 01), date!(2024 - 08 - 31), 3000.0),
            },
        ],
    )
    .unwrap();

    assert_eq!(records.len(), 2);
    let policy: &Policy = state.policy(Position::Reform).unwrap();
    let values = policy.parameter(CTC).unwrap().values();
    assert_eq!(values.len(), 3);
    assert_eq!(
        values.value_at(date!(2024 - 07 - 01)),
        Some(ParameterValue::Number(3000.0))
    );
    assert_eq!(
        records[1].action.details.as_deref(),
        Some(
            "Set gov.irs.credits.ctc.amount.base to 3000 for Jun 1, 2024 - Aug 31, 2024 at reform"
        )
    );
}

#[test]
fn test_add_parameter_interval_on_empty_position_fails() {
    let result: Result<TransitionResult, CoreError> = apply(
        &State::new(),
        Command::AddParameterInterval {
            position: Position::Baseline,
            parameter: ctc(),
            interval: interval(date!(2024 - 01 - 01), date!(2024 - 12 - 31), 1.0),
        },
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::PositionEmpty(Position::Baseline)
    );
}

#[test]
fn test_remove_missing_parameter_is_domain_violation() {
    let state: State = state_with_draft(Position::Reform);
    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::RemoveParameter {
            position: Position::Reform,
            parameter: ParameterName::new("gov.unknown").unwrap(),
        },
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::ParameterNotFound(String::from(
            "gov.unknown"
        )))
    );
}

#[test]
fn test_remove_parameter_restores_current_law() {
    let state: State = state_with_draft(Position::Reform);
    let (state, _) = apply_all(
        &state,
        [
            Command::AddParameterInterval {
                position: Position::Reform,
                parameter: ctc(),
                interval: interval(date!(2024 - 01 - 01), date!(2024 - 12 - 31), 2000.0),
            },
            Command::RemoveParameter {
                position: Position::Reform,
                parameter: ctc(),
            },
        ],
    )
    .unwrap();

    assert!(state.policy(Position::Reform).unwrap().is_current_law());
}

#[test]
fn test_set_label() {
    let state: State = state_with_draft(Position::Baseline);
    let transition: TransitionResult = apply(
        &state,
        Command::SetLabel {
            position: Position::Baseline,
            label: Some(String::from("Renamed")),
        },
    )
    .unwrap();
    assert_eq!(
        transition
            .new_state
            .policy(Position::Baseline)
            .unwrap()
            .label(),
        Some("Renamed")
    );
}

#[test]
fn test_set_active_requires_policy() {
    let state: State = state_with_draft(Position::Baseline);
    assert_eq!(
        apply(
            &state,
            Command::SetActive {
                position: Position::Reform
            }
        )
        .unwrap_err(),
        CoreError::PositionEmpty(Position::Reform)
    );

    let state: State = apply(&state, create_command(Position::Reform))
        .unwrap()
        .new_state;
    let state: State = apply(
        &state,
        Command::SetActive {
            position: Position::Baseline,
        },
    )
    .unwrap()
    .new_state;
    assert_eq!(state.active(), Some(Position::Baseline));
    assert_eq!(
        state.active_policy(),
        state.policy(Position::Baseline)
    );
}

#[test]
fn test_clear_active_position_falls_back_to_other() {
    let (state, _) = apply_all(
        &State::new(),
        [
            create_command(Position::Baseline),
            create_command(Position::Reform),
            Command::ClearPosition {
                position: Position::Reform,
            },
        ],
    )
    .unwrap();

    assert!(state.policy(Position::Reform).is_none());
    assert_eq!(state.active(), Some(Position::Baseline));
}

#[test]
fn test_clear_last_position_leaves_nothing_active() {
    let state: State = state_with_draft(Position::Reform);
    let state: State = apply(
        &state,
        Command::ClearPosition {
            position: Position::Reform,
        },
    )
    .unwrap()
    .new_state;

    assert_eq!(state, State::new());
}

#[test]
fn test_clear_empty_position_fails() {
    assert_eq!(
        apply(
            &State::new(),
            Command::ClearPosition {
                position: Position::Baseline
            }
        )
        .unwrap_err(),
        CoreError::PositionEmpty(Position::Baseline)
    );
}

#[test]
fn test_apply_all_stops_at_first_error() {
    let result = apply_all(
        &State::new(),
        [
            create_command(Position::Baseline),
            Command::SetActive {
                position: Position::Reform,
            },
            create_command(Position::Reform),
        ],
    );
    assert_eq!(
        result.unwrap_err(),
        CoreError::PositionEmpty(Position::Reform)
    );
}

#[test]
fn test_command_names_and_positions() {
    let command: Command = Command::MarkCreated {
        position: Position::Reform,
        policy_id: String::from("1"),
    };
    assert_eq!(command.name(), "MarkCreated");
    assert_eq!(command.position(), Position::Reform);
}

#[test]
fn test_core_error_display() {
    assert_eq!(
        CoreError::PositionEmpty(Position::Reform).to_string(),
        "No policy has been created at the reform position"
    );
    assert_eq!(
        CoreError::from(DomainError::InvalidCountry(String::from("fr"))).to_string(),
        "Domain violation: Unsupported country 'fr'"
    );
}

#[test]
fn test_replay_rebuilds_policy() {
    let (state, _) = apply_all(
        &State::new(),
        [
            create_command(Position::Baseline),
            Command::AddParameterInterval {
                position: Position::Baseline,
                parameter: ctc(),
                interval: interval(date!(2024 - 01 - 01), date!(2024 - 12 - 31), 2000.0),
            },
            Command::AddParameterInterval {
                position: Position::Baseline,
                parameter: ParameterName::new("gov.irs.credits.eitc.phase_out.start").unwrap(),
                interval: interval(date!(2025 - 01 - 01), date!(2025 - 06 - 30), 9800.0),
            },
            Command::MarkCreated {
                position: Position::Baseline,
                policy_id: String::from("501"),
            },
        ],
    )
    .unwrap();
    let original: &Policy = state.policy(Position::Baseline).unwrap();

    let commands: Vec<Command> = Command::replay(Position::Reform, original);
    assert_eq!(commands.len(), 4);
    assert!(commands.iter().all(|c| c.position() == Position::Reform));

    let (replayed, _) = apply_all(&State::new(), commands).unwrap();
    assert_eq!(replayed.policy(Position::Reform), Some(original));
}
