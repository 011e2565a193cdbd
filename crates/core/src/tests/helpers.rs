// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, Position, State, apply};
use polsim_domain::{CountryId, ParameterName, ValueInterval};
use time::Date;

pub const CTC: &str = "gov.irs.credits.ctc.amount.base";

pub fn ctc() -> ParameterName {
    ParameterName::new(CTC).unwrap()
}

pub fn interval(start: Date, end: Date, value: f64) -> ValueInterval {
    ValueInterval::new(start, end, value).unwrap()
}

pub fn create_command(position: Position) -> Command {
    Command::CreatePolicy {
        position,
        country_id: CountryId::Us,
        label: Some(String::from("Test policy")),
    }
}

/// A state with a draft policy at `position`.
pub fn state_with_draft(position: Position) -> State {
    apply(&State::new(), create_command(position))
        .unwrap()
        .new_state
}
