// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use polsim::{Command, Position, State, apply};
use polsim_domain::CountryId;
use serde_json::{Value, json};

use crate::SetParameterIntervalRequest;

pub const CTC: &str = "gov.irs.credits.ctc.amount.base";

pub fn create_test_payload() -> Value {
    json!({
        "gov.irs.credits.ctc.amount.base": {
            "2025-01-01.2025-12-31": 3000,
            "2026-01-01.2100-12-31": 2500
        },
        "gov.irs.credits.ctc.refundable.fully_refundable": {
            "2025-01-01.2100-12-31": true
        }
    })
}

pub fn create_test_state() -> State {
    apply(
        &State::new(),
        Command::CreatePolicy {
            position: Position::Reform,
            country_id: CountryId::Us,
            label: Some(String::from("CTC expansion")),
        },
    )
    .unwrap()
    .new_state
}

pub fn create_test_request(start_date: &str, end_date: &str, value: &str) -> SetParameterIntervalRequest {
    SetParameterIntervalRequest {
        parameter: String::from(CTC),
        start_date: String::from(start_date),
        end_date: String::from(end_date),
        value: String::from(value),
    }
}
