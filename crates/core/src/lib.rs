// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Policy editing state for a baseline/reform report.
//!
//! All changes flow through [`apply`], a pure function from the current
//! [`State`] and a [`Command`] to a new state plus an [`EditRecord`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod record;
mod state;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use apply::apply;
pub use command::Command;
pub use error::CoreError;
pub use record::{Action, EditRecord, StateSnapshot};
pub use state::{Position, State, TransitionResult};

/// Applies a sequence of commands, stopping at the first failure.
///
/// Returns the final state and one edit record per command.
///
/// # Errors
///
/// Returns the first command's error; earlier successful commands are
/// discarded along with it.
pub fn apply_all(
    state: &State,
    commands: impl IntoIterator<Item = Command>,
) -> Result<(State, Vec<EditRecord>), CoreError> {
    let mut current: State = state.clone();
    let mut records: Vec<EditRecord> = Vec::new();

    for command in commands {
        let TransitionResult { new_state, record } = apply(&current, command)?;
        current = new_state;
        records.push(record);
    }

    Ok((current, records))
}
