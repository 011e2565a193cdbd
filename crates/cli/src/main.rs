// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod actions;

use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::Context};
use polsim::{Position, State};
use polsim_api::{SetParameterIntervalRequest, parse_policy_document};
use polsim_domain::{CountryId, Policy};
use std::path::{Path, PathBuf};
use tracing::info;

/// polsim - inspect and edit policy reform payloads
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Country the policy applies to.
    #[arg(short, long, default_value = "us", global = true)]
    country: CountryId,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print each parameter override and the periods it covers
    Show {
        /// Policy payload JSON file.
        file: PathBuf,
        /// Print the summary as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Validate a policy payload, exiting non-zero on the first error
    Check {
        /// Policy payload JSON file.
        file: PathBuf,
    },

    /// Override one parameter over a date range and write the result
    Set {
        /// Policy payload JSON file.
        file: PathBuf,
        /// Dotted parameter path.
        #[arg(short, long)]
        parameter: String,
        /// First day of the range (YYYY-MM-DD).
        #[arg(short, long)]
        start: String,
        /// Last day of the range (YYYY-MM-DD).
        #[arg(short, long, default_value = "2100-12-31")]
        end: String,
        /// New value: `true`, `false` or a number.
        #[arg(short, long, allow_hyphen_values = true)]
        value: String,
        /// Where to write the updated payload; stdout if omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    args.run()
}

impl Args {
    fn run(self) -> Result<()> {
        match self.command {
            Command::Show { file, json } => {
                let policy: Policy = load_policy(&file, self.country)?;
                println!("{}", actions::show(&policy, json)?);
            }
            Command::Check { file } => {
                let policy: Policy = load_policy(&file, self.country)?;
                println!("{}: {}", file.display(), actions::check(&policy));
            }
            Command::Set {
                file,
                parameter,
                start,
                end,
                value,
                output,
            } => {
                let policy: Policy = load_policy(&file, self.country)?;
                let state: State = actions::load_state(Position::Reform, &policy)?;
                let request = SetParameterIntervalRequest {
                    parameter,
                    start_date: start,
                    end_date: end,
                    value,
                };
                let updated: Policy = actions::set(&state, Position::Reform, &request)?;
                let payload: String = actions::render_payload(&updated)?;

                match output {
                    Some(path) => {
                        std::fs::write(&path, payload + "\n")
                            .wrap_err_with(|| format!("writing {}", path.display()))?;
                        info!("Wrote updated policy to {}", path.display());
                    }
                    None => println!("{payload}"),
                }
            }
        }
        Ok(())
    }
}

fn load_policy(path: &Path, country_id: CountryId) -> Result<Policy> {
    let document: String = std::fs::read_to_string(path)
        .wrap_err_with(|| format!("reading {}", path.display()))?;
    let label: Option<String> = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned());
    parse_policy_document(country_id, label, &document)
        .wrap_err_with(|| format!("parsing {}", path.display()))
}
