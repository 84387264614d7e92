/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

#![warn(missing_docs)]

//! Chapter 2, Exercise 12, evaluate the nine rooms agents.

use tracing_subscriber::EnvFilter;
use vacuum_cleaner::config::{AgentKind, EnvironmentKind, SimulationConfig};
use vacuum_cleaner::evaluation::{evaluate, Evaluation};
use vacuum_cleaner::VacuumError;

const DEFAULT_STEPS: usize = 200;
const DEFAULT_SEED: u64 = 42;

// Exercise 12:
//
// Implement a simple reflex agent for the vacuum environment in Exercise 2.10. Run the environment
// with this agent for all possible initial dirt configurations and agent locations. Record the
// performance score for each configuration and the overall average score.
//
// Here every agent that fits an environment is scored, and the score is the total cost, so lower
// is better.
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = run(&args) {
        eprintln!("error: {}", error);
        eprintln!("usage: nine-rooms-evaluate [STEPS] [SEED]");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), VacuumError> {
    if args.len() > 2 {
        return Err(VacuumError::InvalidArgument(format!(
            "expected at most 2 arguments, got {}",
            args.len()
        )));
    }
    let steps = parse_arg(args.first(), "steps", DEFAULT_STEPS)?;
    let seed = parse_arg(args.get(1), "seed", DEFAULT_SEED)?;

    println!(
        "{:<12}  {:<20}  {:>6}  {:>10}  {:>6}  {:>6}",
        "environment", "agent", "runs", "mean cost", "min", "max"
    );
    for environment in EnvironmentKind::ALL {
        for agent in AgentKind::ALL
            .into_iter()
            .filter(|agent| agent.supports(environment))
        {
            let base = SimulationConfig {
                environment,
                agent,
                steps,
                seed,
                ..SimulationConfig::default()
            };
            println!("{}", format_row(&evaluate(&base)?));
        }
    }
    Ok(())
}

fn parse_arg<T: std::str::FromStr>(
    arg: Option<&String>,
    name: &str,
    default: T,
) -> Result<T, VacuumError> {
    match arg {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| VacuumError::InvalidArgument(format!("{}: {:?}", name, value))),
    }
}

fn format_row(evaluation: &Evaluation) -> String {
    format!(
        "{:<12}  {:<20}  {:>6}  {:>10.2}  {:>6}  {:>6}",
        evaluation.environment.name(),
        evaluation.agent.name(),
        evaluation.runs,
        evaluation.mean_cost,
        evaluation.min_cost,
        evaluation.max_cost
    )
}
