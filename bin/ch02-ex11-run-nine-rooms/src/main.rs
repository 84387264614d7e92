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

//! Chapter 2, Exercise 11, run agents in the nine rooms world.

use tracing_subscriber::EnvFilter;
use vacuum_cleaner::config::{AgentKind, EnvironmentKind, SimulationConfig};
use vacuum_cleaner::nine_rooms::Action;
use vacuum_cleaner::runner::run_config;
use vacuum_cleaner::VacuumError;

const USAGE: &str = "usage: nine-rooms-run [CONFIG.json [--json]]";

// Chapter 2 Intelligent Agents Exercise 11, on a 3x3 floor of nine rooms.
//
// With no arguments every environment is run with each agent that fits it, 200 steps from room 0
// with every room dirty, and the traces are printed. With a config file only that simulation is
// run; `--json` prints the trace as JSON instead of a table.
fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(error) = run(&args) {
        eprintln!("error: {}", error);
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), VacuumError> {
    match args {
        [] => {
            for (title, config) in demonstrations() {
                println!("{}", title);
                println!("{}", run_config(&config)?);
                println!();
            }
            Ok(())
        }
        [path] => {
            let config = SimulationConfig::from_path(path)?;
            tracing::info!(%path, "loaded config");
            println!("{}", run_config(&config)?);
            Ok(())
        }
        [path, flag] if flag == "--json" => {
            let config = SimulationConfig::from_path(path)?;
            println!("{}", run_config(&config)?.to_json()?);
            Ok(())
        }
        _ => Err(VacuumError::InvalidArgument(USAGE.to_string())),
    }
}

fn demonstrations() -> Vec<(&'static str, SimulationConfig)> {
    let demo = |environment, agent| SimulationConfig {
        environment,
        agent,
        actions: Action::ALL.to_vec(),
        ..SimulationConfig::default()
    };
    vec![
        (
            "random agent, nine rooms",
            demo(EnvironmentKind::Sighted, AgentKind::Random),
        ),
        (
            "reflex agent, nine rooms",
            demo(EnvironmentKind::Sighted, AgentKind::Reflex),
        ),
        (
            "model-based reflex agent, nine rooms",
            demo(EnvironmentKind::Sighted, AgentKind::ModelReflex),
        ),
        (
            "random agent, blind nine rooms",
            demo(EnvironmentKind::Blind, AgentKind::Random),
        ),
        (
            "model-based reflex agent, blind nine rooms",
            demo(EnvironmentKind::Blind, AgentKind::ModelReflexBlind),
        ),
        (
            "random agent, stochastic nine rooms",
            demo(EnvironmentKind::Stochastic, AgentKind::Random),
        ),
        (
            "rational agent, stochastic nine rooms",
            demo(EnvironmentKind::Stochastic, AgentKind::Rational),
        ),
    ]
}
