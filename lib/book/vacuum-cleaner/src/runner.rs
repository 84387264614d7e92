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

use std::fmt::{Display, Formatter};

use crate::agents::{
    ModelReflexAgent, ModelReflexBlindAgent, RandomAgent, RationalStochasticAgent, ReflexAgent,
};
use crate::config::{AgentKind, EnvironmentKind, SimulationConfig};
use crate::nine_rooms::{
    Action, Cost, NineRooms, NineRoomsBlind, NineRoomsLocalPercept, NineRoomsPositionPercept,
    NineRoomsState,
};
use crate::random::seeded;
use crate::stochastic::NineRoomsStochastic;
use crate::{Agent, Environment, Simulation, SimulationTrace, VacuumError};

pub type NineRoomsTrace<_Percept> = SimulationTrace<NineRoomsState, _Percept, Action, Cost>;

/// Trace of a configured run. Sighted and blind robots perceive different things, so their traces
/// have different types.
#[derive(Debug, Clone, PartialEq)]
pub enum RunTrace {
    Local(NineRoomsTrace<NineRoomsLocalPercept>),
    Position(NineRoomsTrace<NineRoomsPositionPercept>),
}

impl RunTrace {
    pub fn total_cost(&self) -> Cost {
        match self {
            RunTrace::Local(trace) => trace.total_cost,
            RunTrace::Position(trace) => trace.total_cost,
        }
    }

    pub fn final_state(&self) -> NineRoomsState {
        match self {
            RunTrace::Local(trace) => final_state(trace),
            RunTrace::Position(trace) => final_state(trace),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            RunTrace::Local(trace) => trace.to_json(),
            RunTrace::Position(trace) => trace.to_json(),
        }
    }
}

fn final_state<_Percept>(trace: &NineRoomsTrace<_Percept>) -> NineRoomsState {
    trace
        .steps
        .last()
        .map_or(trace.initial_state, |step| step.next_state)
}

impl Display for RunTrace {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RunTrace::Local(trace) => Display::fmt(trace, f),
            RunTrace::Position(trace) => Display::fmt(trace, f),
        }
    }
}

/// Run the simulation a config describes.
///
/// The environment and the agent draw from separate generators, both derived from the config's
/// seed, so the same config always produces the same trace.
pub fn run_config(config: &SimulationConfig) -> Result<RunTrace, VacuumError> {
    config.validate()?;
    tracing::debug!(
        environment = ?config.environment,
        agent = ?config.agent,
        steps = config.steps,
        seed = config.seed,
        "running simulation"
    );

    match config.environment {
        EnvironmentKind::Sighted => run_sighted(NineRooms, config).map(RunTrace::Local),
        EnvironmentKind::Stochastic => {
            run_sighted(NineRoomsStochastic, config).map(RunTrace::Local)
        }
        EnvironmentKind::Blind => run_blind(config).map(RunTrace::Position),
    }
}

fn run_sighted<_Environment>(
    environment: _Environment,
    config: &SimulationConfig,
) -> Result<NineRoomsTrace<NineRoomsLocalPercept>, VacuumError>
where
    _Environment: Environment<
        State = NineRoomsState,
        Action = Action,
        Percept = NineRoomsLocalPercept,
        Cost = Cost,
    >,
{
    let agent_rng = seeded(config.seed);
    let trace = match config.agent {
        AgentKind::Random => simulate(
            environment,
            RandomAgent::new(config.actions.clone(), agent_rng),
            config,
        ),
        AgentKind::Reflex => simulate(environment, ReflexAgent::new(agent_rng), config),
        AgentKind::ModelReflex => simulate(environment, ModelReflexAgent::new(agent_rng), config),
        AgentKind::Rational => simulate(
            environment,
            RationalStochasticAgent::new(agent_rng),
            config,
        ),
        AgentKind::ModelReflexBlind => {
            return Err(VacuumError::IncompatibleAgent {
                agent: config.agent,
                environment: config.environment,
            })
        }
    };
    Ok(trace)
}

fn run_blind(
    config: &SimulationConfig,
) -> Result<NineRoomsTrace<NineRoomsPositionPercept>, VacuumError> {
    let agent_rng = seeded(config.seed);
    match config.agent {
        AgentKind::Random => Ok(simulate(
            NineRoomsBlind,
            RandomAgent::new(config.actions.clone(), agent_rng),
            config,
        )),
        AgentKind::ModelReflexBlind => Ok(simulate(
            NineRoomsBlind,
            ModelReflexBlindAgent::new(agent_rng),
            config,
        )),
        AgentKind::Reflex | AgentKind::ModelReflex | AgentKind::Rational => {
            Err(VacuumError::IncompatibleAgent {
                agent: config.agent,
                environment: config.environment,
            })
        }
    }
}

fn simulate<_Environment, _Agent>(
    environment: _Environment,
    agent: _Agent,
    config: &SimulationConfig,
) -> NineRoomsTrace<_Environment::Percept>
where
    _Environment: Environment<State = NineRoomsState, Action = Action, Cost = Cost>,
    _Agent: Agent<Action = Action, Percept = _Environment::Percept>,
{
    let environment_rng = seeded(config.seed.wrapping_add(1));
    let mut simulation = Simulation::new(
        environment,
        agent,
        config.initial_state,
        config.steps,
        environment_rng,
    );
    simulation.run()
}
