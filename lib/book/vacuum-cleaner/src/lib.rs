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

// PEAS - Performance, Environment, Action, Sensing
//
// See:
// -  Chapter 2: Intelligent Agents, page 40

use std::fmt::Debug;

use num_traits::Zero;

pub mod agents;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod grid;
pub mod nine_rooms;
pub mod random;
pub mod runner;
pub mod stochastic;
pub mod trace;

pub use error::VacuumError;
pub use random::{RandomSource, Rng};
pub use trace::{SimulationTrace, Step};

/// An Agent acts in a Performance, Environment, Action, Sensing (PEAS) cycle.
/// For a given Perception, the Agent will return an Action.
///
/// Model-based agents keep their belief about the world inside the implementation and update it
/// on every call. Reflex agents do not need to store any state.
///
/// Notice that the Agent is not aware of an Environment, it's only interface
/// is the Perception coming in then the Action going out.
pub trait Agent {
    type Action;
    type Percept;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action;
}

/// An Environment describes the world a single Agent lives in, in a Performance, Environment,
/// Action, Sensing (PEAS) cycle.
///
/// The Environment does not hold the world state. It is a set of rules over a state the caller
/// owns: `transition` takes a state and returns a new one together with the cost of the step,
/// leaving the input untouched. Stochastic environments draw from the random source passed in.
///
/// Notice that the Environment is not aware of an Agent.
pub trait Environment {
    type State: Clone + Debug;
    type Action: Copy + Debug;
    type Percept: Debug;
    type Cost: num_traits::NumAssign + Copy + Debug;

    fn is_legal_action(&self, state: &Self::State, action: &Self::Action) -> bool;

    fn percept(&self, state: &Self::State) -> Self::Percept;

    fn transition<R: RandomSource + ?Sized>(
        &self,
        state: &Self::State,
        action: &Self::Action,
        rng: &mut R,
    ) -> (Self::State, Self::Cost);
}

/// A Simulation runs a single Agent in multiple Performance, Environment, Action, Sensing (PEAS)
/// cycles. The accumulated cost is kept up to date and every step is recorded.
///
/// The Simulation is aware of both the Environment and the single Agent. Notice that the Agent's
/// generic Action and Percept come from the Environment. The Agent still does not need to know that
/// the Environment exists, but the Agent definitely needs the Environment's Action and Percept
/// types.
pub struct Simulation<_Environment, _Agent, _Rng>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
    _Rng: RandomSource,
{
    environment: _Environment,
    agent: _Agent,
    rng: _Rng,
    state: _Environment::State,
    time_steps: usize,
    cost: _Environment::Cost,
}

impl<_Environment, _Agent, _Rng> Simulation<_Environment, _Agent, _Rng>
where
    _Environment: Environment,
    _Agent: Agent<Action = _Environment::Action, Percept = _Environment::Percept>,
    _Rng: RandomSource,
{
    pub fn new(
        environment: _Environment,
        agent: _Agent,
        initial_state: _Environment::State,
        time_steps: usize,
        rng: _Rng,
    ) -> Self {
        Self {
            environment,
            agent,
            rng,
            state: initial_state,
            time_steps,
            cost: _Environment::Cost::zero(),
        }
    }

    pub fn run(
        &mut self,
    ) -> SimulationTrace<
        _Environment::State,
        _Environment::Percept,
        _Environment::Action,
        _Environment::Cost,
    > {
        let initial_state = self.state.clone();
        let mut steps = Vec::with_capacity(self.time_steps);
        for step in 0..self.time_steps {
            let percept = self.environment.percept(&self.state);
            let action = self.agent.act(&percept);
            assert!(
                self.environment.is_legal_action(&self.state, &action),
                "agent chose illegal action {:?} in state {:?}",
                action,
                self.state
            );
            let (next_state, cost) =
                self.environment
                    .transition(&self.state, &action, &mut self.rng);
            self.cost += cost;
            tracing::trace!(step, ?percept, ?action, ?cost, "simulation step");

            steps.push(Step {
                state: std::mem::replace(&mut self.state, next_state.clone()),
                percept,
                action,
                cost,
                next_state,
            });
        }
        tracing::debug!(steps = self.time_steps, cost = ?self.cost, "simulation finished");

        SimulationTrace {
            initial_state,
            steps,
            total_cost: self.cost,
        }
    }

    /// The state the next step would start from.
    pub fn state(&self) -> &_Environment::State {
        &self.state
    }

    /// Cost accumulated over every step run so far.
    pub fn cost(&self) -> _Environment::Cost {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{ModelReflexAgent, RandomAgent};
    use crate::nine_rooms::{Action, Cleanliness, NineRooms, NineRoomsState};
    use crate::random::seeded;

    #[test]
    fn test_noop_only_agent_costs_one_per_step_while_dirty() {
        let agent = RandomAgent::new(vec![Action::NoOp], seeded(1));
        let mut simulation = Simulation::new(
            NineRooms,
            agent,
            NineRoomsState::all_dirty(),
            5,
            seeded(2),
        );
        let trace = simulation.run();
        assert_eq!(trace.total_cost, 5);
        assert_eq!(simulation.cost(), 5);
        assert_eq!(simulation.state(), &NineRoomsState::all_dirty());
        assert!(trace.steps.iter().all(|s| s.action == Action::NoOp));
    }

    #[test]
    fn test_trace_is_chained_and_costs_add_up() {
        let agent = ModelReflexAgent::new(seeded(7));
        let mut simulation = Simulation::new(
            NineRooms,
            agent,
            NineRoomsState::all_dirty(),
            50,
            seeded(8),
        );
        let trace = simulation.run();

        assert_eq!(trace.steps.len(), 50);
        assert_eq!(trace.steps[0].state, trace.initial_state);
        for pair in trace.steps.windows(2) {
            assert_eq!(pair[0].next_state, pair[1].state);
        }
        let summed: u32 = trace.steps.iter().map(|s| s.cost).sum();
        assert_eq!(summed, trace.total_cost);
        assert_eq!(
            trace.steps.last().map(|s| s.next_state),
            Some(*simulation.state())
        );
    }

    #[test]
    fn test_model_reflex_agent_eventually_cleans_everything_and_rests() {
        let agent = ModelReflexAgent::new(seeded(42));
        let mut simulation = Simulation::new(
            NineRooms,
            agent,
            NineRoomsState::all_dirty(),
            2000,
            seeded(43),
        );
        let trace = simulation.run();

        let final_state = simulation.state();
        assert!(final_state
            .rooms()
            .iter()
            .all(|room| *room == Cleanliness::Clean));
        let last = trace.steps.last().expect("trace is not empty");
        assert_eq!(last.action, Action::NoOp);
        assert_eq!(last.cost, 0);
    }

    #[test]
    fn test_zero_time_steps_leaves_state_alone() {
        let agent = ModelReflexAgent::new(seeded(3));
        let mut simulation =
            Simulation::new(NineRooms, agent, NineRoomsState::all_dirty(), 0, seeded(4));
        let trace = simulation.run();
        assert!(trace.steps.is_empty());
        assert_eq!(trace.total_cost, 0);
        assert_eq!(simulation.state(), &NineRoomsState::all_dirty());
    }
}
