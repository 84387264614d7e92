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

use num_traits::NumAssign;
use serde::Serialize;

/// One perception-action cycle: what the agent saw in `state`, what it did and what it cost.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Step<_State, _Percept, _Action, _Cost> {
    pub state: _State,
    pub percept: _Percept,
    pub action: _Action,
    pub cost: _Cost,
    pub next_state: _State,
}

/// Everything that happened during a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationTrace<_State, _Percept, _Action, _Cost> {
    pub initial_state: _State,
    pub steps: Vec<Step<_State, _Percept, _Action, _Cost>>,
    pub total_cost: _Cost,
}

impl<_State, _Percept, _Action, _Cost> SimulationTrace<_State, _Percept, _Action, _Cost>
where
    _State: Serialize,
    _Percept: Serialize,
    _Action: Serialize,
    _Cost: Serialize,
{
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// One row per step, with the running cost next to the step cost. Percepts and states are
// formatted to strings first so the columns line up whatever their Display impl does.
impl<_State, _Percept, _Action, _Cost> Display for SimulationTrace<_State, _Percept, _Action, _Cost>
where
    _State: Display,
    _Percept: Display,
    _Action: Display,
    _Cost: Display + NumAssign + Copy,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "initial state: {}", self.initial_state)?;
        writeln!(
            f,
            "{:>5}  {:<8}  {:<12}  {:<14}  {:>4}  {:>6}",
            "step", "action", "percept", "state", "cost", "total"
        )?;
        let mut total = _Cost::zero();
        for (i, step) in self.steps.iter().enumerate() {
            total += step.cost;
            writeln!(
                f,
                "{:>5}  {:<8}  {:<12}  {:<14}  {:>4}  {:>6}",
                i + 1,
                step.action.to_string(),
                step.percept.to_string(),
                step.next_state.to_string(),
                step.cost.to_string(),
                total.to_string()
            )?;
        }
        write!(f, "total cost: {}", self.total_cost)
    }
}
