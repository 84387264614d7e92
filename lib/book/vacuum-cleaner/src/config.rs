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
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::nine_rooms::{Action, NineRoomsState};
use crate::VacuumError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentKind {
    /// [`crate::nine_rooms::NineRooms`]
    Sighted,
    /// [`crate::nine_rooms::NineRoomsBlind`]
    Blind,
    /// [`crate::stochastic::NineRoomsStochastic`]
    Stochastic,
}

impl EnvironmentKind {
    pub const ALL: [EnvironmentKind; 3] = [
        EnvironmentKind::Sighted,
        EnvironmentKind::Blind,
        EnvironmentKind::Stochastic,
    ];

    /// The name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            EnvironmentKind::Sighted => "sighted",
            EnvironmentKind::Blind => "blind",
            EnvironmentKind::Stochastic => "stochastic",
        }
    }
}

impl Display for EnvironmentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Random,
    Reflex,
    ModelReflex,
    ModelReflexBlind,
    Rational,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Random,
        AgentKind::Reflex,
        AgentKind::ModelReflex,
        AgentKind::ModelReflexBlind,
        AgentKind::Rational,
    ];

    /// Whether the agent understands the percepts of `environment`. The blind agent expects a
    /// position only, the other model-based and reflex agents expect a dirt reading too.
    pub fn supports(self, environment: EnvironmentKind) -> bool {
        match self {
            AgentKind::Random => true,
            AgentKind::ModelReflexBlind => environment == EnvironmentKind::Blind,
            AgentKind::Reflex | AgentKind::ModelReflex | AgentKind::Rational => {
                environment != EnvironmentKind::Blind
            }
        }
    }

    /// The name used in config files.
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Reflex => "reflex",
            AgentKind::ModelReflex => "model_reflex",
            AgentKind::ModelReflexBlind => "model_reflex_blind",
            AgentKind::Rational => "rational",
        }
    }
}

impl Display for AgentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// How to run one simulation. Every field has a default, so a config file only lists what it
/// changes, e.g. `{"environment": "stochastic", "agent": "rational", "seed": 7}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub environment: EnvironmentKind,
    pub agent: AgentKind,
    /// Only used by the random agent.
    pub actions: Vec<Action>,
    pub steps: usize,
    pub seed: u64,
    pub initial_state: NineRoomsState,
}

impl SimulationConfig {
    fn new(
        environment: EnvironmentKind,
        agent: AgentKind,
        actions: Vec<Action>,
        steps: usize,
        seed: u64,
        initial_state: NineRoomsState,
    ) -> Self {
        Self {
            environment,
            agent,
            actions,
            steps,
            seed,
            initial_state,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, VacuumError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, VacuumError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), VacuumError> {
        if !self.agent.supports(self.environment) {
            return Err(VacuumError::IncompatibleAgent {
                agent: self.agent,
                environment: self.environment,
            });
        }
        if self.agent == AgentKind::Random && self.actions.is_empty() {
            return Err(VacuumError::EmptyActionSet);
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(
            EnvironmentKind::Sighted,
            AgentKind::ModelReflex,
            Action::ALL.to_vec(),
            200,
            42,
            NineRoomsState::all_dirty(),
        )
    }
}
