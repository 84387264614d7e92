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

use crate::config::{AgentKind, EnvironmentKind};

/// Errors at the edges of the simulator: parsing text, loading configuration and pairing agents
/// with environments. Running a simulation itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum VacuumError {
    /// Room index is not in the 3x3 grid.
    #[error("room index out of range: {0}")]
    InvalidRoom(usize),

    /// A state listed the wrong number of rooms.
    #[error("expected {expected} rooms, found {found}")]
    RoomCount { expected: usize, found: usize },

    #[error("unknown action: {0}")]
    UnknownAction(String),

    #[error("unknown cleanliness: {0}")]
    UnknownCleanliness(char),

    /// State text is not `<robot> <rooms>`.
    #[error("malformed state: {0:?}")]
    MalformedState(String),

    #[error("random agent needs at least one action")]
    EmptyActionSet,

    /// The agent's percept does not match what the environment senses.
    #[error("agent {agent} cannot run in the {environment} environment")]
    IncompatibleAgent {
        agent: AgentKind,
        environment: EnvironmentKind,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read config: {0}")]
    ConfigIo(#[from] std::io::Error),
}
