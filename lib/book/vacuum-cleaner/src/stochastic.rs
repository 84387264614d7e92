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

use crate::nine_rooms::{
    move_robot, noop_cost, stay, Action, Cost, NineRooms, NineRoomsLocalPercept, NineRoomsState,
};
use crate::random::{self, RandomSource};
use crate::Environment;

/// Chance that a movement action goes where it was meant to.
pub const MOVE_SUCCESS_PROBABILITY: f64 = 0.8;

/// Chance that a movement action leaves the robot where it is.
pub const STAY_PROBABILITY: f64 = 0.1;

/// Chance that a cleaning action actually cleans the room.
pub const CLEAN_SUCCESS_PROBABILITY: f64 = 0.8;

/// The nine rooms world with unreliable actuators. The robot senses the same as in [`NineRooms`].
///
/// A movement action draws `p` uniformly from `[0, 1)`:
/// - `p < 0.8`: the intended move, blocked moves cost a step as usual.
/// - `0.8 <= p < 0.9`: the robot stays put.
/// - otherwise a uniformly random action out of all six is executed instead, drawing again.
///
/// The random replacement may itself be a movement action that is replaced again. That terminates
/// with probability one, but there is no upper bound on the number of draws.
#[derive(Debug, Clone, Copy, Default)]
pub struct NineRoomsStochastic;

impl Environment for NineRoomsStochastic {
    type State = NineRoomsState;
    type Action = Action;
    type Percept = NineRoomsLocalPercept;
    type Cost = Cost;

    fn is_legal_action(&self, state: &Self::State, action: &Self::Action) -> bool {
        NineRooms.is_legal_action(state, action)
    }

    fn percept(&self, state: &Self::State) -> Self::Percept {
        NineRooms.percept(state)
    }

    fn transition<R: RandomSource + ?Sized>(
        &self,
        state: &Self::State,
        action: &Self::Action,
        rng: &mut R,
    ) -> (Self::State, Self::Cost) {
        let mut action = *action;
        loop {
            match action {
                Action::NoOp => return (*state, noop_cost(state)),
                Action::Clean => {
                    return if rng.uniform() < CLEAN_SUCCESS_PROBABILITY {
                        (state.with_current_room_clean(), 1)
                    } else {
                        stay(state)
                    };
                }
                Action::Left | Action::Right | Action::Up | Action::Down => {
                    let p = rng.uniform();
                    if p < MOVE_SUCCESS_PROBABILITY {
                        return move_robot(state, action);
                    } else if p < MOVE_SUCCESS_PROBABILITY + STAY_PROBABILITY {
                        return stay(state);
                    }
                    let replacement = *random::choose(&Action::ALL, rng);
                    tracing::trace!(?action, ?replacement, p, "action replaced at random");
                    action = replacement;
                }
            }
        }
    }
}
