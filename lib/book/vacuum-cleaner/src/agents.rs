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

//! Agent programs for the nine rooms world.
//!
//! Every agent owns its random source. Model-based agents also own their [`Belief`], which starts
//! out assuming the worst (every room dirty) and is only ever changed by the agent itself.

use std::marker::PhantomData;

use crate::grid::{self, Room, ROOM_COUNT};
use crate::nine_rooms::{
    Action, Cleanliness, NineRoomsLocalPercept, NineRoomsPositionPercept, NineRoomsState,
};
use crate::random::{self, RandomSource, Rng};
use crate::stochastic::NineRoomsStochastic;
use crate::{Agent, Environment};

/// The fixed tour the reflex agents follow once their room is clean. Rooms 0 and 8 have a single
/// way out, the others pick between two directions at random.
pub fn tour_move<R: RandomSource + ?Sized>(robot: Room, rng: &mut R) -> Action {
    match robot {
        1 | 4 | 7 => *random::choose(&[Action::Left, Action::Right], rng),
        2 | 5 => *random::choose(&[Action::Left, Action::Up], rng),
        3 | 6 => *random::choose(&[Action::Right, Action::Down], rng),
        8 => Action::Left,
        _ => Action::Right,
    }
}

/// An agent's private picture of the world: where it thinks it is and which rooms it thinks are
/// dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Belief {
    robot: Room,
    rooms: [Cleanliness; ROOM_COUNT],
}

impl Belief {
    /// Robot in room 0, every room assumed dirty.
    pub fn pessimistic() -> Self {
        Self {
            robot: 0,
            rooms: [Cleanliness::Dirty; ROOM_COUNT],
        }
    }

    pub fn from_state(state: &NineRoomsState) -> Self {
        Self {
            robot: state.robot(),
            rooms: *state.rooms(),
        }
    }

    pub fn robot(&self) -> Room {
        self.robot
    }

    pub fn room(&self, room: Room) -> Cleanliness {
        self.rooms[room]
    }

    pub fn is_all_clean(&self) -> bool {
        self.rooms.iter().all(|room| *room == Cleanliness::Clean)
    }

    /// The belief as an environment state, to reason about with an environment's rules.
    pub fn as_state(&self) -> NineRoomsState {
        NineRoomsState::new(self.robot, self.rooms)
    }

    fn locate(&mut self, robot: Room) {
        assert!(robot < ROOM_COUNT, "percept room out of range: {}", robot);
        self.robot = robot;
    }

    fn observe(&mut self, percept: &NineRoomsLocalPercept) {
        self.locate(percept.robot);
        self.rooms[percept.robot] = percept.cleanliness;
    }

    fn current_room(&self) -> Cleanliness {
        self.rooms[self.robot]
    }

    fn mark_current_room_clean(&mut self) {
        self.rooms[self.robot] = Cleanliness::Clean;
    }
}

impl Default for Belief {
    fn default() -> Self {
        Self::pessimistic()
    }
}

/// Ignores what it perceives and picks uniformly from a fixed set of actions. Works in any
/// environment whose actions are [`Action`]s, whatever its percept `P`.
pub struct RandomAgent<P, R = Rng> {
    actions: Vec<Action>,
    rng: R,
    percept: PhantomData<fn(&P)>,
}

impl<P, R: RandomSource> RandomAgent<P, R> {
    pub fn new(actions: Vec<Action>, rng: R) -> Self {
        assert!(!actions.is_empty(), "random agent needs at least one action");
        Self {
            actions,
            rng,
            percept: PhantomData,
        }
    }
}

impl<P, R: RandomSource> Agent for RandomAgent<P, R> {
    type Action = Action;
    type Percept = P;

    fn act(&mut self, _percept: &Self::Percept) -> Self::Action {
        *random::choose(&self.actions, &mut self.rng)
    }
}

/// Cleans a dirty room, otherwise follows the tour. Remembers nothing, so it never stops moving.
pub struct ReflexAgent<R = Rng> {
    rng: R,
}

impl<R: RandomSource> ReflexAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> Agent for ReflexAgent<R> {
    type Action = Action;
    type Percept = NineRoomsLocalPercept;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action {
        if percept.cleanliness == Cleanliness::Dirty {
            Action::Clean
        } else {
            tour_move(percept.robot, &mut self.rng)
        }
    }
}

/// Reflex agent with a memory of the rooms it has seen. Rests once it believes everything is clean.
pub struct ModelReflexAgent<R = Rng> {
    belief: Belief,
    rng: R,
}

impl<R: RandomSource> ModelReflexAgent<R> {
    pub fn new(rng: R) -> Self {
        Self {
            belief: Belief::pessimistic(),
            rng,
        }
    }

    pub fn belief(&self) -> &Belief {
        &self.belief
    }
}

impl<R: RandomSource> Agent for ModelReflexAgent<R> {
    type Action = Action;
    type Percept = NineRoomsLocalPercept;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action {
        self.belief.observe(percept);

        if self.belief.is_all_clean() {
            Action::NoOp
        } else if percept.cleanliness == Cleanliness::Dirty {
            Action::Clean
        } else {
            tour_move(percept.robot, &mut self.rng)
        }
    }
}

/// Model-based agent for a robot that cannot see dirt. It assumes every room it has not cleaned
/// yet is dirty, and assumes each clean action works.
pub struct ModelReflexBlindAgent<R = Rng> {
    belief: Belief,
    rng: R,
}

impl<R: RandomSource> ModelReflexBlindAgent<R> {
    pub fn new(rng: R) -> Self {
        Self {
            belief: Belief::pessimistic(),
            rng,
        }
    }

    pub fn belief(&self) -> &Belief {
        &self.belief
    }
}

impl<R: RandomSource> Agent for ModelReflexBlindAgent<R> {
    type Action = Action;
    type Percept = NineRoomsPositionPercept;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action {
        self.belief.locate(percept.robot);

        if self.belief.is_all_clean() {
            Action::NoOp
        } else if self.belief.current_room() == Cleanliness::Dirty {
            self.belief.mark_current_room_clean();
            Action::Clean
        } else {
            tour_move(percept.robot, &mut self.rng)
        }
    }
}

/// Model-based agent for the stochastic world. Instead of the fixed tour it looks one step ahead
/// and heads for a neighbour it believes is dirty.
///
/// The look-ahead runs the stochastic transition on the belief, so a probe can itself stay put or
/// be replaced by a random action. Moves are probed in the order left, right, down, up and the
/// first probe that lands on a believed-dirty room wins. If none does, a legal move is picked
/// uniformly.
pub struct RationalStochasticAgent<R = Rng> {
    belief: Belief,
    environment: NineRoomsStochastic,
    rng: R,
}

impl<R: RandomSource> RationalStochasticAgent<R> {
    pub fn new(rng: R) -> Self {
        Self::with_belief(Belief::pessimistic(), rng)
    }

    pub fn with_belief(belief: Belief, rng: R) -> Self {
        Self {
            belief,
            environment: NineRoomsStochastic,
            rng,
        }
    }

    pub fn belief(&self) -> &Belief {
        &self.belief
    }
}

impl<R: RandomSource> Agent for RationalStochasticAgent<R> {
    type Action = Action;
    type Percept = NineRoomsLocalPercept;

    fn act(&mut self, percept: &Self::Percept) -> Self::Action {
        self.belief.observe(percept);

        if self.belief.is_all_clean() {
            return Action::NoOp;
        }
        if percept.cleanliness == Cleanliness::Dirty {
            return Action::Clean;
        }

        let moves = grid::legal_moves(percept.robot);
        let believed = self.belief.as_state();
        for action in &moves {
            let (probe, _) = self
                .environment
                .transition(&believed, action, &mut self.rng);
            if probe.current_room() == Cleanliness::Dirty {
                return *action;
            }
        }
        *random::choose(&moves, &mut self.rng)
    }
}
