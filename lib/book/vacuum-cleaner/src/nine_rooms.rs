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

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::grid::{self, Room, ROOM_COUNT};
use crate::{Environment, RandomSource, VacuumError};

pub type Cost = u32;

const NOOP_CLEAN_COST: Cost = 0;
const STAY_COST: Cost = 1;
const LATERAL_MOVE_COST: Cost = 2;
const VERTICAL_MOVE_COST: Cost = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cleanliness {
    Clean,
    Dirty,
}

impl Cleanliness {
    fn symbol(self) -> char {
        match self {
            Cleanliness::Clean => 'C',
            Cleanliness::Dirty => 'D',
        }
    }
}

impl TryFrom<char> for Cleanliness {
    type Error = VacuumError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'C' | 'c' => Ok(Cleanliness::Clean),
            'D' | 'd' => Ok(Cleanliness::Dirty),
            _ => Err(VacuumError::UnknownCleanliness(c)),
        }
    }
}

impl fmt::Display for Cleanliness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cleanliness::Clean => write!(f, "clean"),
            Cleanliness::Dirty => write!(f, "dirty"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    Clean,
    #[serde(rename = "noop")]
    NoOp,
}

impl Action {
    /// Every action the environments accept.
    pub const ALL: [Action; 6] = [
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
        Action::Clean,
        Action::NoOp,
    ];

    /// Movement actions, in the order agents try them.
    pub const MOVES: [Action; 4] = [Action::Left, Action::Right, Action::Down, Action::Up];

    pub fn is_move(self) -> bool {
        matches!(
            self,
            Action::Left | Action::Right | Action::Up | Action::Down
        )
    }

    fn name(self) -> &'static str {
        match self {
            Action::Left => "left",
            Action::Right => "right",
            Action::Up => "up",
            Action::Down => "down",
            Action::Clean => "clean",
            Action::NoOp => "noop",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = VacuumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| VacuumError::UnknownAction(s.to_string()))
    }
}

/// Where the robot is and which rooms are dirty.
///
/// States are values: transitions build a new state and never modify the one they were given.
/// The robot is always inside the grid, which [`NineRoomsState::new`] enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NineRoomsState {
    robot: Room,
    rooms: [Cleanliness; ROOM_COUNT],
}

impl NineRoomsState {
    /// Panics if `robot` is not a room of the grid; that is a caller bug. Use
    /// [`NineRoomsState::try_new`] for untrusted input.
    pub fn new(robot: Room, rooms: [Cleanliness; ROOM_COUNT]) -> Self {
        assert!(robot < ROOM_COUNT, "robot room out of range: {}", robot);
        Self { robot, rooms }
    }

    pub fn try_new(robot: Room, rooms: &[Cleanliness]) -> Result<Self, VacuumError> {
        if robot >= ROOM_COUNT {
            return Err(VacuumError::InvalidRoom(robot));
        }
        let rooms: [Cleanliness; ROOM_COUNT] =
            rooms.try_into().map_err(|_| VacuumError::RoomCount {
                expected: ROOM_COUNT,
                found: rooms.len(),
            })?;
        Ok(Self { robot, rooms })
    }

    /// Robot in room 0 and every room dirty. The usual starting point.
    pub fn all_dirty() -> Self {
        Self::new(0, [Cleanliness::Dirty; ROOM_COUNT])
    }

    pub fn robot(&self) -> Room {
        self.robot
    }

    pub fn rooms(&self) -> &[Cleanliness; ROOM_COUNT] {
        &self.rooms
    }

    pub fn room(&self, room: Room) -> Cleanliness {
        self.rooms[room]
    }

    /// Cleanliness of the room the robot is in.
    pub fn current_room(&self) -> Cleanliness {
        self.rooms[self.robot]
    }

    pub fn is_all_clean(&self) -> bool {
        self.rooms.iter().all(|room| *room == Cleanliness::Clean)
    }

    pub fn with_robot(&self, robot: Room) -> Self {
        Self::new(robot, self.rooms)
    }

    pub fn with_current_room_clean(&self) -> Self {
        let mut rooms = self.rooms;
        rooms[self.robot] = Cleanliness::Clean;
        Self::new(self.robot, rooms)
    }

    /// Every possible starting point: each robot room combined with each of the 512 dirt patterns.
    /// Bit `i` of the pattern set means room `i` is dirty.
    pub fn all_initial_conditions() -> impl Iterator<Item = NineRoomsState> {
        (0..ROOM_COUNT).flat_map(|robot| {
            (0..1u32 << ROOM_COUNT).map(move |pattern| {
                let mut rooms = [Cleanliness::Clean; ROOM_COUNT];
                for (i, room) in rooms.iter_mut().enumerate() {
                    if pattern & (1 << i) != 0 {
                        *room = Cleanliness::Dirty;
                    }
                }
                NineRoomsState::new(robot, rooms)
            })
        })
    }
}

impl Default for NineRoomsState {
    fn default() -> Self {
        Self::all_dirty()
    }
}

// Compact text form, e.g. "4 CCDDCCDDC": the robot's room, then one letter per room.
impl fmt::Display for NineRoomsState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rooms: String = self.rooms.iter().map(|room| room.symbol()).collect();
        write!(f, "{} {}", self.robot, rooms)
    }
}

impl FromStr for NineRoomsState {
    type Err = VacuumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (robot, rooms) = match (parts.next(), parts.next(), parts.next()) {
            (Some(robot), Some(rooms), None) => (robot, rooms),
            _ => return Err(VacuumError::MalformedState(s.to_string())),
        };
        let robot: Room = robot
            .parse()
            .map_err(|_| VacuumError::MalformedState(s.to_string()))?;
        let rooms = rooms
            .chars()
            .map(Cleanliness::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        NineRoomsState::try_new(robot, &rooms)
    }
}

impl TryFrom<String> for NineRoomsState {
    type Error = VacuumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NineRoomsState> for String {
    fn from(state: NineRoomsState) -> Self {
        state.to_string()
    }
}

/// What a robot with a dirt sensor perceives: its room and whether that room is dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NineRoomsLocalPercept {
    pub robot: Room,
    pub cleanliness: Cleanliness,
}

impl fmt::Display for NineRoomsLocalPercept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.robot, self.cleanliness)
    }
}

/// What a robot without a dirt sensor perceives: only its room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NineRoomsPositionPercept {
    pub robot: Room,
}

impl fmt::Display for NineRoomsPositionPercept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.robot)
    }
}

/// Cost of doing nothing: free once the whole floor is clean.
pub(crate) fn noop_cost(state: &NineRoomsState) -> Cost {
    if state.is_all_clean() {
        NOOP_CLEAN_COST
    } else {
        STAY_COST
    }
}

/// Cost of a step that leaves the robot where it is without doing anything useful.
pub(crate) fn stay(state: &NineRoomsState) -> (NineRoomsState, Cost) {
    (*state, STAY_COST)
}

/// Try to move the robot. Blocked moves leave the state as it was.
pub(crate) fn move_robot(state: &NineRoomsState, action: Action) -> (NineRoomsState, Cost) {
    match grid::destination(state.robot, action) {
        Some(room) => {
            let cost = match action {
                Action::Left | Action::Right => LATERAL_MOVE_COST,
                _ => VERTICAL_MOVE_COST,
            };
            (state.with_robot(room), cost)
        }
        None => stay(state),
    }
}

/// The deterministic nine rooms world. The robot senses its room and whether it is dirty, and every
/// action does exactly what it says.
#[derive(Debug, Clone, Copy, Default)]
pub struct NineRooms;

impl NineRooms {
    pub fn step(state: &NineRoomsState, action: Action) -> (NineRoomsState, Cost) {
        match action {
            Action::NoOp => (*state, noop_cost(state)),
            Action::Clean => (state.with_current_room_clean(), STAY_COST),
            Action::Left | Action::Right | Action::Up | Action::Down => move_robot(state, action),
        }
    }
}

impl Environment for NineRooms {
    type State = NineRoomsState;
    type Action = Action;
    type Percept = NineRoomsLocalPercept;
    type Cost = Cost;

    fn is_legal_action(&self, _state: &Self::State, _action: &Self::Action) -> bool {
        // Blocked moves are legal, they just cost a step.
        true
    }

    fn percept(&self, state: &Self::State) -> Self::Percept {
        NineRoomsLocalPercept {
            robot: state.robot,
            cleanliness: state.current_room(),
        }
    }

    fn transition<R: RandomSource + ?Sized>(
        &self,
        state: &Self::State,
        action: &Self::Action,
        _rng: &mut R,
    ) -> (Self::State, Self::Cost) {
        NineRooms::step(state, *action)
    }
}

/// Same world as [`NineRooms`], but the robot has no dirt sensor and only knows where it is.
#[derive(Debug, Clone, Copy, Default)]
pub struct NineRoomsBlind;

impl Environment for NineRoomsBlind {
    type State = NineRoomsState;
    type Action = Action;
    type Percept = NineRoomsPositionPercept;
    type Cost = Cost;

    fn is_legal_action(&self, state: &Self::State, action: &Self::Action) -> bool {
        NineRooms.is_legal_action(state, action)
    }

    fn percept(&self, state: &Self::State) -> Self::Percept {
        NineRoomsPositionPercept { robot: state.robot }
    }

    fn transition<R: RandomSource + ?Sized>(
        &self,
        state: &Self::State,
        action: &Self::Action,
        _rng: &mut R,
    ) -> (Self::State, Self::Cost) {
        NineRooms::step(state, *action)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::random::ScriptedSource;

    pub(crate) fn any_cleanliness() -> impl Strategy<Value = Cleanliness> {
        prop_oneof![Just(Cleanliness::Clean), Just(Cleanliness::Dirty)]
    }

    pub(crate) fn any_state() -> impl Strategy<Value = NineRoomsState> {
        (0..ROOM_COUNT, prop::array::uniform9(any_cleanliness()))
            .prop_map(|(robot, rooms)| NineRoomsState::new(robot, rooms))
    }

    pub(crate) fn any_action() -> impl Strategy<Value = Action> {
        prop::sample::select(Action::ALL.to_vec())
    }

    fn transition(state: &NineRoomsState, action: Action) -> (NineRoomsState, Cost) {
        NineRooms.transition(state, &action, &mut ScriptedSource::default())
    }

    #[test]
    fn test_initial_state_is_all_dirty_in_room_zero() {
        let state = NineRoomsState::default();
        assert_eq!(state.robot(), 0);
        assert!(state.rooms().iter().all(|r| *r == Cleanliness::Dirty));
        assert_eq!(state.to_string(), "0 DDDDDDDDD");
    }

    #[test]
    fn test_percept_reports_current_room() {
        let mut rooms = [Cleanliness::Dirty; ROOM_COUNT];
        rooms[4] = Cleanliness::Clean;
        let state = NineRoomsState::new(4, rooms);
        assert_eq!(
            NineRooms.percept(&state),
            NineRoomsLocalPercept {
                robot: 4,
                cleanliness: Cleanliness::Clean,
            }
        );
        assert_eq!(
            NineRoomsBlind.percept(&state),
            NineRoomsPositionPercept { robot: 4 }
        );
    }

    #[test]
    fn test_every_action_is_legal() {
        let state = NineRoomsState::all_dirty();
        for action in Action::ALL {
            assert!(NineRooms.is_legal_action(&state, &action));
            assert!(NineRoomsBlind.is_legal_action(&state, &action));
        }
    }

    #[test]
    fn test_move_costs() {
        let state = NineRoomsState::all_dirty();
        assert_eq!(transition(&state, Action::Right), (state.with_robot(1), 2));
        assert_eq!(transition(&state, Action::Left), (state, 1));
        assert_eq!(transition(&state, Action::Up), (state, 1));
        assert_eq!(transition(&state, Action::Down), (state, 1));

        let at_two = state.with_robot(2);
        assert_eq!(transition(&at_two, Action::Up), (state.with_robot(5), 3));
        let at_six = state.with_robot(6);
        assert_eq!(transition(&at_six, Action::Down), (state.with_robot(3), 3));
    }

    #[test]
    fn test_cleaning_a_clean_room_changes_nothing() {
        let mut state = NineRoomsState::all_dirty().with_current_room_clean();
        for _ in 0..5 {
            let (next, cost) = transition(&state, Action::Clean);
            assert_eq!(next, state);
            assert_eq!(cost, 1);
            state = next;
        }
    }

    #[test]
    fn test_blind_transitions_match_sighted() {
        let state = NineRoomsState::all_dirty().with_robot(4);
        for action in Action::ALL {
            assert_eq!(
                NineRoomsBlind.transition(&state, &action, &mut ScriptedSource::default()),
                transition(&state, action)
            );
        }
    }

    #[test]
    fn test_state_text_round_trip() {
        let state: NineRoomsState = "4 CCDDCCDDC".parse().expect("valid state");
        assert_eq!(state.robot(), 4);
        assert_eq!(state.room(2), Cleanliness::Dirty);
        assert_eq!(state.room(8), Cleanliness::Clean);
        assert_eq!(state.to_string(), "4 CCDDCCDDC");
    }

    #[test]
    fn test_state_text_errors() {
        assert!(matches!(
            "9 DDDDDDDDD".parse::<NineRoomsState>(),
            Err(VacuumError::InvalidRoom(9))
        ));
        assert!(matches!(
            "0 DDDD".parse::<NineRoomsState>(),
            Err(VacuumError::RoomCount {
                expected: 9,
                found: 4
            })
        ));
        assert!(matches!(
            "0 DDDDXDDDD".parse::<NineRoomsState>(),
            Err(VacuumError::UnknownCleanliness('X'))
        ));
        assert!(matches!(
            "DDDDDDDDD".parse::<NineRoomsState>(),
            Err(VacuumError::MalformedState(_))
        ));
    }

    #[test]
    #[should_panic(expected = "robot room out of range")]
    fn test_robot_outside_grid_panics() {
        NineRoomsState::new(9, [Cleanliness::Dirty; ROOM_COUNT]);
    }

    #[test]
    fn test_action_names() {
        for action in Action::ALL {
            assert_eq!(action.to_string().parse::<Action>().ok(), Some(action));
        }
        assert_eq!("NoOp".parse::<Action>().ok(), Some(Action::NoOp));
        assert!(matches!(
            "suck".parse::<Action>(),
            Err(VacuumError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_state_serializes_as_text() {
        let state = NineRoomsState::all_dirty().with_robot(3);
        let json = serde_json::to_string(&state).expect("serialize");
        assert_eq!(json, "\"3 DDDDDDDDD\"");
        let back: NineRoomsState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, state);
        assert!(serde_json::from_str::<NineRoomsState>("\"12 DDDDDDDDD\"").is_err());
    }

    #[test]
    fn test_all_initial_conditions() {
        let all: Vec<NineRoomsState> = NineRoomsState::all_initial_conditions().collect();
        assert_eq!(all.len(), 9 * 512);
        assert_eq!(all[0], NineRoomsState::new(0, [Cleanliness::Clean; ROOM_COUNT]));
        assert_eq!(all[511], NineRoomsState::all_dirty());
        assert_eq!(all.iter().filter(|s| s.is_all_clean()).count(), 9);
    }

    proptest! {
        #[test]
        fn test_noop_keeps_state_and_costs_by_cleanliness(state in any_state()) {
            let (next, cost) = transition(&state, Action::NoOp);
            prop_assert_eq!(next, state);
            prop_assert_eq!(cost, if state.is_all_clean() { 0 } else { 1 });
        }

        #[test]
        fn test_clean_cleans_current_room(state in any_state()) {
            let (next, cost) = transition(&state, Action::Clean);
            prop_assert_eq!(next.robot(), state.robot());
            prop_assert_eq!(next.current_room(), Cleanliness::Clean);
            prop_assert_eq!(cost, 1);
            for room in (0..ROOM_COUNT).filter(|r| *r != state.robot()) {
                prop_assert_eq!(next.room(room), state.room(room));
            }
        }

        #[test]
        fn test_transition_is_pure(state in any_state(), action in any_action()) {
            let before = state;
            let first = transition(&state, action);
            let second = transition(&state, action);
            prop_assert_eq!(first, second);
            prop_assert_eq!(state, before);
            prop_assert_eq!(state.rooms(), before.rooms());
        }

        #[test]
        fn test_moves_never_touch_rooms(state in any_state(), action in any_action()) {
            prop_assume!(action.is_move());
            let (next, cost) = transition(&state, action);
            prop_assert_eq!(next.rooms(), state.rooms());
            match grid::destination(state.robot(), action) {
                Some(room) => {
                    prop_assert_eq!(next.robot(), room);
                    prop_assert!(cost == 2 || cost == 3);
                }
                None => {
                    prop_assert_eq!(next, state);
                    prop_assert_eq!(cost, 1);
                }
            }
        }

        #[test]
        fn test_state_text_parses_back(state in any_state()) {
            prop_assert_eq!(state.to_string().parse::<NineRoomsState>().ok(), Some(state));
        }
    }
}
