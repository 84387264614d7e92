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

//! Adjacency of the nine rooms.
//!
//! Rooms are numbered row by row:
//!
//! ```text
//! 0 1 2
//! 3 4 5
//! 6 7 8
//! ```
//!
//! The vertical moves are not a full grid. `Down` only leaves rooms 3 and 6 (towards row 0) and
//! `Up` only leaves rooms 2 and 5 (away from row 0), so the robot's tour is fixed by this table
//! and not by the grid geometry.

use crate::nine_rooms::Action;

pub type Room = usize;

pub const ROOM_COUNT: usize = 9;

pub fn can_move_left(room: Room) -> Option<Room> {
    match room {
        1 | 2 | 4 | 5 | 7 | 8 => Some(room - 1),
        _ => None,
    }
}

pub fn can_move_right(room: Room) -> Option<Room> {
    match room {
        0 | 1 | 3 | 4 | 6 | 7 => Some(room + 1),
        _ => None,
    }
}

pub fn can_move_down(room: Room) -> Option<Room> {
    match room {
        3 | 6 => Some(room - 3),
        _ => None,
    }
}

pub fn can_move_up(room: Room) -> Option<Room> {
    match room {
        2 | 5 => Some(room + 3),
        _ => None,
    }
}

/// Where a movement action takes the robot. `None` if the move is blocked from `room`, or if the
/// action does not move the robot at all.
pub fn destination(room: Room, action: Action) -> Option<Room> {
    match action {
        Action::Left => can_move_left(room),
        Action::Right => can_move_right(room),
        Action::Down => can_move_down(room),
        Action::Up => can_move_up(room),
        Action::Clean | Action::NoOp => None,
    }
}

/// Movement actions that are not blocked from `room`, in the order left, right, down, up.
pub fn legal_moves(room: Room) -> Vec<Action> {
    Action::MOVES
        .into_iter()
        .filter(|action| destination(room, *action).is_some())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(room: Room) -> usize {
        room / 3
    }

    fn column(room: Room) -> usize {
        room % 3
    }

    #[test]
    fn test_left_and_right_undo_each_other() {
        for room in 0..ROOM_COUNT {
            if let Some(left) = can_move_left(room) {
                assert_eq!(can_move_right(left), Some(room), "room: {}", room);
            }
            if let Some(right) = can_move_right(room) {
                assert_eq!(can_move_left(right), Some(room), "room: {}", room);
            }
        }
    }

    #[test]
    fn test_lateral_moves_stay_in_row() {
        for room in 0..ROOM_COUNT {
            for target in [can_move_left(room), can_move_right(room)].into_iter().flatten() {
                assert_eq!(row(target), row(room), "room: {}", room);
                assert_eq!(column(target).abs_diff(column(room)), 1, "room: {}", room);
            }
        }
    }

    #[test]
    fn test_vertical_moves_change_row_by_one() {
        for room in 0..ROOM_COUNT {
            for target in [can_move_down(room), can_move_up(room)].into_iter().flatten() {
                assert_eq!(column(target), column(room), "room: {}", room);
                assert_eq!(row(target).abs_diff(row(room)), 1, "room: {}", room);
            }
        }
    }

    #[test]
    fn test_exact_table() {
        let left: Vec<Option<Room>> = (0..ROOM_COUNT).map(can_move_left).collect();
        let right: Vec<Option<Room>> = (0..ROOM_COUNT).map(can_move_right).collect();
        let down: Vec<Option<Room>> = (0..ROOM_COUNT).map(can_move_down).collect();
        let up: Vec<Option<Room>> = (0..ROOM_COUNT).map(can_move_up).collect();

        assert_eq!(
            left,
            [None, Some(0), Some(1), None, Some(3), Some(4), None, Some(6), Some(7)]
        );
        assert_eq!(
            right,
            [Some(1), Some(2), None, Some(4), Some(5), None, Some(7), Some(8), None]
        );
        assert_eq!(
            down,
            [None, None, None, Some(0), None, None, Some(3), None, None]
        );
        assert_eq!(
            up,
            [None, None, Some(5), None, None, Some(8), None, None, None]
        );
    }

    #[test]
    fn test_destination_ignores_non_movement() {
        for room in 0..ROOM_COUNT {
            assert_eq!(destination(room, Action::Clean), None);
            assert_eq!(destination(room, Action::NoOp), None);
        }
    }

    #[test]
    fn test_legal_moves_order() {
        assert_eq!(legal_moves(0), vec![Action::Right]);
        assert_eq!(legal_moves(3), vec![Action::Right, Action::Down]);
        assert_eq!(legal_moves(4), vec![Action::Left, Action::Right]);
        assert_eq!(legal_moves(5), vec![Action::Left, Action::Up]);
        assert_eq!(legal_moves(8), vec![Action::Left]);
    }

    #[test]
    fn test_every_room_has_an_exit() {
        for room in 0..ROOM_COUNT {
            assert!(!legal_moves(room).is_empty(), "room: {}", room);
        }
    }
}
