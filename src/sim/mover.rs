//! Coarse move application: the slide rule.
//!
//! A robot sent in a direction keeps moving one cell at a time until the
//! current cell is blocked toward that direction or the next cell holds
//! another robot. The whole slide is atomic from the outside; only the trace
//! exposes the intermediate cells.

use smallvec::SmallVec;
use thiserror::Error;

use crate::board::Board;
use crate::core::{CellId, Direction, RobotId};

use super::event::Event;
use super::occupancy::Occupancy;

/// A coarse move: robot plus direction, no intermediate detail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Move {
    pub robot: RobotId,
    pub direction: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(robot: RobotId, direction: Direction) -> Self {
        Self { robot, direction }
    }
}

/// Why a coarse move could not be applied at all.
///
/// Distinct from a move that goes nowhere: a robot blocked immediately
/// still produces a legal zero-distance trace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The move names a robot absent from the occupancy.
    #[error("move names {0}, which is not in the occupancy")]
    UnknownRobot(RobotId),

    /// The robot stands on a cell the board does not contain.
    #[error("{robot} stands on {cell}, which is not a cell of this board")]
    OffBoard { robot: RobotId, cell: CellId },
}

/// Result of one applied move.
#[derive(Clone, Debug)]
pub struct MoveOutcome {
    /// Occupancy after the slide. The input occupancy is left untouched.
    pub occupancy: Occupancy,
    /// The move's trace: `Go`, then steps, then one terminal stop.
    pub events: SmallVec<[Event; 8]>,
    /// Where the robot came to rest.
    pub final_cell: CellId,
}

impl MoveOutcome {
    /// Cells actually traveled.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.events.iter().filter(|e| e.is_step()).count()
    }
}

/// Apply one coarse move, producing the new occupancy and the event trace.
///
/// The trace always starts with `Go` and ends with exactly one terminal
/// event. A robot that cannot move still yields `Go` plus `StopAtBarrier`
/// at its own cell.
pub fn apply_move(
    board: &Board,
    occupancy: &Occupancy,
    mv: Move,
) -> Result<MoveOutcome, MoveError> {
    let start = occupancy
        .cell_of(mv.robot)
        .ok_or(MoveError::UnknownRobot(mv.robot))?;
    if board.coord_of(start).is_none() {
        return Err(MoveError::OffBoard {
            robot: mv.robot,
            cell: start,
        });
    }

    let mut events: SmallVec<[Event; 8]> = SmallVec::new();
    events.push(Event::Go {
        robot: mv.robot,
        direction: mv.direction,
    });

    let mut current = start;
    loop {
        if board.is_blocked(current, mv.direction) {
            events.push(Event::StopAtBarrier {
                robot: mv.robot,
                cell: current,
                direction: mv.direction,
            });
            break;
        }
        // Reconstruction closes the perimeter, so an unblocked direction
        // always has a neighbor.
        let next = board
            .neighbor(current, mv.direction)
            .expect("unblocked cell without neighbor");
        if occupancy.robot_at(next).is_some_and(|other| other != mv.robot) {
            events.push(Event::StopAtRobot {
                robot: mv.robot,
                from: current,
                to: next,
                direction: mv.direction,
            });
            break;
        }
        events.push(Event::Step {
            robot: mv.robot,
            from: current,
            to: next,
            direction: mv.direction,
        });
        current = next;
    }

    let mut next_occupancy = occupancy.clone();
    next_occupancy.relocate(mv.robot, current);

    Ok(MoveOutcome {
        occupancy: next_occupancy,
        events,
        final_cell: current,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::square_board;

    fn place(occupancy: &mut Occupancy, cells: &crate::core::CellTable, robot: u8, at: &str) {
        occupancy
            .place(RobotId(robot), cells.get(at).unwrap())
            .unwrap();
    }

    #[test]
    fn test_slide_to_wall() {
        let (cells, board) = square_board(4, &[]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-1-1");

        let outcome =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::East)).unwrap();

        assert_eq!(outcome.final_cell, cells.get("cell-4-1").unwrap());
        assert_eq!(outcome.distance(), 3);
        assert_eq!(outcome.events.len(), 5);
        assert!(matches!(outcome.events[0], Event::Go { .. }));
        assert!(matches!(
            outcome.events[4],
            Event::StopAtBarrier { cell, .. } if cell == outcome.final_cell
        ));
    }

    #[test]
    fn test_stop_at_robot() {
        let (cells, board) = square_board(4, &[]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-1-1");
        place(&mut occupancy, &cells, 1, "cell-4-1");

        let outcome =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::East)).unwrap();

        assert_eq!(outcome.final_cell, cells.get("cell-3-1").unwrap());
        assert_eq!(outcome.distance(), 2);
        let last = *outcome.events.last().unwrap();
        assert!(matches!(
            last,
            Event::StopAtRobot { from, to, .. }
                if from == cells.get("cell-3-1").unwrap()
                    && to == cells.get("cell-4-1").unwrap()
        ));
        // The blocking robot did not move.
        assert_eq!(
            outcome.occupancy.cell_of(RobotId(1)),
            Some(cells.get("cell-4-1").unwrap())
        );
    }

    #[test]
    fn test_zero_distance_move() {
        let (cells, board) = square_board(4, &[]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-4-2");

        let outcome =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::East)).unwrap();

        assert_eq!(outcome.final_cell, cells.get("cell-4-2").unwrap());
        assert_eq!(outcome.distance(), 0);
        assert_eq!(outcome.events.len(), 2);
        assert!(outcome.events[1].is_terminal());
    }

    #[test]
    fn test_interior_barrier_stops_slide() {
        // Wall between columns 2 and 3 on row 1.
        let (cells, board) = square_board(4, &[(2, 1, Direction::East)]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-1-1");

        let outcome =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::East)).unwrap();

        assert_eq!(outcome.final_cell, cells.get("cell-2-1").unwrap());
        assert_eq!(outcome.distance(), 1);
    }

    #[test]
    fn test_barrier_mirror_stops_reverse_slide() {
        let (cells, board) = square_board(4, &[(2, 1, Direction::East)]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-4-1");

        let outcome =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::West)).unwrap();

        assert_eq!(outcome.final_cell, cells.get("cell-3-1").unwrap());
    }

    #[test]
    fn test_unknown_robot() {
        let (_, board) = square_board(4, &[]);
        let occupancy = Occupancy::new();

        let err =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::East)).unwrap_err();
        assert_eq!(err, MoveError::UnknownRobot(RobotId(0)));
    }

    #[test]
    fn test_input_occupancy_untouched() {
        let (cells, board) = square_board(4, &[]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-1-1");

        let outcome =
            apply_move(&board, &occupancy, Move::new(RobotId(0), Direction::South)).unwrap();

        assert_eq!(occupancy.cell_of(RobotId(0)), Some(cells.get("cell-1-1").unwrap()));
        assert_ne!(outcome.occupancy, occupancy);
        assert!(outcome.occupancy.is_consistent());
    }

    #[test]
    fn test_repeat_move_idempotent_only_at_wall() {
        let (cells, board) = square_board(4, &[]);
        let mut occupancy = Occupancy::new();
        place(&mut occupancy, &cells, 0, "cell-1-1");

        let mv = Move::new(RobotId(0), Direction::East);
        let first = apply_move(&board, &occupancy, mv).unwrap();
        let second = apply_move(&board, &first.occupancy, mv).unwrap();

        // First slide covered distance; the repeat is a zero-length move.
        assert!(first.distance() > 0);
        assert_eq!(second.distance(), 0);
        assert_eq!(second.final_cell, first.final_cell);
        assert_eq!(second.occupancy, first.occupancy);
        assert_eq!(first.final_cell, cells.get("cell-4-1").unwrap());
    }
}
