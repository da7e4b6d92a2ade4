//! Atomic motion events.
//!
//! A coarse move expands into a strictly ordered run of these: one `Go`
//! marker, any number of `Step`s, and exactly one terminal `StopAtRobot` or
//! `StopAtBarrier`. Traces are append-only; downstream consumers serialize
//! them into the low-level action vocabulary via [`Event::to_line`].

use serde::{Deserialize, Serialize};

use crate::core::{CellId, CellTable, Direction, RobotId, RobotTable};

/// One atomic event in an expanded plan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Event {
    /// Start of a coarse move.
    Go {
        robot: RobotId,
        direction: Direction,
    },
    /// The robot advanced one cell.
    Step {
        robot: RobotId,
        from: CellId,
        to: CellId,
        direction: Direction,
    },
    /// Terminal: another robot occupies `to`; the mover stays at `from`.
    StopAtRobot {
        robot: RobotId,
        from: CellId,
        to: CellId,
        direction: Direction,
    },
    /// Terminal: a boundary or barrier stops the robot at `cell`.
    StopAtBarrier {
        robot: RobotId,
        cell: CellId,
        direction: Direction,
    },
}

impl Event {
    /// The robot this event concerns.
    #[must_use]
    pub const fn robot(self) -> RobotId {
        match self {
            Event::Go { robot, .. }
            | Event::Step { robot, .. }
            | Event::StopAtRobot { robot, .. }
            | Event::StopAtBarrier { robot, .. } => robot,
        }
    }

    /// The direction of the move this event belongs to.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Event::Go { direction, .. }
            | Event::Step { direction, .. }
            | Event::StopAtRobot { direction, .. }
            | Event::StopAtBarrier { direction, .. } => direction,
        }
    }

    /// Whether this event ends a coarse move.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Event::StopAtRobot { .. } | Event::StopAtBarrier { .. }
        )
    }

    #[must_use]
    pub const fn is_step(self) -> bool {
        matches!(self, Event::Step { .. })
    }

    /// Serialize into the wire vocabulary, one parenthesized fact.
    #[must_use]
    pub fn to_line(self, cells: &CellTable, robots: &RobotTable) -> String {
        match self {
            Event::Go { robot, direction } => {
                format!("(go {} {})", robots.label(robot), direction)
            }
            Event::Step {
                robot,
                from,
                to,
                direction,
            } => format!(
                "(step {} {} {} {})",
                robots.label(robot),
                cells.label(from),
                cells.label(to),
                direction
            ),
            Event::StopAtRobot {
                robot,
                from,
                to,
                direction,
            } => format!(
                "(stop-at-robot {} {} {} {})",
                robots.label(robot),
                cells.label(from),
                cells.label(to),
                direction
            ),
            Event::StopAtBarrier {
                robot,
                cell,
                direction,
            } => format!(
                "(stop-at-barrier {} {} {})",
                robots.label(robot),
                cells.label(cell),
                direction
            ),
        }
    }
}
