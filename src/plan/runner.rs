//! Plan running and goal verification.
//!
//! A plan run is a sequential fold: each coarse move starts from the
//! occupancy the previous one produced, so there is no parallel execution
//! within one plan. The board stays immutable and shared; the occupancy is
//! owned by the run. Applying the same plan to the same initial state always
//! yields the same trace and final occupancy.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::{CellId, CellTable, RobotId, RobotTable};
use crate::sim::{apply_move, Event, Move, MoveError, Occupancy};

/// The round's target: `robot` has to come to rest on `cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Goal {
    pub robot: RobotId,
    pub cell: CellId,
}

impl Goal {
    #[must_use]
    pub const fn new(robot: RobotId, cell: CellId) -> Self {
        Self { robot, cell }
    }
}

/// Goal check result after the full plan ran.
///
/// Not reaching the goal is a normal negative outcome, not an error: the
/// plan itself was well-formed and executed to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanVerdict {
    /// The designated robot rests on the goal cell.
    Reached,
    /// Nothing stands on the goal cell.
    CellUnoccupied,
    /// Some other robot holds the goal cell.
    WrongRobot(RobotId),
}

impl PlanVerdict {
    #[must_use]
    pub const fn is_reached(self) -> bool {
        matches!(self, PlanVerdict::Reached)
    }
}

impl std::fmt::Display for PlanVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanVerdict::Reached => write!(f, "goal reached"),
            PlanVerdict::CellUnoccupied => write!(f, "goal not reached: cell unoccupied"),
            PlanVerdict::WrongRobot(robot) => {
                write!(f, "goal not reached: occupied by {}", robot)
            }
        }
    }
}

/// Everything a plan run produces: the verdict, the fully expanded trace,
/// and the final occupancy.
#[derive(Clone, Debug)]
pub struct PlanReport {
    pub verdict: PlanVerdict,
    pub trace: Vector<Event>,
    pub occupancy: Occupancy,
}

impl PlanReport {
    #[must_use]
    pub fn is_reached(&self) -> bool {
        self.verdict.is_reached()
    }

    /// Moves in the plan (one `Go` per coarse move).
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.trace
            .iter()
            .filter(|e| matches!(e, Event::Go { .. }))
            .count()
    }

    /// Serialize the expanded plan, one atomic action per line.
    #[must_use]
    pub fn expanded_plan(&self, cells: &CellTable, robots: &RobotTable) -> String {
        let mut out = String::new();
        for event in &self.trace {
            out.push_str(&event.to_line(cells, robots));
            out.push('\n');
        }
        out
    }
}

/// Run a coarse plan from `start`, then check the goal.
///
/// Fails fast on a move naming an unknown robot; everything else, including
/// a plan that never gets near the goal, is reported through the verdict.
pub fn run_plan(
    board: &Board,
    start: &Occupancy,
    goal: Goal,
    moves: &[Move],
) -> Result<PlanReport, MoveError> {
    let mut occupancy = start.clone();
    let mut trace = Vector::new();

    for &mv in moves {
        let outcome = apply_move(board, &occupancy, mv)?;
        for &event in &outcome.events {
            trace.push_back(event);
        }
        occupancy = outcome.occupancy;
    }

    let verdict = match occupancy.robot_at(goal.cell) {
        Some(robot) if robot == goal.robot => PlanVerdict::Reached,
        Some(robot) => PlanVerdict::WrongRobot(robot),
        None => PlanVerdict::CellUnoccupied,
    };

    Ok(PlanReport {
        verdict,
        trace,
        occupancy,
    })
}
