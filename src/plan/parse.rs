//! Skeleton plan parsing.
//!
//! Planners emit one `(go ROBOT DIRECTION)` per line; anything else in the
//! file (cost annotations, comments) is noise and is skipped. The output is
//! untrusted input: goal satisfaction is re-verified by the runner instead
//! of trusting the planner's claimed success.

use thiserror::Error;

use crate::core::{Direction, RobotTable};
use crate::sim::Move;

/// A `(go ...)` line that could not be interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PlanParseError {
    #[error("line {line}: go action needs a robot and a direction")]
    BadArity { line: usize },

    #[error("line {line}: unknown robot `{label}`")]
    UnknownRobot { line: usize, label: String },

    #[error("line {line}: unknown direction `{label}`")]
    UnknownDirection { line: usize, label: String },
}

/// Extract the coarse moves from a plan file.
///
/// Robot labels must already be known from the problem's occupancy facts; a
/// plan naming anything else is rejected.
pub fn parse_plan(text: &str, robots: &RobotTable) -> Result<Vec<Move>, PlanParseError> {
    let mut moves = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.len() < 4 || !trimmed.as_bytes()[..4].eq_ignore_ascii_case(b"(go ") {
            continue;
        }

        let mut tokens = trimmed.split_whitespace();
        tokens.next(); // "(go"
        let robot_label = tokens.next().ok_or(PlanParseError::BadArity { line })?;
        let direction_label = tokens
            .next()
            .ok_or(PlanParseError::BadArity { line })?
            .trim_end_matches(')');

        let robot = robots
            .get(robot_label)
            .ok_or_else(|| PlanParseError::UnknownRobot {
                line,
                label: robot_label.to_string(),
            })?;
        let direction =
            Direction::from_name(direction_label).ok_or_else(|| {
                PlanParseError::UnknownDirection {
                    line,
                    label: direction_label.to_string(),
                }
            })?;

        moves.push(Move::new(robot, direction));
    }
    Ok(moves)
}
