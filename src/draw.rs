//! ASCII board depiction.
//!
//! Walls render as `x`, open borders as `|`/`-`, robots as their 1-based
//! number, the goal cell as a letter (lowercase while empty, uppercase once
//! the right robot stands on it). [`splice`] places two depictions side by
//! side around a text gutter, which is how a plan walkthrough shows each
//! move's before and after states.

use crate::board::Board;
use crate::core::{Direction, RobotTable};
use crate::plan::Goal;
use crate::sim::{Event, Occupancy};

fn robot_glyph(number: u32) -> char {
    // One glyph per cell; wraps past robot 9.
    std::char::from_digit(number % 10, 10).unwrap()
}

fn goal_glyph(number: u32, reached: bool) -> char {
    let base = if reached { b'A' } else { b'a' };
    (base + ((number - 1) % 26) as u8) as char
}

/// Render the board with robots and (optionally) the goal.
#[must_use]
pub fn board_to_string(board: &Board, occupancy: &Occupancy, goal: Option<Goal>) -> String {
    let size = board.size();
    let mut s = String::new();

    for col in 0..size {
        s.push('+');
        s.push(if board.is_blocked(board.cell_at(0, col), Direction::North) {
            'x'
        } else {
            '-'
        });
    }
    s.push_str("+\n");

    for row in 0..size {
        let first = board.cell_at(row, 0);
        s.push(if board.is_blocked(first, Direction::West) {
            'x'
        } else {
            '|'
        });
        for col in 0..size {
            let cell = board.cell_at(row, col);
            let glyph = match (occupancy.robot_at(cell), goal) {
                (Some(r), Some(g)) if g.cell == cell && r == g.robot => {
                    goal_glyph(g.robot.number(), true)
                }
                (None, Some(g)) if g.cell == cell => goal_glyph(g.robot.number(), false),
                (Some(r), _) => robot_glyph(r.number()),
                (None, _) => ' ',
            };
            s.push(glyph);
            s.push(if board.is_blocked(cell, Direction::East) {
                'x'
            } else {
                '|'
            });
        }
        s.push('\n');

        for col in 0..size {
            s.push('+');
            s.push(if board.is_blocked(board.cell_at(row, col), Direction::South) {
                'x'
            } else {
                '-'
            });
        }
        s.push_str("+\n");
    }

    s
}

/// Place two equally tall renderings side by side around a text gutter.
///
/// Panics if the two sides have different line counts; they come from the
/// same board, so they always match.
#[must_use]
pub fn splice(left: &str, right: &str, gutter: &str) -> String {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();
    let gutter: Vec<&str> = if gutter.is_empty() {
        Vec::new()
    } else {
        gutter.lines().collect()
    };
    assert!(left.len() == right.len(), "spliced boards differ in height");

    let gap = gutter.iter().map(|l| l.len()).max().unwrap_or(0);
    let mut s = String::new();
    for (i, line) in left.iter().enumerate() {
        s.push_str(line);
        s.push_str("    ");
        let text = gutter.get(i).copied().unwrap_or("");
        s.push_str(text);
        for _ in text.len()..gap {
            s.push(' ');
        }
        s.push_str("    ");
        s.push_str(right[i]);
        s.push('\n');
    }
    s
}

/// The gutter text for one move: the `GO` header plus one `Step` line per
/// cell the robot passed through (including the cell it bounced off from).
#[must_use]
pub fn move_gutter(board: &Board, events: &[Event], robots: &RobotTable) -> String {
    let mut s = String::new();
    for event in events {
        match *event {
            Event::Go { robot, direction } => {
                s.push_str(&format!("GO {} {}\n", robots.label(robot), direction));
            }
            Event::Step {
                robot,
                from,
                direction,
                ..
            }
            | Event::StopAtRobot {
                robot,
                from,
                direction,
                ..
            } => {
                if let Some((row, col)) = board.coord_of(from) {
                    s.push_str(&format!(
                        "Step {} {} {} {}\n",
                        robots.label(robot),
                        row,
                        col,
                        direction
                    ));
                }
            }
            Event::StopAtBarrier { .. } => {}
        }
    }
    s
}

/// Render one applied move: board before, the move's steps, board after.
#[must_use]
pub fn move_walkthrough(
    board: &Board,
    before: &Occupancy,
    after: &Occupancy,
    goal: Option<Goal>,
    events: &[Event],
    robots: &RobotTable,
) -> String {
    let gutter = move_gutter(board, events, robots);
    splice(
        &board_to_string(board, before, goal),
        &board_to_string(board, after, goal),
        &gutter,
    )
}
