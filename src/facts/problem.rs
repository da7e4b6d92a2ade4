//! Problem file ingestion.
//!
//! Problems arrive as PDDL-style text: relational facts inside the `(:init`
//! section, the target inside `(:goal`. Only the `next`, `blocked`, and
//! `at` predicates matter, matched case-insensitively because the generator
//! emits them uppercase while planners reprint them lowercase.
//! Everything else (`(:objects`, `free`, `nothing-is-moving`, cost fluents,
//! `;;` comments) is ignored.

use thiserror::Error;

use crate::board::{Adjacency, Board, MalformedTopology, WallMap};
use crate::core::{CellTable, Direction, RobotTable};
use crate::plan::Goal;
use crate::sim::{Occupancy, PlacementError};

/// An ingestion failure, with the 1-based line it happened on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: `{fact}` fact has too few arguments")]
    BadArity { line: usize, fact: &'static str },

    #[error("line {line}: unknown direction `{label}`")]
    UnknownDirection { line: usize, label: String },

    #[error("line {line}: robot `{label}` is placed twice")]
    DuplicateRobot { line: usize, label: String },

    #[error("line {line}: cell `{label}` holds two robots")]
    OccupiedCell { line: usize, label: String },

    #[error("line {line}: more than 255 robots")]
    TooManyRobots { line: usize },

    #[error("no goal fact found")]
    MissingGoal,

    #[error("line {line}: more than one goal fact")]
    MultipleGoals { line: usize },

    #[error("line {line}: goal names robot `{label}`, which is never placed")]
    UnknownGoalRobot { line: usize, label: String },
}

/// A fully ingested problem: the fact set, interning tables, initial
/// occupancy, and goal. Reconstruction (the `board` module) is a separate
/// step so malformed topology is reported apart from unreadable text.
#[derive(Clone, Debug)]
pub struct Problem {
    pub cells: CellTable,
    pub robots: RobotTable,
    pub adjacency: Vec<Adjacency>,
    pub walls: WallMap,
    pub occupancy: Occupancy,
    pub goal: Goal,
}

impl Problem {
    /// Parse a problem file.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut cells = CellTable::new();
        let mut robots = RobotTable::new();
        let mut adjacency = Vec::new();
        let mut walls = WallMap::new();
        let mut occupancy = Occupancy::new();
        // (robot label, cell label, line), resolved once the scan is done
        let mut goal_facts: Vec<(String, String, usize)> = Vec::new();

        #[derive(PartialEq)]
        enum Section {
            Preamble,
            Init,
            Goal,
        }
        let mut section = Section::Preamble;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            if raw.contains("(:init") {
                section = Section::Init;
            }
            if raw.contains("(:goal") {
                section = Section::Goal;
            }

            match section {
                Section::Preamble => {}
                Section::Goal => {
                    if let Some(args) = fact_args(raw, "at") {
                        if args.len() < 2 {
                            return Err(ParseError::BadArity { line, fact: "at" });
                        }
                        goal_facts.push((args[0].to_string(), args[1].to_string(), line));
                    }
                }
                Section::Init => {
                    if let Some(args) = fact_args(raw, "next") {
                        if args.len() < 3 {
                            return Err(ParseError::BadArity { line, fact: "next" });
                        }
                        let direction = parse_direction(args[2], line)?;
                        let from = cells.intern(args[0]);
                        let to = cells.intern(args[1]);
                        adjacency.push(Adjacency::new(from, to, direction));
                    } else if let Some(args) = fact_args(raw, "blocked") {
                        if args.len() < 2 {
                            return Err(ParseError::BadArity {
                                line,
                                fact: "blocked",
                            });
                        }
                        let direction = parse_direction(args[1], line)?;
                        walls.insert(cells.intern(args[0]), direction);
                    } else if let Some(args) = fact_args(raw, "at") {
                        if args.len() < 2 {
                            return Err(ParseError::BadArity { line, fact: "at" });
                        }
                        let robot = robots
                            .intern(args[0])
                            .ok_or(ParseError::TooManyRobots { line })?;
                        let cell = cells.intern(args[1]);
                        occupancy.place(robot, cell).map_err(|e| match e {
                            PlacementError::RobotAlreadyPlaced(_) => ParseError::DuplicateRobot {
                                line,
                                label: args[0].to_string(),
                            },
                            PlacementError::CellOccupied(_) => ParseError::OccupiedCell {
                                line,
                                label: args[1].to_string(),
                            },
                        })?;
                    }
                }
            }
        }

        let goal = match goal_facts.as_slice() {
            [] => return Err(ParseError::MissingGoal),
            [(robot_label, cell_label, line)] => {
                let robot =
                    robots
                        .get(robot_label)
                        .ok_or_else(|| ParseError::UnknownGoalRobot {
                            line: *line,
                            label: robot_label.clone(),
                        })?;
                Goal::new(robot, cells.intern(cell_label))
            }
            [_, (_, _, line), ..] => return Err(ParseError::MultipleGoals { line: *line }),
        };

        Ok(Self {
            cells,
            robots,
            adjacency,
            walls,
            occupancy,
            goal,
        })
    }

    /// Reconstruct the board this problem describes.
    pub fn reconstruct(&self) -> Result<Board, MalformedTopology> {
        Board::reconstruct(&self.adjacency, self.walls.clone(), &self.cells)
    }

    /// Reconstruct, additionally requiring the given dimension.
    pub fn reconstruct_with_size(&self, size: usize) -> Result<Board, MalformedTopology> {
        Board::reconstruct_with_size(&self.adjacency, self.walls.clone(), &self.cells, size)
    }
}

fn parse_direction(label: &str, line: usize) -> Result<Direction, ParseError> {
    Direction::from_name(label).ok_or_else(|| ParseError::UnknownDirection {
        line,
        label: label.to_string(),
    })
}

/// Find `(predicate arg...)` in a line, case-insensitively on the predicate,
/// and return the whitespace-separated arguments. The format puts one fact
/// per line, so the first well-formed occurrence wins.
fn fact_args<'a>(line: &'a str, predicate: &str) -> Option<Vec<&'a str>> {
    let lower = line.to_ascii_lowercase();
    let needle = format!("({}", predicate);
    let mut search_from = 0;
    while let Some(pos) = lower[search_from..].find(&needle) {
        let start = search_from + pos;
        let after = start + needle.len();
        match lower.as_bytes().get(after) {
            Some(b) if b.is_ascii_whitespace() => {
                let close = line[after..].find(')')? + after;
                return Some(line[after..close].split_whitespace().collect());
            }
            _ => search_from = after,
        }
    }
    None
}
