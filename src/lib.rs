//! # ricochet-engine
//!
//! Board reconstruction and move simulation for Ricochet Robots plan
//! validation.
//!
//! The board is not given as coordinates. It arrives as an unordered set of
//! relational facts: directional adjacencies between opaque cell labels,
//! blocked `(cell, direction)` pairs, and robot placements. This crate
//! recovers the unique square matrix those facts imply, expands coarse
//! moves ("robot, direction") into ordered atomic event traces by sliding
//! robots until a wall or another robot stops them, and re-verifies goal
//! satisfaction for plans produced by external (untrusted) planners.
//!
//! ## Design Principles
//!
//! 1. **Reconstruction is total or fails loudly**: a fact set either yields
//!    the one consistent board or a [`board::MalformedTopology`] naming the
//!    offending cell. No partial recovery.
//!
//! 2. **The board is immutable shared state**: only the occupancy mutates,
//!    and each plan run owns its fork. Persistent (`im`) maps make a fork
//!    O(1), so many plans can be validated against one board.
//!
//! 3. **Missing the goal is a result, not an error**: the runner reports
//!    [`plan::PlanVerdict`] so callers can tell "ran fine, wrong square"
//!    apart from a malformed plan.
//!
//! ## Modules
//!
//! - `core`: cell/robot IDs, interning tables, directions
//! - `facts`: ingestion of the PDDL-style problem encoding
//! - `board`: topology reconstruction and the blocked predicate
//! - `sim`: occupancy, atomic events, coarse move application
//! - `plan`: skeleton plan parsing, sequential execution, goal check
//! - `draw`: ASCII board depictions and move walkthroughs
//!
//! ## Example
//!
//! ```
//! use ricochet_engine::{facts::Problem, plan};
//!
//! let text = "\
//! (:init
//!     (NEXT cell-1-1 cell-2-1 east)
//!     (NEXT cell-2-1 cell-1-1 west)
//!     (NEXT cell-1-1 cell-1-2 south)
//!     (NEXT cell-1-2 cell-1-1 north)
//!     (NEXT cell-1-2 cell-2-2 east)
//!     (NEXT cell-2-2 cell-1-2 west)
//!     (NEXT cell-2-1 cell-2-2 south)
//!     (NEXT cell-2-2 cell-2-1 north)
//!     (BLOCKED cell-1-1 north)
//!     (BLOCKED cell-2-1 north)
//!     (BLOCKED cell-1-2 south)
//!     (BLOCKED cell-2-2 south)
//!     (BLOCKED cell-1-1 west)
//!     (BLOCKED cell-1-2 west)
//!     (BLOCKED cell-2-1 east)
//!     (BLOCKED cell-2-2 east)
//!     (at robot-1 cell-1-1)
//! )
//! (:goal
//!     (at robot-1 cell-2-2)
//! )
//! ";
//!
//! let problem = Problem::parse(text).unwrap();
//! let board = problem.reconstruct().unwrap();
//!
//! let moves = plan::parse_plan("(go robot-1 east)\n(go robot-1 south)\n", &problem.robots).unwrap();
//! let report = plan::run_plan(&board, &problem.occupancy, problem.goal, &moves).unwrap();
//!
//! assert!(report.is_reached());
//! assert_eq!(report.move_count(), 2);
//! ```

pub mod board;
pub mod core;
pub mod draw;
pub mod facts;
pub mod plan;
pub mod sim;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use crate::core::{CellId, CellTable, Direction, RobotId, RobotTable, DIRECTIONS};

pub use crate::board::{Adjacency, AdjacencyMap, Board, MalformedTopology, WallMap};

pub use crate::facts::{ParseError, Problem};

pub use crate::sim::{apply_move, Event, Move, MoveError, MoveOutcome, Occupancy, PlacementError};

pub use crate::plan::{parse_plan, run_plan, Goal, PlanParseError, PlanReport, PlanVerdict};

pub use crate::draw::{board_to_string, move_walkthrough, splice};
