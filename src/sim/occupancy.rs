//! Robot occupancy: a bidirectional robot/cell mapping.
//!
//! Both directions are kept consistent through single update operations, so
//! injectivity (at most one robot per cell) holds by construction. Backed by
//! persistent maps: forking an occupancy per validated plan is O(1) while the
//! board itself stays shared and immutable.

use im::HashMap as ImHashMap;
use thiserror::Error;

use crate::core::{CellId, RobotId};

/// Why a robot could not be placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("{0} is already on the board")]
    RobotAlreadyPlaced(RobotId),

    #[error("cell is already occupied by {0}")]
    CellOccupied(RobotId),
}

/// Where each robot stands.
///
/// ```
/// use ricochet_engine::core::{CellId, RobotId};
/// use ricochet_engine::sim::Occupancy;
///
/// let mut occupancy = Occupancy::new();
/// occupancy.place(RobotId(0), CellId(5)).unwrap();
///
/// assert_eq!(occupancy.cell_of(RobotId(0)), Some(CellId(5)));
/// assert_eq!(occupancy.robot_at(CellId(5)), Some(RobotId(0)));
/// assert!(occupancy.place(RobotId(1), CellId(5)).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Occupancy {
    robot_cells: ImHashMap<RobotId, CellId>,
    cell_robots: ImHashMap<CellId, RobotId>,
}

impl Occupancy {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a robot on a free cell.
    pub fn place(&mut self, robot: RobotId, cell: CellId) -> Result<(), PlacementError> {
        if self.robot_cells.contains_key(&robot) {
            return Err(PlacementError::RobotAlreadyPlaced(robot));
        }
        if let Some(&occupant) = self.cell_robots.get(&cell) {
            return Err(PlacementError::CellOccupied(occupant));
        }
        self.robot_cells.insert(robot, cell);
        self.cell_robots.insert(cell, robot);
        Ok(())
    }

    /// Move an already placed robot to its slide destination.
    ///
    /// Panics if the robot is absent or the destination holds another robot;
    /// the simulator establishes both before calling.
    pub fn relocate(&mut self, robot: RobotId, to: CellId) {
        let from = match self.robot_cells.get(&robot) {
            Some(&cell) => cell,
            None => panic!("relocate of unplaced {}", robot),
        };
        if let Some(&occupant) = self.cell_robots.get(&to) {
            assert!(occupant == robot, "relocate onto occupied cell");
        }
        self.cell_robots.remove(&from);
        self.cell_robots.insert(to, robot);
        self.robot_cells.insert(robot, to);
    }

    /// The cell a robot stands on.
    #[must_use]
    pub fn cell_of(&self, robot: RobotId) -> Option<CellId> {
        self.robot_cells.get(&robot).copied()
    }

    /// The robot standing on a cell.
    #[must_use]
    pub fn robot_at(&self, cell: CellId) -> Option<RobotId> {
        self.cell_robots.get(&cell).copied()
    }

    #[must_use]
    pub fn contains(&self, robot: RobotId) -> bool {
        self.robot_cells.contains_key(&robot)
    }

    /// Number of placed robots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.robot_cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.robot_cells.is_empty()
    }

    /// Iterate over `(robot, cell)` pairs, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (RobotId, CellId)> + '_ {
        self.robot_cells.iter().map(|(&r, &c)| (r, c))
    }

    /// Both maps agree and no cell holds two robots. Checked by tests.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.robot_cells.len() == self.cell_robots.len()
            && self
                .robot_cells
                .iter()
                .all(|(r, c)| self.cell_robots.get(c) == Some(r))
    }
}
