//! Directional adjacency facts and their lookup structure.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{CellId, CellTable, Direction};

use super::error::MalformedTopology;

/// One adjacency fact: `to` is the neighbor of `from` toward `direction`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Adjacency {
    pub from: CellId,
    pub to: CellId,
    pub direction: Direction,
}

impl Adjacency {
    #[must_use]
    pub const fn new(from: CellId, to: CellId, direction: Direction) -> Self {
        Self {
            from,
            to,
            direction,
        }
    }
}

/// Lookup structure over a set of adjacency facts.
///
/// Maps `(cell, direction)` to the unique neighbor in that direction. Per
/// direction the mapping is a partial bijection: building the map fails if
/// any cell is given two successors toward the same direction.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyMap {
    next: FxHashMap<(CellId, Direction), CellId>,
    mentioned: FxHashSet<CellId>,
}

impl AdjacencyMap {
    /// Build the lookup from a full fact set.
    ///
    /// The cell table is only consulted to name cells in errors.
    pub fn build(facts: &[Adjacency], cells: &CellTable) -> Result<Self, MalformedTopology> {
        let mut map = Self::default();
        for fact in facts {
            let key = (fact.from, fact.direction);
            if map.next.contains_key(&key) {
                return Err(MalformedTopology::DuplicateSuccessor {
                    cell: cells.label(fact.from).to_string(),
                    direction: fact.direction,
                });
            }
            map.next.insert(key, fact.to);
            map.mentioned.insert(fact.from);
            map.mentioned.insert(fact.to);
        }
        Ok(map)
    }

    /// The neighbor of `cell` toward `direction`, if any fact declares one.
    #[must_use]
    pub fn neighbor(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        self.next.get(&(cell, direction)).copied()
    }

    /// All cells mentioned by any fact, in unspecified order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> + '_ {
        self.mentioned.iter().copied()
    }

    /// Number of distinct mentioned cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.mentioned.len()
    }

    /// Number of stored facts.
    #[must_use]
    pub fn fact_count(&self) -> usize {
        self.next.len()
    }
}
