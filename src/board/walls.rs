//! The blocked predicate: boundary edges and interior barriers.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{CellId, Direction};

/// Set of `(cell, direction)` pairs through which movement is disallowed.
///
/// Covers both the board's outer edges (the encoding emits one outward
/// blocked fact per perimeter cell) and interior barriers (emitted
/// symmetrically on both sides of the wall). Duplicate facts collapse.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallMap {
    blocked: FxHashSet<(CellId, Direction)>,
}

impl WallMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `cell` is blocked toward `direction`.
    pub fn insert(&mut self, cell: CellId, direction: Direction) {
        self.blocked.insert((cell, direction));
    }

    /// Whether a robot moving through `cell` toward `direction` is stopped.
    #[must_use]
    pub fn is_blocked(&self, cell: CellId, direction: Direction) -> bool {
        self.blocked.contains(&(cell, direction))
    }

    /// Number of blocked pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Iterate over all blocked pairs, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (CellId, Direction)> + '_ {
        self.blocked.iter().copied()
    }
}
