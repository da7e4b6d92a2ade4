//! Robot identification.
//!
//! Robot labels come from a small fixed set (`robot-1` through `robot-4` in
//! the historical encoding) but the engine treats them as opaque and supports
//! up to 255. Like cells, labels are interned to dense IDs at ingestion.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a robot.
///
/// Indices are 0-based in order of first mention.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RobotId(pub u8);

impl RobotId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 1-based display number, as used by the board renderer.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0 as u32 + 1
    }
}

impl std::fmt::Display for RobotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Robot {}", self.0)
    }
}

/// Interner mapping robot labels to dense [`RobotId`]s and back.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RobotTable {
    map: FxHashMap<String, RobotId>,
    labels: Vec<String>,
}

impl RobotTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a label, returning its ID.
    ///
    /// Returns `None` once 255 distinct robots have been seen; the fact-set
    /// parser turns that into an ingestion error.
    pub fn intern(&mut self, label: &str) -> Option<RobotId> {
        if let Some(&id) = self.map.get(label) {
            return Some(id);
        }
        if self.labels.len() >= u8::MAX as usize {
            return None;
        }
        let id = RobotId(self.labels.len() as u8);
        self.map.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        Some(id)
    }

    /// Look up a label without interning it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<RobotId> {
        self.map.get(label).copied()
    }

    /// The label of an interned robot.
    ///
    /// Panics if the ID was not produced by this table.
    #[must_use]
    pub fn label(&self, id: RobotId) -> &str {
        &self.labels[id.index()]
    }

    /// Number of distinct robots seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over all interned IDs in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = RobotId> {
        (0..self.labels.len() as u8).map(RobotId)
    }
}
