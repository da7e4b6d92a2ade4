//! Cell identification.
//!
//! The relational encoding names cells with opaque labels (`cell-3-2`). The
//! engine never interprets those labels; it interns each one into a dense
//! `CellId` on first sight and keeps the label around for diagnostics and
//! rendering.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Unique identifier for a board cell.
///
/// IDs are dense indices assigned in order of first mention by the input
/// fact set. Two facts naming the same label get the same ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u32);

impl CellId {
    /// Get the raw index value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cell({})", self.0)
    }
}

/// Interner mapping cell labels to dense [`CellId`]s and back.
///
/// ```
/// use ricochet_engine::core::CellTable;
///
/// let mut cells = CellTable::new();
/// let a = cells.intern("cell-1-1");
/// let b = cells.intern("cell-2-1");
/// assert_eq!(cells.intern("cell-1-1"), a);
/// assert_ne!(a, b);
/// assert_eq!(cells.label(a), "cell-1-1");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CellTable {
    map: FxHashMap<String, CellId>,
    labels: Vec<String>,
}

impl CellTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a label, returning its ID. Repeated labels return the same ID.
    pub fn intern(&mut self, label: &str) -> CellId {
        if let Some(&id) = self.map.get(label) {
            return id;
        }
        let id = CellId(self.labels.len() as u32);
        self.map.insert(label.to_string(), id);
        self.labels.push(label.to_string());
        id
    }

    /// Look up a label without interning it.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<CellId> {
        self.map.get(label).copied()
    }

    /// The label of an interned cell.
    ///
    /// Panics if the ID was not produced by this table.
    #[must_use]
    pub fn label(&self, id: CellId) -> &str {
        &self.labels[id.index()]
    }

    /// Number of distinct cells seen so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over all interned IDs in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = CellId> {
        (0..self.labels.len() as u32).map(CellId)
    }
}
