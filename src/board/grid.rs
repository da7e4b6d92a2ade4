//! Board reconstruction.
//!
//! The input gives no coordinates, only relational facts. The matrix is
//! recovered by anchoring at the unique top-left cell (no west neighbor, no
//! north neighbor), chaining east to lay out the first row, then chaining
//! south from each row's first cell to start the next row.
//!
//! ## Validation
//!
//! A board is accepted only if:
//! - exactly one origin candidate exists;
//! - no chain revisits a cell (cycles terminate reconstruction);
//! - all rows have equal length and the matrix is square;
//! - the implied dimension matches an externally declared one, if given;
//! - every mentioned cell was placed;
//! - every adjacency fact agrees with the recovered matrix, which also
//!   forces mutual consistency (A east of B iff B west of A);
//! - every blocked fact names a board cell, interior barriers are mirrored
//!   on the adjoining cell, and the perimeter is fully closed.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{CellId, CellTable, Direction};

use super::adjacency::{Adjacency, AdjacencyMap};
use super::error::MalformedTopology;
use super::walls::WallMap;

/// A reconstructed `size x size` board with its blocked predicate.
///
/// Immutable once built; the simulator and plan runner share it read-only.
#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    /// Row-major cell arena.
    cells: Vec<CellId>,
    coords: FxHashMap<CellId, (usize, usize)>,
    walls: WallMap,
}

impl Board {
    /// Reconstruct the board implied by `facts`.
    ///
    /// Purely a function of the inputs; `cells` is consulted only to name
    /// cells in errors.
    pub fn reconstruct(
        facts: &[Adjacency],
        walls: WallMap,
        cells: &CellTable,
    ) -> Result<Self, MalformedTopology> {
        Self::build(facts, walls, cells, None)
    }

    /// Reconstruct and additionally require the given dimension.
    pub fn reconstruct_with_size(
        facts: &[Adjacency],
        walls: WallMap,
        cells: &CellTable,
        declared: usize,
    ) -> Result<Self, MalformedTopology> {
        Self::build(facts, walls, cells, Some(declared))
    }

    fn build(
        facts: &[Adjacency],
        walls: WallMap,
        cells: &CellTable,
        declared: Option<usize>,
    ) -> Result<Self, MalformedTopology> {
        let map = AdjacencyMap::build(facts, cells)?;

        let mut candidates: Vec<CellId> = map
            .cells()
            .filter(|&c| {
                map.neighbor(c, Direction::West).is_none()
                    && map.neighbor(c, Direction::North).is_none()
            })
            .collect();
        candidates.sort();

        let origin = match candidates.as_slice() {
            [] => return Err(MalformedTopology::MissingOrigin),
            [origin] => *origin,
            [first, second, ..] => {
                return Err(MalformedTopology::AmbiguousOrigin {
                    first: cells.label(*first).to_string(),
                    second: cells.label(*second).to_string(),
                })
            }
        };

        let mut visited = FxHashSet::default();
        let mut rows: Vec<Vec<CellId>> = Vec::new();
        let mut row_start = origin;
        loop {
            rows.push(chain_east(&map, row_start, &mut visited, cells)?);
            match map.neighbor(row_start, Direction::South) {
                Some(next) => row_start = next,
                None => break,
            }
        }

        let width = rows[0].len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MalformedTopology::RaggedRow {
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
        }
        if rows.len() != width {
            return Err(MalformedTopology::NotSquare {
                rows: rows.len(),
                cols: width,
            });
        }
        if let Some(declared) = declared {
            if declared != width {
                return Err(MalformedTopology::DimensionMismatch {
                    size: width,
                    declared,
                });
            }
        }

        if visited.len() != map.cell_count() {
            let mut unplaced: Vec<CellId> =
                map.cells().filter(|c| !visited.contains(c)).collect();
            unplaced.sort();
            return Err(MalformedTopology::UnplacedCells {
                count: unplaced.len(),
                cell: cells.label(unplaced[0]).to_string(),
            });
        }

        let size = width;
        let mut arena = Vec::with_capacity(size * size);
        let mut coords = FxHashMap::default();
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                arena.push(cell);
                coords.insert(cell, (r, c));
            }
        }

        let board = Self {
            size,
            cells: arena,
            coords,
            walls,
        };
        board.verify_facts(facts, cells)?;
        board.verify_walls(cells)?;
        Ok(board)
    }

    /// Every fact must agree with the matrix. This also enforces mutual
    /// consistency, since the matrix itself is consistent by construction.
    fn verify_facts(&self, facts: &[Adjacency], cells: &CellTable) -> Result<(), MalformedTopology> {
        for fact in facts {
            if self.neighbor(fact.from, fact.direction) != Some(fact.to) {
                return Err(MalformedTopology::InconsistentAdjacency {
                    from: cells.label(fact.from).to_string(),
                    to: cells.label(fact.to).to_string(),
                    direction: fact.direction,
                });
            }
        }
        Ok(())
    }

    fn verify_walls(&self, cells: &CellTable) -> Result<(), MalformedTopology> {
        for (cell, direction) in self.walls.iter() {
            if !self.coords.contains_key(&cell) {
                return Err(MalformedTopology::UnknownBlockedCell {
                    cell: cells.label(cell).to_string(),
                });
            }
            if let Some(neighbor) = self.neighbor(cell, direction) {
                if !self.walls.is_blocked(neighbor, direction.opposite()) {
                    return Err(MalformedTopology::AsymmetricBarrier {
                        cell: cells.label(cell).to_string(),
                        direction,
                        neighbor: cells.label(neighbor).to_string(),
                    });
                }
            }
        }

        for i in 0..self.size {
            let edges = [
                (self.cell_at(0, i), Direction::North),
                (self.cell_at(self.size - 1, i), Direction::South),
                (self.cell_at(i, 0), Direction::West),
                (self.cell_at(i, self.size - 1), Direction::East),
            ];
            for (cell, direction) in edges {
                if !self.walls.is_blocked(cell, direction) {
                    return Err(MalformedTopology::OpenPerimeter {
                        cell: cells.label(cell).to_string(),
                        direction,
                    });
                }
            }
        }
        Ok(())
    }

    /// Board dimension (both width and height).
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell at `(row, col)`.
    ///
    /// Panics if out of range; callers iterate within `0..size()`.
    #[must_use]
    pub fn cell_at(&self, row: usize, col: usize) -> CellId {
        assert!(row < self.size && col < self.size, "coordinate out of range");
        self.cells[row * self.size + col]
    }

    /// The `(row, col)` of a cell, or `None` if it is not on this board.
    #[must_use]
    pub fn coord_of(&self, cell: CellId) -> Option<(usize, usize)> {
        self.coords.get(&cell).copied()
    }

    /// The matrix neighbor of `cell` toward `direction`.
    ///
    /// `None` at the board edge or for cells not on this board.
    #[must_use]
    pub fn neighbor(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        let (row, col) = self.coord_of(cell)?;
        let (dr, dc) = direction.delta();
        let nr = row.checked_add_signed(dr)?;
        let nc = col.checked_add_signed(dc)?;
        if nr >= self.size || nc >= self.size {
            return None;
        }
        Some(self.cell_at(nr, nc))
    }

    /// Whether movement through `cell` toward `direction` is blocked.
    #[must_use]
    pub fn is_blocked(&self, cell: CellId, direction: Direction) -> bool {
        self.walls.is_blocked(cell, direction)
    }

    /// The blocked predicate.
    #[must_use]
    pub fn walls(&self) -> &WallMap {
        &self.walls
    }

    /// One row of the matrix, west to east.
    #[must_use]
    pub fn row(&self, row: usize) -> &[CellId] {
        assert!(row < self.size, "row out of range");
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().copied()
    }
}

fn chain_east(
    map: &AdjacencyMap,
    start: CellId,
    visited: &mut FxHashSet<CellId>,
    cells: &CellTable,
) -> Result<Vec<CellId>, MalformedTopology> {
    let mut row = Vec::new();
    let mut current = start;
    loop {
        if !visited.insert(current) {
            return Err(MalformedTopology::RevisitedCell {
                cell: cells.label(current).to_string(),
            });
        }
        row.push(current);
        match map.neighbor(current, Direction::East) {
            Some(next) => current = next,
            None => return Ok(row),
        }
    }
}
