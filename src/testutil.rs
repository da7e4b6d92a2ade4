//! Shared fixtures for unit tests: complete square boards built the same
//! way the upstream fact generator emits them.

use crate::board::{Adjacency, Board, WallMap};
use crate::core::{CellId, CellTable, Direction, RobotTable};

/// Build a closed `size x size` board. `barriers` holds 1-based
/// `(col, row, direction)` triples; each is mirrored onto the adjoining
/// cell, matching the symmetric emission of the encoding.
pub(crate) fn square_board(
    size: usize,
    barriers: &[(usize, usize, Direction)],
) -> (CellTable, Board) {
    let mut cells = CellTable::new();
    let mut ids = vec![vec![CellId(0); size]; size];
    for r in 0..size {
        for c in 0..size {
            ids[r][c] = cells.intern(&label(c + 1, r + 1));
        }
    }

    let mut facts = Vec::new();
    for r in 0..size {
        for c in 0..size {
            if c + 1 < size {
                facts.push(Adjacency::new(ids[r][c], ids[r][c + 1], Direction::East));
                facts.push(Adjacency::new(ids[r][c + 1], ids[r][c], Direction::West));
            }
            if r + 1 < size {
                facts.push(Adjacency::new(ids[r][c], ids[r + 1][c], Direction::South));
                facts.push(Adjacency::new(ids[r + 1][c], ids[r][c], Direction::North));
            }
        }
    }

    let mut walls = WallMap::new();
    for i in 0..size {
        walls.insert(ids[0][i], Direction::North);
        walls.insert(ids[size - 1][i], Direction::South);
        walls.insert(ids[i][0], Direction::West);
        walls.insert(ids[i][size - 1], Direction::East);
    }
    for &(col, row, direction) in barriers {
        let (r, c) = (row - 1, col - 1);
        walls.insert(ids[r][c], direction);
        let (dr, dc) = direction.delta();
        let nr = r.checked_add_signed(dr).unwrap();
        let nc = c.checked_add_signed(dc).unwrap();
        walls.insert(ids[nr][nc], direction.opposite());
    }

    let board = Board::reconstruct(&facts, walls, &cells).unwrap();
    (cells, board)
}

/// `robot-1` .. `robot-n`.
pub(crate) fn robot_table(n: usize) -> RobotTable {
    let mut robots = RobotTable::new();
    for i in 1..=n {
        robots.intern(&format!("robot-{}", i)).unwrap();
    }
    robots
}

/// The canonical label for 1-based `(col, row)`.
pub(crate) fn label(col: usize, row: usize) -> String {
    format!("cell-{}-{}", col, row)
}
