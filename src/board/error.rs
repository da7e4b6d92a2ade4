//! Reconstruction failures.

use thiserror::Error;

use crate::core::Direction;

/// Structural violation found while reconstructing a board.
///
/// Any of these means no valid board can be derived from the fact set, so
/// reconstruction aborts without partial recovery. Variants carry the
/// offending cell labels so the input encoding can be diagnosed directly.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MalformedTopology {
    /// Every cell has a west or north neighbor, so no top-left corner exists.
    #[error("no origin cell: every cell has a west or north neighbor")]
    MissingOrigin,

    /// More than one cell qualifies as the top-left corner.
    #[error("ambiguous origin: {first} and {second} both lack west and north neighbors")]
    AmbiguousOrigin { first: String, second: String },

    /// Two adjacency facts give the same cell two successors in one direction.
    #[error("{cell} has two successors toward {direction}")]
    DuplicateSuccessor { cell: String, direction: Direction },

    /// A neighbor chain looped back onto a cell that was already placed.
    #[error("{cell} was reached twice while expanding the matrix")]
    RevisitedCell { cell: String },

    /// A row came out shorter or longer than the first one.
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },

    /// The matrix is rectangular but not square.
    #[error("matrix is {rows}x{cols}, expected a square board")]
    NotSquare { rows: usize, cols: usize },

    /// The reconstructed size contradicts an externally declared dimension.
    #[error("board is {size}x{size} but the declared dimension is {declared}")]
    DimensionMismatch { size: usize, declared: usize },

    /// Cells mentioned by the facts never made it into the matrix, meaning a
    /// chain terminated early or the facts describe a disconnected region.
    #[error("{count} cells missing from the matrix (first: {cell})")]
    UnplacedCells { count: usize, cell: String },

    /// An adjacency fact disagrees with the reconstructed matrix, so the
    /// neighbor relations are not mutually consistent.
    #[error("adjacency {from} -> {to} toward {direction} contradicts the matrix")]
    InconsistentAdjacency {
        from: String,
        to: String,
        direction: Direction,
    },

    /// A blocked fact names a cell that is not on the board.
    #[error("blocked fact names unknown cell {cell}")]
    UnknownBlockedCell { cell: String },

    /// An interior barrier is present on one side of a wall only.
    #[error("barrier on {cell} toward {direction} has no mirror on {neighbor}")]
    AsymmetricBarrier {
        cell: String,
        direction: Direction,
        neighbor: String,
    },

    /// A perimeter cell is missing its outward blocked fact.
    #[error("perimeter cell {cell} is not blocked toward {direction}")]
    OpenPerimeter { cell: String, direction: Direction },
}
