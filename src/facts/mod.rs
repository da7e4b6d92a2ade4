//! Ingestion of the relational problem encoding.

pub mod problem;

pub use problem::{ParseError, Problem};
