//! **astarviz-core** — the grid/cell data model of the A* visualizer.
//!
//! This crate provides the board the search engine runs on: geometry
//! primitives, typed cell states, adjacency recomputation, and the
//! pointer-to-cell coordinate transform. It knows nothing about rendering
//! or about the search itself.

pub mod board;
pub mod cell;
pub mod geom;

pub use board::{Board, BoardError, map_point_to_cell};
pub use cell::{Cell, CellState};
pub use geom::Point;
