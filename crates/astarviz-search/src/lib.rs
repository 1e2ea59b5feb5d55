//! **astarviz-search** — the A* search engine of the grid visualizer.
//!
//! [`run`] explores a [`Board`](astarviz_core::Board) from a start cell to
//! an end cell over 4-directional unit-cost moves, painting cell states
//! (`Open`/`Closed`/`Path`) as it goes and invoking a caller-supplied step
//! callback once per frontier expansion so the caller can redraw and poll
//! for cancellation.
//!
//! The frontier is a binary heap ordered by `(f-score, insertion sequence)`:
//! equal f-scores pop in FIFO insertion order, so exploration is fully
//! deterministic for a given board layout.

mod astar;
mod heuristic;

pub use astar::{SearchError, SearchOutcome, Step, run};
pub use heuristic::manhattan;
