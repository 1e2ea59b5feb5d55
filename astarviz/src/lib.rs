//! Interactive A* pathfinding visualizer.
//!
//! [`session`] holds the interaction controller (grid mutations, search
//! triggering); [`ui`] is the crossterm terminal frontend.

pub mod session;
pub mod ui;

pub use session::{Session, SessionError};
