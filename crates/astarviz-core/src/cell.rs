//! The [`Cell`] type and its [`CellState`].

use std::fmt;

use crate::geom::Point;

/// The role a cell currently plays, for both the algorithm and the display.
///
/// `Open` and `Closed` are written by the search engine as it explores;
/// `Barrier`, `Start` and `End` are placed by the user; `Path` marks the
/// reconstructed route.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Open,
    Closed,
    Barrier,
    Start,
    End,
    Path,
}

impl CellState {
    /// Whether the cell blocks movement.
    #[inline]
    pub const fn is_barrier(self) -> bool {
        matches!(self, Self::Barrier)
    }

    /// Whether the cell is on the current exploration frontier.
    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }

    /// Whether the cell has already been expanded.
    #[inline]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Whether the cell belongs to the reconstructed path.
    #[inline]
    pub const fn is_path(self) -> bool {
        matches!(self, Self::Path)
    }

    /// Whether the cell was painted by a search run (as opposed to being
    /// user-placed or empty).
    #[inline]
    pub const fn is_exploration(self) -> bool {
        matches!(self, Self::Open | Self::Closed | Self::Path)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Empty => "empty",
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
            Self::Path => "path",
        };
        f.write_str(s)
    }
}

/// A single grid unit: its position, current state, and adjacency list.
///
/// `neighbors` is only meaningful immediately after
/// [`Board::recompute_adjacency`](crate::Board::recompute_adjacency); it is
/// not kept live across barrier mutations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub pos: Point,
    pub state: CellState,
    pub neighbors: Vec<Point>,
}

impl Cell {
    /// Create an empty cell at `pos` with no neighbors computed.
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Empty,
            neighbors: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_empty() {
        assert_eq!(CellState::default(), CellState::Empty);
        let c = Cell::new(Point::new(2, 3));
        assert_eq!(c.state, CellState::Empty);
        assert!(c.neighbors.is_empty());
    }

    #[test]
    fn state_predicates() {
        assert!(CellState::Barrier.is_barrier());
        assert!(CellState::Open.is_open());
        assert!(CellState::Closed.is_closed());
        assert!(CellState::Path.is_path());
        assert!(!CellState::Start.is_exploration());
        assert!(CellState::Open.is_exploration());
        assert!(CellState::Closed.is_exploration());
        assert!(CellState::Path.is_exploration());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_state_round_trip() {
        for s in [
            CellState::Empty,
            CellState::Open,
            CellState::Closed,
            CellState::Barrier,
            CellState::Start,
            CellState::End,
            CellState::Path,
        ] {
            let json = serde_json::to_string(&s).unwrap();
            let back: CellState = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }
}
