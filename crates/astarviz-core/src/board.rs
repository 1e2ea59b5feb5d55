//! The [`Board`] type — a square grid of [`Cell`]s with adjacency
//! recomputation and the pointer-to-cell coordinate transform.

use std::fmt;

use crate::cell::{Cell, CellState};
use crate::geom::Point;

/// Neighbor probe order: down, up, right, left.
///
/// Any stable order is correct; this particular one is kept because the
/// insertion order into the frontier decides tie-breaking, and changing it
/// would change the exploration animation for equal f-scores.
const DIRS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 0),
    Point::new(-1, 0),
];

/// Error building a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// The requested size was zero or negative.
    NonPositiveSize(i32),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize(n) => write!(f, "board size must be positive, got {n}"),
        }
    }
}

impl std::error::Error for BoardError {}

/// A square `size × size` grid of cells, stored row-major.
#[derive(Clone, Debug)]
pub struct Board {
    size: i32,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a `size × size` board of empty cells.
    pub fn new(size: i32) -> Result<Self, BoardError> {
        if size <= 0 {
            return Err(BoardError::NonPositiveSize(size));
        }
        let n = (size * size) as usize;
        let mut cells = Vec::with_capacity(n);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell::new(Point::new(x, y)));
            }
        }
        Ok(Self { size, cells })
    }

    /// Side length of the board.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether `p` lies inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.size && p.y < self.size
    }

    /// Flat row-major index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.size + p.x) as usize)
        } else {
            None
        }
    }

    /// Position of the cell at flat index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Point {
        let i = i as i32;
        Point::new(i % self.size, i / self.size)
    }

    /// State of the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.index(p).map(|i| self.cells[i].state)
    }

    /// Set the state of the cell at `p`. No-op if `p` is out of bounds.
    #[inline]
    pub fn set_state(&mut self, p: Point, state: CellState) {
        if let Some(i) = self.index(p) {
            self.cells[i].state = state;
        }
    }

    /// Neighbor list of the cell at `p`, as of the last
    /// [`recompute_adjacency`](Self::recompute_adjacency). Empty slice if
    /// `p` is out of bounds.
    #[inline]
    pub fn neighbors_of(&self, p: Point) -> &[Point] {
        match self.index(p) {
            Some(i) => &self.cells[i].neighbors,
            None => &[],
        }
    }

    /// First cell (row-major) in the given state, if any.
    pub fn find(&self, state: CellState) -> Option<Point> {
        self.cells.iter().find(|c| c.state == state).map(|c| c.pos)
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Rebuild every cell's neighbor list from the four orthogonal
    /// directions, excluding out-of-bounds positions and barrier cells.
    ///
    /// Must be called for the whole board immediately before each search:
    /// barrier placement since the last call invalidates the lists.
    pub fn recompute_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            let p = self.cells[i].pos;
            let mut neighbors = Vec::with_capacity(4);
            for d in DIRS {
                let np = p + d;
                match self.state(np) {
                    Some(s) if !s.is_barrier() => neighbors.push(np),
                    _ => {}
                }
            }
            self.cells[i].neighbors = neighbors;
        }
    }

    /// Reset every search-painted cell (`Open`/`Closed`/`Path`) back to
    /// `Empty`, keeping barriers and endpoints.
    pub fn clear_exploration(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state.is_exploration() {
                c.state = CellState::Empty;
            }
        }
    }
}

/// Map a pixel coordinate to the cell under it.
///
/// `rows` is the board side length and `pixel_width` the total width of the
/// square canvas; cells are `pixel_width / rows` pixels wide. The input must
/// already lie inside the canvas — clamping out-of-range pointer positions
/// is the caller's job.
#[inline]
pub fn map_point_to_cell(p: Point, rows: i32, pixel_width: i32) -> Point {
    let gap = pixel_width / rows;
    Point::new(p.x / gap, p.y / gap)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_non_positive_size() {
        assert_eq!(Board::new(0).unwrap_err(), BoardError::NonPositiveSize(0));
        assert_eq!(Board::new(-3).unwrap_err(), BoardError::NonPositiveSize(-3));
    }

    #[test]
    fn cells_match_their_positions() {
        let b = Board::new(4).unwrap();
        for (i, c) in b.iter().enumerate() {
            assert_eq!(b.index(c.pos), Some(i));
            assert_eq!(b.point(i), c.pos);
            assert_eq!(c.state, CellState::Empty);
        }
    }

    #[test]
    fn state_accessors_bounds() {
        let mut b = Board::new(3).unwrap();
        assert_eq!(b.state(Point::new(2, 2)), Some(CellState::Empty));
        assert_eq!(b.state(Point::new(3, 0)), None);
        b.set_state(Point::new(1, 1), CellState::Barrier);
        assert_eq!(b.state(Point::new(1, 1)), Some(CellState::Barrier));
        // Out-of-bounds set is a no-op, not a panic.
        b.set_state(Point::new(-1, 0), CellState::Barrier);
    }

    #[test]
    fn adjacency_order_and_bounds() {
        let mut b = Board::new(3).unwrap();
        b.recompute_adjacency();
        // Interior cell: down, up, right, left.
        assert_eq!(
            b.neighbors_of(Point::new(1, 1)),
            &[
                Point::new(1, 2),
                Point::new(1, 0),
                Point::new(2, 1),
                Point::new(0, 1),
            ]
        );
        // Corner cell: only in-bounds directions survive.
        assert_eq!(
            b.neighbors_of(Point::new(0, 0)),
            &[Point::new(0, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn adjacency_excludes_barriers() {
        let mut b = Board::new(3).unwrap();
        b.set_state(Point::new(1, 0), CellState::Barrier);
        b.recompute_adjacency();
        assert_eq!(b.neighbors_of(Point::new(0, 0)), &[Point::new(0, 1)]);
        // Symmetry: the barrier cell itself still lists its non-barrier
        // neighbors, but nothing lists the barrier.
        for c in b.iter() {
            assert!(!c.neighbors.contains(&Point::new(1, 0)));
        }
    }

    #[test]
    fn adjacency_is_idempotent() {
        let mut b = Board::new(5).unwrap();
        b.set_state(Point::new(2, 2), CellState::Barrier);
        b.recompute_adjacency();
        let first: Vec<Vec<Point>> = b.iter().map(|c| c.neighbors.clone()).collect();
        b.recompute_adjacency();
        let second: Vec<Vec<Point>> = b.iter().map(|c| c.neighbors.clone()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let mut b = Board::new(4).unwrap();
        b.set_state(Point::new(1, 2), CellState::Barrier);
        b.set_state(Point::new(3, 0), CellState::Barrier);
        b.recompute_adjacency();
        for c in b.iter() {
            for &n in &c.neighbors {
                if !b.state(c.pos).unwrap().is_barrier() {
                    assert!(
                        b.neighbors_of(n).contains(&c.pos),
                        "{} lists {} but not vice versa",
                        c.pos,
                        n
                    );
                }
            }
        }
    }

    #[test]
    fn clear_exploration_keeps_layout() {
        let mut b = Board::new(3).unwrap();
        b.set_state(Point::new(0, 0), CellState::Start);
        b.set_state(Point::new(2, 2), CellState::End);
        b.set_state(Point::new(1, 1), CellState::Barrier);
        b.set_state(Point::new(0, 1), CellState::Closed);
        b.set_state(Point::new(1, 0), CellState::Open);
        b.set_state(Point::new(2, 1), CellState::Path);
        b.clear_exploration();
        assert_eq!(b.state(Point::new(0, 0)), Some(CellState::Start));
        assert_eq!(b.state(Point::new(2, 2)), Some(CellState::End));
        assert_eq!(b.state(Point::new(1, 1)), Some(CellState::Barrier));
        assert_eq!(b.state(Point::new(0, 1)), Some(CellState::Empty));
        assert_eq!(b.state(Point::new(1, 0)), Some(CellState::Empty));
        assert_eq!(b.state(Point::new(2, 1)), Some(CellState::Empty));
    }

    #[test]
    fn map_point_to_cell_divides_by_gap() {
        // 50 rows over an 800-pixel canvas: 16 pixels per cell.
        assert_eq!(map_point_to_cell(Point::new(0, 0), 50, 800), Point::ZERO);
        assert_eq!(
            map_point_to_cell(Point::new(15, 15), 50, 800),
            Point::new(0, 0)
        );
        assert_eq!(
            map_point_to_cell(Point::new(16, 31), 50, 800),
            Point::new(1, 1)
        );
        assert_eq!(
            map_point_to_cell(Point::new(799, 799), 50, 800),
            Point::new(49, 49)
        );
    }
}
