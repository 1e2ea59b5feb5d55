//! The A* search loop and path reconstruction.

use std::collections::BinaryHeap;
use std::fmt;

use astarviz_core::{Board, CellState, Point};

use crate::heuristic::manhattan;

/// Sentinel for "no cost known yet" (stands in for +infinity).
const UNREACHABLE: i32 = i32::MAX;

/// Sentinel for "no predecessor".
const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Public contract types
// ---------------------------------------------------------------------------

/// Verdict returned by the step callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Keep searching.
    Continue,
    /// Stop promptly without completing further relaxation steps.
    Cancel,
}

/// How a search invocation ended.
///
/// `NoPath` and `Cancelled` are normal outcomes, not errors; callers display
/// both as "no path shown".
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// A path was found and marked on the board; `steps` is its unit-cost
    /// length (the g-score of the end cell).
    PathFound { steps: i32 },
    /// The frontier was exhausted without reaching the end cell.
    NoPath,
    /// The step callback requested cancellation before the search completed.
    Cancelled,
}

impl SearchOutcome {
    /// Whether a complete path was found.
    #[inline]
    pub const fn path_found(self) -> bool {
        matches!(self, Self::PathFound { .. })
    }
}

/// Precondition violation detected before the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// `start` and `end` must be distinct cells.
    StartIsEnd(Point),
    /// The given endpoint does not belong to the board.
    OutOfBounds(Point),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartIsEnd(p) => write!(f, "start and end are the same cell {p}"),
            Self::OutOfBounds(p) => write!(f, "endpoint {p} is outside the board"),
        }
    }
}

impl std::error::Error for SearchError {}

// ---------------------------------------------------------------------------
// Search state (fresh per invocation)
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    g: i32,
    f: i32,
    parent: usize,
    /// Mirrors heap membership; the heap itself supports neither membership
    /// queries nor decrease-key.
    in_open: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: NO_PARENT,
            in_open: false,
        }
    }
}

/// Heap entry, ordered ascending by `(f, seq)`.
///
/// `seq` is the insertion counter: equal f-scores pop FIFO, which makes the
/// exploration order reproducible regardless of heap internals.
#[derive(Clone, Copy, Eq, PartialEq)]
struct OpenEntry {
    f: i32,
    seq: u32,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest (f, seq) first.
        other.f.cmp(&self.f).then(other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Run A* from `start` to `end` on `board`.
///
/// The board's adjacency must have been recomputed since the last barrier
/// change. Cell states are mutated as the search progresses: newly
/// discovered cells become `Open`, expanded cells become `Closed`, and on
/// success the intermediate route cells become `Path`.
///
/// `on_step` is invoked once after each frontier expansion and once after
/// each path-reconstruction mark; returning [`Step::Cancel`] aborts the
/// search promptly, leaving the board in a consistent partially-explored
/// state.
pub fn run<F>(
    board: &mut Board,
    start: Point,
    end: Point,
    mut on_step: F,
) -> Result<SearchOutcome, SearchError>
where
    F: FnMut(&Board) -> Step,
{
    let start_idx = board.index(start).ok_or(SearchError::OutOfBounds(start))?;
    let end_idx = board.index(end).ok_or(SearchError::OutOfBounds(end))?;
    if start_idx == end_idx {
        return Err(SearchError::StartIsEnd(start));
    }

    let len = (board.size() * board.size()) as usize;
    let mut nodes = vec![Node::default(); len];
    nodes[start_idx].g = 0;
    nodes[start_idx].f = manhattan(start, end);
    nodes[start_idx].in_open = true;

    let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
    let mut seq: u32 = 0;
    open.push(OpenEntry {
        f: nodes[start_idx].f,
        seq,
        idx: start_idx,
    });

    let mut expanded: u32 = 0;
    let mut nbuf: Vec<Point> = Vec::with_capacity(4);

    while let Some(current) = open.pop() {
        let ci = current.idx;
        nodes[ci].in_open = false;
        let cp = board.point(ci);

        if ci == end_idx {
            log::debug!(
                "path found: {} steps after {} expansions",
                nodes[end_idx].g,
                expanded
            );
            return Ok(reconstruct(board, &nodes, start_idx, end_idx, &mut on_step));
        }

        expanded += 1;
        let tentative_g = nodes[ci].g + 1;

        nbuf.clear();
        nbuf.extend_from_slice(board.neighbors_of(cp));

        for &np in &nbuf {
            let Some(ni) = board.index(np) else {
                continue;
            };
            // Strict improvement only: ties never trigger relaxation.
            if tentative_g < nodes[ni].g {
                nodes[ni].parent = ci;
                nodes[ni].g = tentative_g;
                nodes[ni].f = tentative_g + manhattan(np, end);
                if !nodes[ni].in_open {
                    seq += 1;
                    open.push(OpenEntry {
                        f: nodes[ni].f,
                        seq,
                        idx: ni,
                    });
                    nodes[ni].in_open = true;
                    board.set_state(np, CellState::Open);
                }
                // Already pending: g/f/parent are fresh, the stale heap
                // entry keeps its old priority and is popped as-is.
            }
        }

        if on_step(board) == Step::Cancel {
            log::debug!("search cancelled after {expanded} expansions");
            return Ok(SearchOutcome::Cancelled);
        }

        if ci != start_idx {
            board.set_state(cp, CellState::Closed);
        }
    }

    log::debug!("no path: frontier exhausted after {expanded} expansions");
    Ok(SearchOutcome::NoPath)
}

/// Walk the predecessor chain from `end` back to `start`, marking every
/// intermediate cell as `Path`.
///
/// The parent links form a tree rooted at start (a cell's parent is only
/// ever set on strict cost improvement), so the walk terminates at the
/// no-parent sentinel without a cycle guard.
fn reconstruct<F>(
    board: &mut Board,
    nodes: &[Node],
    start_idx: usize,
    end_idx: usize,
    on_step: &mut F,
) -> SearchOutcome
where
    F: FnMut(&Board) -> Step,
{
    let steps = nodes[end_idx].g;

    let mut ci = nodes[end_idx].parent;
    while ci != NO_PARENT {
        if ci != start_idx {
            board.set_state(board.point(ci), CellState::Path);
            if on_step(board) == Step::Cancel {
                return SearchOutcome::Cancelled;
            }
        }
        ci = nodes[ci].parent;
    }

    // The end cell was painted Open when first discovered; restore it.
    board.set_state(board.point(end_idx), CellState::End);
    let _ = on_step(board);

    SearchOutcome::PathFound { steps }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        for o in [
            SearchOutcome::PathFound { steps: 8 },
            SearchOutcome::NoPath,
            SearchOutcome::Cancelled,
        ] {
            let json = serde_json::to_string(&o).unwrap();
            let back: SearchOutcome = serde_json::from_str(&json).unwrap();
            assert_eq!(o, back);
        }
    }
}
