//! The interaction controller: owns the board, applies pointer edits, and
//! runs searches single-flight.

use std::fmt;

use astarviz_core::{Board, BoardError, CellState, Point};
use astarviz_search::{SearchError, SearchOutcome, Step, run};

/// Error from [`Session::trigger_search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// A search is already running; invocation is single-flight.
    SearchInProgress,
    /// Start and/or end have not been placed yet.
    MissingEndpoints,
    /// The engine rejected its preconditions.
    Engine(SearchError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchInProgress => f.write_str("a search is already in progress"),
            Self::MissingEndpoints => f.write_str("place a start and an end cell first"),
            Self::Engine(e) => write!(f, "search rejected: {e}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SearchError> for SessionError {
    fn from(e: SearchError) -> Self {
        Self::Engine(e)
    }
}

/// Owns the board and the start/end placement, and mediates between user
/// edits and the search engine.
///
/// While a search is running the session suppresses interactive mutation;
/// the engine is the only writer for the duration of one `run` call (it
/// borrows the board exclusively).
pub struct Session {
    board: Board,
    start: Option<Point>,
    end: Option<Point>,
    searching: bool,
}

impl Session {
    /// Create a session over a fresh `rows × rows` board.
    pub fn new(rows: i32) -> Result<Self, BoardError> {
        Ok(Self {
            board: Board::new(rows)?,
            start: None,
            end: None,
            searching: false,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.board.size()
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    #[inline]
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    /// Primary (left) press on a cell: the first press places the start,
    /// the second the end, and every further press a barrier. Never
    /// overwrites the start or end cell.
    pub fn primary_press(&mut self, p: Point) {
        if self.searching || !self.board.contains(p) {
            return;
        }
        if self.start.is_none() && self.end != Some(p) {
            self.start = Some(p);
            self.board.set_state(p, CellState::Start);
        } else if self.end.is_none() && self.start != Some(p) {
            self.end = Some(p);
            self.board.set_state(p, CellState::End);
        } else if self.start != Some(p) && self.end != Some(p) {
            self.board.set_state(p, CellState::Barrier);
        }
    }

    /// Secondary (right) press on a cell: reset it to empty, forgetting a
    /// removed start/end.
    pub fn secondary_press(&mut self, p: Point) {
        if self.searching || !self.board.contains(p) {
            return;
        }
        self.board.set_state(p, CellState::Empty);
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
    }

    /// Recompute adjacency and run the engine with the given step callback.
    ///
    /// Refuses when a search is already in flight or when either endpoint is
    /// missing. Leftover exploration marks from a previous run are cleared
    /// first so each animation starts from the bare layout.
    pub fn trigger_search<F>(&mut self, on_step: F) -> Result<SearchOutcome, SessionError>
    where
        F: FnMut(&Board) -> Step,
    {
        if self.searching {
            return Err(SessionError::SearchInProgress);
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(SessionError::MissingEndpoints);
        };

        self.board.clear_exploration();
        self.board.recompute_adjacency();

        log::info!("search triggered: {start} -> {end}");
        self.searching = true;
        let result = run(&mut self.board, start, end, on_step);
        self.searching = false;

        let outcome = result?;
        log::debug!("search finished: {outcome:?}");
        Ok(outcome)
    }

    /// Reset exploration marks, keeping barriers and endpoints.
    pub fn clear_exploration(&mut self) {
        if !self.searching {
            self.board.clear_exploration();
        }
    }

    /// Discard the board and build a fresh one of the same size.
    pub fn reset(&mut self) {
        // The size came from a successfully built board, so this cannot fail.
        if let Ok(board) = Board::new(self.board.size()) {
            self.board = board;
        }
        self.start = None;
        self.end = None;
        self.searching = false;
    }
}
