//! Crossterm terminal frontend: board rendering and pointer mapping.
//!
//! Every board cell is drawn as a two-column colored block so cells come
//! out roughly square in a terminal. All color constants and terminal
//! plumbing live here; the core crates know nothing about any of it.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use astarviz_core::{Board, CellState, Point};

/// Terminal columns per board cell.
pub const CELL_COLS: u16 = 2;

const COL_EMPTY: Color = Color::Rgb { r: 235, g: 235, b: 235 };
const COL_OPEN: Color = Color::Rgb { r: 80, g: 200, b: 80 };
const COL_CLOSED: Color = Color::Rgb { r: 220, g: 70, b: 70 };
const COL_BARRIER: Color = Color::Rgb { r: 25, g: 25, b: 25 };
const COL_START: Color = Color::Rgb { r: 255, g: 165, b: 0 };
const COL_END: Color = Color::Rgb { r: 64, g: 224, b: 208 };
const COL_PATH: Color = Color::Rgb { r: 150, g: 70, b: 200 };
const COL_STATUS_FG: Color = Color::Rgb { r: 200, g: 200, b: 200 };

fn state_color(s: CellState) -> Color {
    match s {
        CellState::Empty => COL_EMPTY,
        CellState::Open => COL_OPEN,
        CellState::Closed => COL_CLOSED,
        CellState::Barrier => COL_BARRIER,
        CellState::Start => COL_START,
        CellState::End => COL_END,
        CellState::Path => COL_PATH,
    }
}

/// The terminal surface. Restores the terminal on [`close`](Ui::close).
pub struct Ui {
    out: io::Stdout,
}

impl Ui {
    /// Enter raw mode, the alternate screen, and mouse capture.
    pub fn init() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut out = io::stdout();
        execute!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All),
            EnableMouseCapture
        )?;
        Ok(Self { out })
    }

    /// Restore the terminal. Errors are ignored: this runs on every exit
    /// path, including after a failure.
    pub fn close(&mut self) {
        let _ = execute!(
            &mut self.out,
            DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    /// Redraw the whole board plus a one-line status below it.
    pub fn draw(&mut self, board: &Board, status: &str) -> io::Result<()> {
        for cell in board.iter() {
            queue!(
                &mut self.out,
                cursor::MoveTo(cell.pos.x as u16 * CELL_COLS, cell.pos.y as u16),
                SetBackgroundColor(state_color(cell.state)),
                Print("  ")
            )?;
        }
        queue!(
            &mut self.out,
            cursor::MoveTo(0, board.size() as u16),
            ResetColor,
            SetForegroundColor(COL_STATUS_FG),
            terminal::Clear(ClearType::CurrentLine),
            Print(status),
            ResetColor
        )?;
        self.out.flush()
    }

    /// Map a terminal coordinate to the board cell under it, if any.
    pub fn cell_at(&self, column: u16, row: u16, board: &Board) -> Option<Point> {
        let p = Point::new(column as i32 / CELL_COLS as i32, row as i32);
        board.contains(p).then_some(p)
    }
}
