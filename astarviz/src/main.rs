use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};

use astarviz_lib::session::Session;
use astarviz_lib::ui::Ui;
use astarviz_search::{SearchOutcome, Step};

/// Board side length (cells). The reference canvas uses 50; terminals are
/// shorter than they are wide, so a smaller board keeps cells on screen.
const ROWS: i32 = 24;

const HELP: &str =
    "click: start / end / barrier   right-click: erase   space: search   c: clear   q: quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(ROWS)?;
    let mut ui = Ui::init()?;
    let result = event_loop(&mut session, &mut ui);
    ui.close();
    result
}

fn event_loop(session: &mut Session, ui: &mut Ui) -> Result<(), Box<dyn std::error::Error>> {
    let mut status = String::from(HELP);

    loop {
        ui.draw(session.board(), &status)?;

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('c') => {
                    session.reset();
                    status = String::from(HELP);
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    status = run_search(session, ui);
                }
                _ => {}
            },
            Event::Mouse(me) => match me.kind {
                MouseEventKind::Down(MouseButton::Left)
                | MouseEventKind::Drag(MouseButton::Left) => {
                    if let Some(p) = ui.cell_at(me.column, me.row, session.board()) {
                        session.primary_press(p);
                    }
                }
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => {
                    if let Some(p) = ui.cell_at(me.column, me.row, session.board()) {
                        session.secondary_press(p);
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }
}

/// Run one search, redrawing per step and polling for Esc to cancel.
/// Returns the status line to display afterwards.
fn run_search(session: &mut Session, ui: &mut Ui) -> String {
    let outcome = session.trigger_search(|board| {
        if ui.draw(board, "searching...  esc: cancel").is_err() {
            return Step::Cancel;
        }
        // The poll timeout doubles as the animation pace.
        if let Ok(true) = event::poll(Duration::from_millis(8)) {
            if let Ok(Event::Key(key)) = event::read() {
                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Step::Cancel;
                }
            }
        }
        Step::Continue
    });

    match outcome {
        Ok(SearchOutcome::PathFound { steps }) => {
            format!("path found: {steps} steps   {HELP}")
        }
        Ok(SearchOutcome::NoPath) => format!("no path exists   {HELP}"),
        Ok(SearchOutcome::Cancelled) => format!("search cancelled   {HELP}"),
        Err(e) => format!("{e}   {HELP}"),
    }
}
